use num_traits::Zero;

use crate::{Deg, Poly};

/// Σ a·x^d over all terms, with 0^0 = 1.
pub fn evaluate(p: &Poly, x: f64) -> f64 { 
    p.iter()
        .map(|t| t.coeff() as f64 * pow(x, t.deg()))
        .sum()
}

/// Σ (a·d)·x^(d-1) over terms with d > 0. Agrees bit-for-bit with
/// `evaluate(&differentiate(p)?, x)` whenever a·d is exact in `f64`.
pub fn evaluate_derivative_at(p: &Poly, x: f64) -> f64 { 
    p.iter()
        .filter(|t| !t.deg().is_zero())
        .map(|t| (t.coeff() as f64 * t.deg() as f64) * pow(x, t.deg() - 1))
        .sum()
}

fn pow(x: f64, d: Deg) -> f64 { 
    match i32::try_from(d) { 
        Ok(d) => x.powi(d),
        Err(_) => x.powf(d as f64)
    }
}
