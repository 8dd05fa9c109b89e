use crate::{Error, Poly, Result, Term};

/// d/dx: each term a·x^d with d > 0 becomes (a·d)·x^(d-1). 
/// Constant terms are dropped. Fails only if a·d does not fit in `i64`.
pub fn differentiate(p: &Poly) -> Result<Poly> { 
    p.iter()
        .filter(|t| !t.is_const())
        .map(diff_term)
        .collect()
}

pub fn nth_derivative(p: &Poly, n: usize) -> Result<Poly> { 
    (0..n).try_fold(p.clone(), |q, _| differentiate(&q))
}

fn diff_term(t: &Term) -> Result<Term> { 
    let (a, d) = (t.coeff(), t.deg());
    let c = a.checked_mul(i64::from(d)).ok_or_else(|| Error::OutOfRange { 
        what: "coefficient", 
        value: format!("{a}·{d}")
    })?;
    Ok(Term::new(c, d - 1))
}
