//! Newton's method on a polynomial: x ← x - f(x)/f'(x).
//! 
//! Each iteration takes one step and then tests |f(x)| < tolerance, so
//! at least one step is taken even if `x0` is already a root. 
//! Divergence is not detected beyond the iteration cap.

use log::debug;

use crate::{evaluate, evaluate_derivative_at, Error, Poly, Result};
use crate::error::ensure_arg;

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct NewtonCfg { 
    pub tolerance: f64,
    pub max_iter: usize
}

impl NewtonCfg { 
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;
    pub const DEFAULT_MAX_ITER: usize = 100;

    pub fn new(tolerance: f64, max_iter: usize) -> Self { 
        Self { tolerance, max_iter }
    }

    pub fn validate(&self) -> Result<()> { 
        ensure_arg!(self.tolerance.is_finite() && self.tolerance > 0.0, "tolerance must be positive and finite, got {}", self.tolerance);
        ensure_arg!(self.max_iter > 0, "max_iter must be positive");
        Ok(())
    }
}

impl Default for NewtonCfg { 
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE, Self::DEFAULT_MAX_ITER)
    }
}

/// The state after the `iter`-th step.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Step { 
    pub iter: usize,
    pub x: f64,
    pub fx: f64
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Root { 
    pub x: f64,
    pub fx: f64,
    pub iter: usize
}

impl From<Step> for Root { 
    fn from(s: Step) -> Self {
        Self { x: s.x, fx: s.fx, iter: s.iter }
    }
}

pub struct Newton<'a> { 
    poly: &'a Poly,
    cfg: NewtonCfg
}

impl<'a> Newton<'a> { 
    pub fn new(poly: &'a Poly, cfg: NewtonCfg) -> Self { 
        Self { poly, cfg }
    }

    pub fn run(&self, x0: f64) -> Result<Root> { 
        self.run_with(x0, |_| ())
    }

    /// Runs the iteration, calling `on_step` once per completed step. 
    pub fn run_with<F>(&self, x0: f64, mut on_step: F) -> Result<Root>
    where F: FnMut(&Step) { 
        self.cfg.validate()?;
        ensure_arg!(x0.is_finite(), "initial guess must be finite, got {x0}");

        let p = self.poly;
        let NewtonCfg { tolerance, max_iter } = self.cfg;

        let mut x = x0;

        for iter in 1..=max_iter { 
            let fx = evaluate(p, x);
            let dfx = evaluate_derivative_at(p, x);

            if dfx == 0.0 { 
                debug!("newton[{iter}]: f'(x) = 0 at x = {x}");
                return Err(Error::DivisionByZero { iter, x })
            }

            x -= fx / dfx;

            let step = Step { iter, x, fx: evaluate(p, x) };
            debug!("newton[{iter}]: x = {}, f(x) = {}", step.x, step.fx);
            on_step(&step);

            if step.fx.abs() < tolerance { 
                return Ok(step.into())
            }
        }

        Err(Error::NoRootFound { max_iter, x })
    }
}

pub fn find_root(p: &Poly, x0: f64, tolerance: f64, max_iter: usize) -> Result<f64> { 
    let cfg = NewtonCfg::new(tolerance, max_iter);
    Newton::new(p, cfg).run(x0).map(|r| r.x)
}
