use std::fmt::Display;
use num_traits::{One, Zero};

/// The exponent type. Unsigned, so a term can never carry a negative exponent.
pub type Deg = u32;

// `Term` : represents a monomial a·x^d with a ∈ ℤ, d ≥ 0.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Term { 
    coeff: i64,
    deg: Deg
}

impl Term { 
    pub const VAR_SYMBOL: char = 'x';

    pub fn new(coeff: i64, deg: Deg) -> Self { 
        Self { coeff, deg }
    }

    pub fn coeff(&self) -> i64 { 
        self.coeff
    }

    pub fn deg(&self) -> Deg { 
        self.deg
    }

    pub fn is_zero(&self) -> bool { 
        self.coeff.is_zero()
    }

    pub fn is_const(&self) -> bool { 
        self.deg.is_zero()
    }

    // The numeral is omitted for ±1 in front of x, e.g. x^2, -x.
    pub(crate) fn fmt_with<F>(&self, first: bool, fmt_deg: F) -> String
    where F: Fn(Deg) -> String { 
        let a = self.coeff;
        let d = self.deg;

        let sign = if a > 0 && !first { "+" } else { "" };
        let coeff = if d.is_zero() || !a.unsigned_abs().is_one() { 
            a.to_string()
        } else if a < 0 { 
            "-".to_string()
        } else { 
            String::new()
        };
        let var = if d.is_zero() { 
            String::new()
        } else { 
            format!("{}{}", Self::VAR_SYMBOL, fmt_deg(d))
        };

        format!("{sign}{coeff}{var}")
    }
}

impl From<(i64, Deg)> for Term { 
    fn from((coeff, deg): (i64, Deg)) -> Self {
        Self::new(coeff, deg)
    }
}

impl From<Term> for (i64, Deg) { 
    fn from(t: Term) -> Self {
        (t.coeff, t.deg)
    }
}

impl Display for Term { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.fmt_with(true, crate::format::fmt_deg_ascii);
        f.write_str(&s)
    }
}
