use std::fmt::{Display, Debug};
use std::str::FromStr;
use delegate::delegate;
use itertools::Itertools;

use crate::{Error, Result};
use super::{Deg, Term};

// A polynomial in x is an ordered sequence of terms.
// Polynomials built by `parse` (from canonical text) and by `differentiate`
// have strictly decreasing exponents. The empty sequence is the zero polynomial.

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Poly { 
    terms: Vec<Term>
}

impl Poly { 
    pub fn new(terms: Vec<Term>) -> Self { 
        Self { terms }
    }

    pub fn zero() -> Self { 
        Self::default()
    }

    pub fn terms(&self) -> &[Term] { 
        &self.terms
    }

    delegate! { 
        to self.terms { 
            #[call(len)] pub fn nterms(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, Term>;
        }
    }

    pub fn degree(&self) -> Option<Deg> { 
        self.iter().filter(|t| !t.is_zero()).map(|t| t.deg()).max()
    }

    /// Merges like terms, drops zero terms and sorts the result by 
    /// descending exponent. Fails with `OutOfRange` if a merged 
    /// coefficient does not fit in `i64`.
    pub fn simplify(&self) -> Result<Self> { 
        let mut terms = vec![];

        let chunks = self.iter()
            .sorted_by(|t1, t2| t2.deg().cmp(&t1.deg()))
            .chunk_by(|t| t.deg());

        for (d, chunk) in &chunks { 
            let a = chunk.map(|t| t.coeff()).try_fold(0i64, |acc, a| 
                acc.checked_add(a).ok_or_else(|| Error::OutOfRange { 
                    what: "coefficient", 
                    value: format!("{acc} + {a}") 
                })
            )?;
            if a != 0 { 
                terms.push(Term::new(a, d));
            }
        }

        Ok(Self::new(terms))
    }
}

impl FromIterator<Term> for Poly { 
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<(i64, Deg)> for Poly { 
    fn from_iter<T: IntoIterator<Item = (i64, Deg)>>(iter: T) -> Self {
        iter.into_iter().map(Term::from).collect()
    }
}

impl IntoIterator for Poly { 
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Poly { 
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl FromStr for Poly { 
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl Display for Poly { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format(self))
    }
}

impl Debug for Poly { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let list = self.iter().map(|t| (t.coeff(), t.deg())).collect_vec();
        write!(f, "{list:?}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Poly { 
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.serialize_str(&crate::format(self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Poly { 
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init() { 
        let p = Poly::from_iter([(3, 2), (2, 1), (5, 0)]);
        assert_eq!(p.nterms(), 3);
        assert_eq!(p.terms()[0], Term::new(3, 2));
        assert_eq!(p.degree(), Some(2));
    }

    #[test]
    fn zero() { 
        let p = Poly::zero();
        assert!(p.is_empty());
        assert_eq!(p.degree(), None);

        let p = Poly::from_iter([(0, 3), (0, 0)]);
        assert!(!p.is_empty());
        assert_eq!(p.degree(), None);
        assert_eq!(p.simplify(), Ok(Poly::zero()));
    }

    #[test]
    fn structural_eq() { 
        let p = Poly::from_iter([(1, 1), (2, 1)]);
        let q = Poly::from_iter([(3, 1)]);
        assert_ne!(p, q);
        assert_eq!(p.clone(), p);
    }

    #[test]
    fn simplify() { 
        let p = Poly::from_iter([(2, 1), (3, 1), (1, 3), (4, 0), (-4, 0)]);
        assert_eq!(p.simplify(), Ok(Poly::from_iter([(1, 3), (5, 1)])));

        let p = Poly::from_iter([(1, 2), (-1, 2)]);
        assert_eq!(p.simplify(), Ok(Poly::zero()));
    }

    #[test]
    fn simplify_concatenated() { 
        let p = Poly::from_iter([(1, 2), (1, 0)]);
        let q = Poly::from_iter([(1, 2), (-1, 0)]);
        let sum = p.into_iter().chain(q).collect::<Poly>();
        assert_eq!(sum.nterms(), 4);
        assert_eq!(sum.simplify(), Ok(Poly::from_iter([(2, 2)])));
    }

    #[test]
    fn simplify_overflow() { 
        let p = Poly::from_iter([(i64::MAX, 1), (1, 1)]);
        assert!(matches!(p.simplify(), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn debug() { 
        let p = Poly::from_iter([(3, 2), (2, 1), (5, 0)]);
        assert_eq!(format!("{p:?}"), "[(3, 2), (2, 1), (5, 0)]");
    }

    #[test]
    fn from_str() { 
        let p: Poly = "x^2-2".parse().unwrap();
        assert_eq!(p, Poly::from_iter([(1, 2), (-2, 0)]));
        assert!("x^".parse::<Poly>().is_err());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() { 
        let p = Poly::from_iter([(-1, 2), (2, 1), (-5, 0)]);
        let ser = serde_json::to_string(&p).unwrap();
        let des = serde_json::from_str::<Poly>(&ser).unwrap();

        assert_eq!(&ser, "\"-x^2+2x-5\"");
        assert_eq!(des, p);
    }
}
