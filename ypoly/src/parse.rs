//! Parser for the canonical text form of a polynomial. 
//! 
//! ```text
//! poly  := "" | term (("+" | "-") term)*
//! term  := "-"? digits? ("x" ("^" digits)?)?     (non-empty apart from the sign)
//! ```
//! 
//! A term without `x` is a constant (exponent 0). A term without digits 
//! before `x` has coefficient 1, or -1 if preceded by `-`.
//! The scanner is a single left-to-right cursor; like terms are not merged.

use log::trace;

use crate::{Deg, Error, Poly, Result, Term};
use crate::error::parse_err;

pub fn parse(text: &str) -> Result<Poly> { 
    let mut s = Scanner::new(text);
    let mut terms = vec![];

    while !s.is_end() { 
        let t = s.term()?;
        trace!("term[{}]: ({}, {}) at {}", terms.len(), t.coeff(), t.deg(), s.pos);
        terms.push(t);
        s.separator()?;
    }

    Ok(Poly::new(terms))
}

struct Scanner<'a> { 
    src: &'a str,
    pos: usize
}

impl<'a> Scanner<'a> { 
    fn new(src: &'a str) -> Self { 
        Self { src, pos: 0 }
    }

    fn is_end(&self) -> bool { 
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<u8> { 
        self.src.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, c: u8) -> bool { 
        if self.peek() == Some(c) { 
            self.pos += 1;
            true
        } else { 
            false
        }
    }

    // maximal run of ASCII digits, if any.
    fn digits(&mut self) -> Option<&'a str> { 
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) { 
            self.pos += 1;
        }
        if self.pos > start { 
            Some(&self.src[start..self.pos])
        } else { 
            None
        }
    }

    fn term(&mut self) -> Result<Term> { 
        let neg = self.eat(b'-');
        let digits = self.digits();

        let deg = if self.eat(b'x') { 
            if self.eat(b'^') { 
                match self.digits() { 
                    Some(d) => Some(parse_deg(d)?),
                    None => return self.unexpected("digits after '^'")
                }
            } else { 
                Some(1)
            }
        } else { 
            None
        };

        if digits.is_none() && deg.is_none() { 
            return self.unexpected("digits or 'x'")
        }

        let coeff = parse_coeff(neg, digits)?;
        Ok(Term::new(coeff, deg.unwrap_or(0)))
    }

    // '+' is consumed, '-' is left as the sign of the next term.
    fn separator(&mut self) -> Result<()> { 
        match self.peek() { 
            None | Some(b'-') => Ok(()),
            Some(b'+') => { 
                self.pos += 1;
                if self.is_end() { 
                    self.unexpected("a term after '+'")
                } else { 
                    Ok(())
                }
            },
            Some(_) => self.unexpected("'+' or '-'")
        }
    }

    fn unexpected<T>(&self, expected: &str) -> Result<T> { 
        match self.src[self.pos..].chars().next() { 
            Some(c) => parse_err!(self.pos, "unexpected '{c}', expected {expected}"),
            None    => parse_err!(self.pos, "unexpected end of input, expected {expected}")
        }
    }
}

fn parse_coeff(neg: bool, digits: Option<&str>) -> Result<i64> { 
    let Some(digits) = digits else { 
        return Ok(if neg { -1 } else { 1 })
    };

    let out_of_range = || Error::OutOfRange { 
        what: "coefficient", 
        value: format!("{}{digits}", if neg { "-" } else { "" })
    };

    let m = digits.parse::<u64>().map_err(|_| out_of_range())?;
    let a = if neg { 
        0i64.checked_sub_unsigned(m)
    } else { 
        i64::try_from(m).ok()
    };

    a.ok_or_else(out_of_range)
}

fn parse_deg(digits: &str) -> Result<Deg> { 
    digits.parse::<Deg>().map_err(|_| Error::OutOfRange { 
        what: "exponent", 
        value: digits.to_string()
    })
}
