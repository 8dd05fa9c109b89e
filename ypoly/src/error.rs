use derive_more::Display;

#[derive(Clone, PartialEq, Debug, Display)]
pub enum Error { 
    #[display("parse error at {pos}: {msg}")]
    Parse { pos: usize, msg: String },

    #[display("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: String },

    #[display("division by zero: f'(x) = 0 at x = {x} (iteration {iter})")]
    DivisionByZero { iter: usize, x: f64 },

    #[display("no root found within {max_iter} iterations (last x = {x})")]
    NoRootFound { max_iter: usize, x: f64 },

    #[display("invalid argument: {_0}")]
    InvalidArg(String),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

macro_rules! parse_err {
    ($pos:expr, $($arg:tt)*) => {{
        let e = $crate::Error::Parse { pos: $pos, msg: format!($($arg)*) };
        Err(e)
    }}
}

macro_rules! ensure_arg {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return Err($crate::Error::InvalidArg(format!($($arg)*)));
        }
    }}
}

pub(crate) use {parse_err, ensure_arg};

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn display() { 
        let e = Error::Parse { pos: 3, msg: "unexpected 'y'".into() };
        assert_eq!(e.to_string(), "parse error at 3: unexpected 'y'");

        let e = Error::OutOfRange { what: "coefficient", value: "99999999999999999999".into() };
        assert_eq!(e.to_string(), "coefficient out of range: 99999999999999999999");

        let e = Error::NoRootFound { max_iter: 20, x: 0.5 };
        assert_eq!(e.to_string(), "no root found within 20 iterations (last x = 0.5)");
    }

    #[test]
    fn distinct_kinds() { 
        let a = Error::DivisionByZero { iter: 1, x: 0.0 };
        let b = Error::NoRootFound { max_iter: 1, x: 0.0 };
        assert_ne!(a, b);
        assert!(matches!(a, Error::DivisionByZero { .. }));
    }
}
