use std::any::Any;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::panic::{catch_unwind, UnwindSafe};
use std::str::FromStr;
use std::time::Instant;
use log::info;
use ypoly::Poly;
use super::super::err::*;

/// Runs `proc` and logs its wall-clock time under `label`.
pub fn measure<F, Res>(label: &str, proc: F) -> Res
where F: FnOnce() -> Res { 
    let start = Instant::now();
    let res = proc();
    info!("{label}: {:?}", start.elapsed());
    res
}

/// Turns a panic inside `f` into an `AppErr`.
pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + UnwindSafe {
    match catch_unwind(f) { 
        Ok(res) => res,
        Err(payload) => err!("panic: {}", panic_message(payload.as_ref()))
    }
}

fn panic_message<'a>(payload: &'a (dyn Any + Send + 'static)) -> &'a str { 
    if let Some(s) = payload.downcast_ref::<&str>() { 
        s
    } else if let Some(s) = payload.downcast_ref::<String>() { 
        s.as_str()
    } else { 
        "unknown cause"
    }
}

/// Parses `input` as a polynomial, ignoring whitespace.
pub fn load_poly(input: &str, simplify: bool) -> Result<Poly, Box<dyn std::error::Error>> { 
    let s = input.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    let p = ypoly::parse(&s)?;

    if simplify { 
        Ok(p.simplify()?)
    } else { 
        Ok(p)
    }
}

/// Writes `msg` to stderr and reads one line from `input`.
pub fn prompt<R, T>(input: &mut R, msg: &str) -> Result<T, Box<dyn std::error::Error>>
where R: BufRead, T: FromStr, T::Err: Display { 
    eprint!("{msg}");
    std::io::stderr().flush()?;

    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    ensure!(n > 0, "unexpected end of input.");

    let s = line.trim();
    match T::from_str(s) { 
        Ok(v) => Ok(v),
        Err(e) => err!("cannot parse '{s}': {e}")
    }
}
