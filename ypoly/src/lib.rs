mod error;
mod types;

pub mod parse;
pub mod format;
pub mod diff;
pub mod eval;
pub mod newton;
pub mod util;

pub use error::*;
pub use types::*;

pub use parse::parse;
pub use format::{format, format_unicode};
pub use diff::{differentiate, nth_derivative};
pub use eval::{evaluate, evaluate_derivative_at};
pub use newton::{find_root, Newton, NewtonCfg, Root, Step};
