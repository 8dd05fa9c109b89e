mod term;
mod poly;

pub use term::*;
pub use poly::*;
