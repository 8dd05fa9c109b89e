mod format;
mod helper;

pub use format::*;
pub use helper::*;
