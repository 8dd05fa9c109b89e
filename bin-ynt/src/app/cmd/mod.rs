pub mod diff;
pub mod eval;
pub mod root;
