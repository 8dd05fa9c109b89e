#[derive(Debug, derive_more::Display)]
pub struct AppErr(pub(crate) String);

impl std::error::Error for AppErr {}

macro_rules! err {
    ($($arg:tt)*) => {{
        let e = AppErr(format!($($arg)*));
        Err( e.into() )
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
