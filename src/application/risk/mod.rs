//! Position sizing and pre-trade validation.

pub mod limits;
pub mod sizer;
pub mod validator;
