//! Infrastructure configuration modules.

pub mod fusion;
pub mod logging;
pub mod risk;
pub mod scan;
pub mod settings;
pub mod signal;
