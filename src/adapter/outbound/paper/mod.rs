//! Paper-trading adapter.

pub mod executor;
