//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the collaborators the scan loop drives: market
//! supply, order execution, trade persistence, and the stop signal.

pub mod executor;
pub mod market;
pub mod recorder;
pub mod shutdown;
