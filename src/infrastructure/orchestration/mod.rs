//! Scan runtime orchestration.
//!
//! Wires the decision engine to its market source, executor, trade log, and
//! kill switch, and drives the scan loop.

pub mod runtime;
