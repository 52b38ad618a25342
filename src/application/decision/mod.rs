//! Edge evaluation and the per-market decision pipeline.

pub mod edge;
pub mod engine;
