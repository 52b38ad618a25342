//! Exchange-agnostic domain types for the decision core.

pub mod edge;
pub mod error;
pub mod feature;
pub mod id;
pub mod market;
pub mod outcome;
pub mod probability;
pub mod signal;
pub mod sizing;
pub mod trade;
