//! Signal normalization and fusion strategies.

pub mod classifier;
pub mod ensemble;
pub mod normalizer;
