//! Scan-cycle orchestration.
//!
//! Each market in a cycle is screened (liquidity, technical data), run
//! through the decision engine, and on approval submitted and recorded.
//! Loop timing and the stop signal live in the infrastructure runtime.

pub mod handler;
