//! Application services (use cases).
//!
//! These services run domain logic through the inbound ports and coordinate
//! outbound adapters to turn a market snapshot into a trading decision.

pub mod decision;
pub mod fusion;
pub mod orchestration;
pub mod risk;
