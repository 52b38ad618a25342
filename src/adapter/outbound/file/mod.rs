//! File-backed adapters.
//!
//! - [`kill_switch`]: sentinel-file stop signal
//! - [`snapshot`]: JSON market snapshot source
//! - [`trade_log`]: append-only trade log

pub mod kill_switch;
pub mod snapshot;
pub mod trade_log;
