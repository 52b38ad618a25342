//! Scan loop configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Timing and filtering for the scan runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// JSON file of market snapshots read each cycle.
    #[serde(default = "default_markets_path")]
    pub markets_path: PathBuf,
    /// Markets with less traded volume are skipped.
    #[serde(default = "default_min_market_liquidity")]
    pub min_market_liquidity: u64,
    #[serde(default = "default_scan_interval_secs")]
    pub scan_interval_secs: u64,
    /// Kill switch poll period during idle waits.
    #[serde(default = "default_kill_switch_poll_secs")]
    pub kill_switch_poll_secs: u64,
    /// Pause between markets within a cycle.
    #[serde(default = "default_market_pause_secs")]
    pub market_pause_secs: u64,
    /// Wait after a failed cycle before retrying.
    #[serde(default = "default_error_backoff_secs")]
    pub error_backoff_secs: u64,
    /// Stop after this many cycles; 0 runs until stopped.
    #[serde(default)]
    pub max_cycles: u64,
}

fn default_markets_path() -> PathBuf {
    PathBuf::from("markets.json")
}

const fn default_min_market_liquidity() -> u64 {
    1000
}

const fn default_scan_interval_secs() -> u64 {
    300
}

const fn default_kill_switch_poll_secs() -> u64 {
    10
}

const fn default_market_pause_secs() -> u64 {
    2
}

const fn default_error_backoff_secs() -> u64 {
    60
}

impl ScanConfig {
    #[must_use]
    pub const fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs)
    }

    #[must_use]
    pub const fn kill_switch_poll(&self) -> Duration {
        Duration::from_secs(self.kill_switch_poll_secs)
    }

    #[must_use]
    pub const fn market_pause(&self) -> Duration {
        Duration::from_secs(self.market_pause_secs)
    }

    #[must_use]
    pub const fn error_backoff(&self) -> Duration {
        Duration::from_secs(self.error_backoff_secs)
    }

    /// Cycle limit, `None` when unbounded.
    #[must_use]
    pub const fn cycle_limit(&self) -> Option<u64> {
        if self.max_cycles == 0 {
            None
        } else {
            Some(self.max_cycles)
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            markets_path: default_markets_path(),
            min_market_liquidity: default_min_market_liquidity(),
            scan_interval_secs: default_scan_interval_secs(),
            kill_switch_poll_secs: default_kill_switch_poll_secs(),
            market_pause_secs: default_market_pause_secs(),
            error_backoff_secs: default_error_backoff_secs(),
            max_cycles: 0,
        }
    }
}
