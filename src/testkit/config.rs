//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.
//! Avoids each test module defining its own slightly-different defaults.

use std::path::Path;

use crate::infrastructure::config::scan::ScanConfig;
use crate::infrastructure::config::settings::Config;

/// Scan config with zero waits, bounded to `max_cycles`.
///
/// `max_cycles = 0` leaves the loop unbounded; pair it with a stop signal.
pub fn fast_scan(max_cycles: u64) -> ScanConfig {
    ScanConfig {
        scan_interval_secs: 0,
        market_pause_secs: 0,
        error_backoff_secs: 0,
        kill_switch_poll_secs: 1,
        max_cycles,
        ..ScanConfig::default()
    }
}

/// Default config with every file path rooted in `dir`.
pub fn in_dir(dir: &Path) -> Config {
    let mut config = Config::default();
    config.kill_switch_path = dir.join("STOP.txt");
    config.trade_log_path = dir.join("trades.log");
    config.scan = ScanConfig {
        markets_path: dir.join("markets.json"),
        ..fast_scan(1)
    };
    config
}

/// TOML for [`in_dir`], for tests that drive the binary.
pub fn toml_in_dir(dir: &Path, max_cycles: u64) -> String {
    format!(
        r#"kill_switch_path = "{stop}"
trade_log_path = "{log}"

[scan]
markets_path = "{markets}"
scan_interval_secs = 0
market_pause_secs = 0
error_backoff_secs = 0
kill_switch_poll_secs = 1
max_cycles = {max_cycles}
"#,
        stop = toml_path(&dir.join("STOP.txt")),
        log = toml_path(&dir.join("trades.log")),
        markets = toml_path(&dir.join("markets.json")),
    )
}

fn toml_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}
