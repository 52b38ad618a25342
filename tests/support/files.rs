//! Temp-directory fixtures shared by integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use quantamental::domain::market::MarketSnapshot;
use quantamental::testkit::config::toml_in_dir;
use tempfile::TempDir;

/// A temp directory holding a config, a market file, and room for the trade
/// log and kill switch.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a config bounded to `max_cycles` and return its path.
    pub fn write_config(&self, max_cycles: u64) -> PathBuf {
        let path = self.path().join("config.toml");
        fs::write(&path, toml_in_dir(self.path(), max_cycles)).expect("write config");
        path
    }

    /// Write `markets` as the snapshot file.
    pub fn write_markets(&self, markets: &[MarketSnapshot]) {
        let json = serde_json::to_string_pretty(markets).expect("serialize markets");
        fs::write(self.markets_path(), json).expect("write markets");
    }

    pub fn markets_path(&self) -> PathBuf {
        self.path().join("markets.json")
    }

    pub fn trade_log_path(&self) -> PathBuf {
        self.path().join("trades.log")
    }

    pub fn kill_switch_path(&self) -> PathBuf {
        self.path().join("STOP.txt")
    }
}
