//! Market snapshots read from a JSON file.
//!
//! The research agent and the indicator pipeline run out of process and
//! publish their results as a JSON array of [`MarketSnapshot`]s. The file is
//! re-read every cycle, so a refreshed export is picked up without restarting.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::market::MarketSnapshot;
use crate::error::Result;
use crate::port::outbound::market::MarketSource;

/// [`MarketSource`] backed by a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MarketSource for SnapshotFile {
    async fn fetch_markets(&self) -> Result<Vec<MarketSnapshot>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let markets: Vec<MarketSnapshot> = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), markets = markets.len(), "Snapshot file loaded");
        Ok(markets)
    }

    fn source_name(&self) -> &'static str {
        "snapshot_file"
    }
}
