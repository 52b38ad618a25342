//! Append-only text trade log.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::trade::TradeRecord;
use crate::error::Result;
use crate::port::outbound::recorder::TradeRecorder;

/// Trade log file holding one [`TradeRecord`] line per executed order.
///
/// Writes only ever append; existing lines are never rewritten.
#[derive(Debug, Clone)]
pub struct TradeLog {
    path: PathBuf,
}

impl TradeLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, trade: &TradeRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{trade}")?;
        file.flush()?;
        Ok(())
    }

    /// Read every well-formed record in file order.
    ///
    /// A missing file reads as empty. Malformed lines are skipped with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read_all(&self) -> Result<Vec<TradeRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let records = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match line.parse::<TradeRecord>() {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(path = %self.path.display(), line = index + 1, error = %e, "Skipping malformed trade log line");
                    None
                }
            })
            .collect();
        Ok(records)
    }
}

impl TradeRecorder for TradeLog {
    fn record(&self, trade: &TradeRecord) -> Result<()> {
        self.append(trade)?;
        debug!(path = %self.path.display(), ticker = %trade.ticker, "Trade recorded");
        Ok(())
    }
}
