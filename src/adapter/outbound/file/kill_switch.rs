//! File-presence kill switch.
//!
//! An operator stops the scan loop by creating the sentinel file. Observing
//! the file removes it, so each creation is an independent one-shot signal
//! and a restarted process does not immediately stop again.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::error::Result;
use crate::port::outbound::shutdown::StopSignal;

/// Kill switch backed by a sentinel file.
#[derive(Debug, Clone)]
pub struct FileKillSwitch {
    path: PathBuf,
}

impl FileKillSwitch {
    /// Watch the sentinel at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sentinel location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return `true` if the sentinel exists, without consuming it.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.path.exists()
    }

    /// Create the sentinel, requesting a stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn engage(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, b"stop requested\n")?;
        Ok(())
    }
}

impl StopSignal for FileKillSwitch {
    fn stop_requested(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                warn!(path = %self.path.display(), "Kill switch engaged");
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                // The sentinel is there but could not be consumed; still stop.
                if self.path.exists() {
                    error!(path = %self.path.display(), error = %e, "Kill switch present but not removable");
                    return true;
                }
                false
            }
        }
    }
}
