//! Path utilities.
//!
//! Operator files live under `~/.quantamental/`:
//! - `~/.quantamental/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the home directory for operator files (`~/.quantamental/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".quantamental")
}

/// Returns the default config file path (`~/.quantamental/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
