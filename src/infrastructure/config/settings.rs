//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! field has a default, so an empty file is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use quantamental::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;

use super::fusion::{FusionConfig, FusionStrategy};
use super::logging::LoggingConfig;
use super::risk::RiskConfig;
use super::scan::ScanConfig;
use super::signal::SignalConfig;
use crate::error::{ConfigError, Result};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Sentinel file that stops the scan loop when created.
    #[serde(default = "default_kill_switch_path")]
    pub kill_switch_path: PathBuf,

    /// Append-only log of executed trades.
    #[serde(default = "default_trade_log_path")]
    pub trade_log_path: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Ensemble weights and confidence dampening.
    #[serde(default)]
    pub signals: SignalConfig,

    /// Fusion strategy selection.
    #[serde(default)]
    pub fusion: FusionConfig,

    /// Sizing and validation limits.
    #[serde(default)]
    pub risk: RiskConfig,

    /// Scan loop timing and market filters.
    #[serde(default)]
    pub scan: ScanConfig,
}

fn default_kill_switch_path() -> PathBuf {
    PathBuf::from("STOP.txt")
}

fn default_trade_log_path() -> PathBuf {
    PathBuf::from("trades.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kill_switch_path: default_kill_switch_path(),
            trade_log_path: default_trade_log_path(),
            logging: LoggingConfig::default(),
            signals: SignalConfig::default(),
            fusion: FusionConfig::default(),
            risk: RiskConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value as [`ConfigError::InvalidValue`],
    /// or [`ConfigError::MissingField`] when a strategy lacks its inputs.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        self.validate_signals()?;
        self.validate_fusion()?;
        self.validate_risk()?;
        self.validate_scan()?;
        Ok(())
    }

    fn validate_signals(&self) -> Result<()> {
        let weights = &self.signals.weights;
        if let Some((name, weight)) = weights
            .iter()
            .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(ConfigError::InvalidValue {
                field: "weights",
                reason: format!("{name} weight must be finite and non-negative, got {weight}"),
            }
            .into());
        }
        let total = weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidValue {
                field: "weights",
                reason: format!("must sum to 1.0, got {total}"),
            }
            .into());
        }
        let confidence = self.signals.confidence;
        if !(confidence > 0.0 && confidence <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "confidence",
                reason: "must be greater than 0 and at most 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn validate_fusion(&self) -> Result<()> {
        if self.fusion.strategy == FusionStrategy::TrainedClassifier
            && self.fusion.model_path.is_none()
        {
            return Err(ConfigError::MissingField {
                field: "model_path",
            }
            .into());
        }
        Ok(())
    }

    fn validate_risk(&self) -> Result<()> {
        let risk = &self.risk;
        if risk.max_position_dollars <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "max_position_dollars",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !(risk.kelly_fraction > 0.0 && risk.kelly_fraction <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "kelly_fraction",
                reason: "must be greater than 0 and at most 1".to_string(),
            }
            .into());
        }
        if !(risk.max_portfolio_risk_fraction > 0.0 && risk.max_portfolio_risk_fraction <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "max_portfolio_risk_fraction",
                reason: "must be greater than 0 and at most 1".to_string(),
            }
            .into());
        }
        if !(risk.min_edge_threshold >= 0.0 && risk.min_edge_threshold < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "min_edge_threshold",
                reason: "must be at least 0 and less than 1".to_string(),
            }
            .into());
        }
        if risk.max_contracts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_contracts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn validate_scan(&self) -> Result<()> {
        if self.scan.kill_switch_poll_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "kill_switch_poll_secs",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
