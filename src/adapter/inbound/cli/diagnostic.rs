//! Miette-based error diagnostics for CLI error presentation.
//!
//! Converts crate errors into diagnostics with a stable code and, where the
//! fix is known, a help line.

use miette::Diagnostic;
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with a suggested fix.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(quantamental::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// Any other command failure.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(quantamental::command))]
pub struct CommandDiagnostic {
    /// Human-readable error message.
    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// Render a crate error as a miette report.
#[must_use]
pub fn report(error: Error) -> miette::Report {
    let message = error.to_string();
    match error {
        Error::Config(config) => {
            let help = match config {
                ConfigError::ReadFile(_) => {
                    Some("create one with `quantamental config init`".to_string())
                }
                ConfigError::Parse(_) => Some("check the TOML syntax near the reported line".to_string()),
                ConfigError::InvalidValue { field, .. } => {
                    Some(format!("fix `{field}` in the config file"))
                }
                ConfigError::MissingField { field } => {
                    Some(format!("add `{field}` to the config file"))
                }
            };
            ConfigDiagnostic { message, help }.into()
        }
        Error::Io(_) => CommandDiagnostic {
            message,
            help: Some("check that the path exists and is writable".to_string()),
        }
        .into(),
        Error::Json(_) => CommandDiagnostic {
            message,
            help: Some("the snapshot file must be a JSON array of markets".to_string()),
        }
        .into(),
        Error::Domain(_) | Error::Parse(_) => CommandDiagnostic {
            message,
            help: None,
        }
        .into(),
    }
}
