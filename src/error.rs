use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Reasons an order proposal fails pre-trade validation.
///
/// These are policy outcomes, not faults: the validator reports them inside a
/// [`ValidationResult`](crate::port::inbound::validation::ValidationResult)
/// and never raises them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("contract count must be positive, got {count}")]
    NonPositiveCount { count: i64 },

    #[error("contract count {count} exceeds safety ceiling of {ceiling}")]
    CountAboveCeiling { count: i64, ceiling: i64 },

    #[error("price {price_cents}¢ outside tradable range 1-99¢")]
    PriceOutOfRange { price_cents: i64 },

    #[error("notional ${notional} exceeds max position ${limit}")]
    NotionalExceedsLimit { notional: Decimal, limit: Decimal },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
