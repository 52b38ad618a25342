//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors and parsers that
//! validate inputs at the edge of the domain.
//!
//! # Examples
//!
//! ```
//! use quantamental::domain::error::DomainError;
//! use quantamental::domain::trade::TradeRecord;
//!
//! let result = "not a trade line".parse::<TradeRecord>();
//! assert!(matches!(result, Err(DomainError::MalformedTradeRecord { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A market price must be between 1 and 99 cents.
    #[error("price must be between 1 and 99 cents, got {price_cents}")]
    PriceOutOfRange {
        /// The invalid price that was provided.
        price_cents: i64,
    },

    /// A probability input must be a finite number.
    #[error("{name} must be finite, got {value}")]
    NonFiniteProbability {
        /// Which input carried the bad value.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A trade-log line does not match the fixed record format.
    #[error("malformed trade record '{line}': {reason}")]
    MalformedTradeRecord {
        /// The raw line that failed to parse.
        line: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Unknown order side label.
    #[error("unknown side '{0}', expected YES or NO")]
    UnknownSide(String),
}
