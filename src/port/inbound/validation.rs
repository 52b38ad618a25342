//! Pre-trade validation result types.

use crate::error::Rejection;

/// Result of validating an order proposal.
///
/// Indicates whether an order may be submitted. Rejections are structured
/// values, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Order passes every check and may be submitted.
    Approved,

    /// Order is rejected by a safety rule.
    Rejected(Rejection),
}

impl ValidationResult {
    /// Return `true` if the order is approved.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, ValidationResult::Approved)
    }

    /// Return the rejection if the order was rejected.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationResult::Rejected(rejection) => Some(rejection),
            ValidationResult::Approved => None,
        }
    }

    /// Human-readable rejection reason, `None` when approved.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.rejection().map(ToString::to_string)
    }
}
