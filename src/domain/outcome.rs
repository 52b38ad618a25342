//! Tagged result for components that fail to a neutral default.
//!
//! Decision-core components never propagate errors to their caller. Instead
//! they return an [`Outcome`]: either the computed value, or a safe default
//! together with the reason the computation could not be trusted. Callers log
//! [`Outcome::Degraded`] and carry on with the default value.

use std::fmt;

/// A computed value, or a fallback value plus the reason it was used.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The computation completed normally.
    Nominal(T),
    /// The computation failed and `value` is the neutral fallback.
    Degraded {
        /// Fallback value to use in place of the computed one.
        value: T,
        /// Human-readable cause.
        reason: String,
    },
}

impl<T> Outcome<T> {
    /// Build a degraded outcome.
    pub fn degraded(value: T, reason: impl Into<String>) -> Self {
        Self::Degraded {
            value,
            reason: reason.into(),
        }
    }

    /// Borrow the carried value regardless of variant.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Nominal(value) | Self::Degraded { value, .. } => value,
        }
    }

    /// Take the carried value regardless of variant.
    pub fn into_value(self) -> T {
        match self {
            Self::Nominal(value) | Self::Degraded { value, .. } => value,
        }
    }

    /// Return `true` if the fallback path was taken.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Reason for degradation, if any.
    #[must_use]
    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            Self::Nominal(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }

    /// Transform the carried value, keeping the variant and reason.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Nominal(value) => Outcome::Nominal(f(value)),
            Self::Degraded { value, reason } => Outcome::Degraded {
                value: f(value),
                reason,
            },
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominal(value) => write!(f, "{value}"),
            Self::Degraded { value, reason } => write!(f, "{value} (degraded: {reason})"),
        }
    }
}
