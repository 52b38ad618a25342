//! Final pre-trade safety gate.
//!
//! Runs on every order immediately before submission, regardless of what the
//! sizer already enforced, so malformed or tampered proposals are rejected at
//! a single point.

use rust_decimal::Decimal;
use tracing::warn;

use super::limits::RiskLimits;
use crate::domain::{id::Ticker, probability::is_tradable_price, trade::Side};
use crate::error::Rejection;
use crate::port::inbound::validation::ValidationResult;

/// An order as proposed by the caller, before any trust is extended.
///
/// Counts and prices are wide signed integers so out-of-range values can be
/// represented and rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderProposal {
    pub ticker: Ticker,
    pub side: Side,
    pub count: i64,
    pub price_cents: i64,
}

impl OrderProposal {
    /// Create a proposal.
    pub fn new(ticker: impl Into<Ticker>, side: Side, count: i64, price_cents: i64) -> Self {
        Self {
            ticker: ticker.into(),
            side,
            count,
            price_cents,
        }
    }

    /// Notional risk in dollars: `count * price / 100`.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        Decimal::from(self.count) * Decimal::new(self.price_cents, 2)
    }
}

/// Validates order proposals against hard safety limits.
#[derive(Debug, Clone)]
pub struct OrderValidator {
    max_contracts: i64,
    max_position_dollars: Decimal,
}

impl OrderValidator {
    /// Create a validator from risk limits.
    #[must_use]
    pub fn new(limits: &RiskLimits) -> Self {
        Self {
            max_contracts: i64::from(limits.max_contracts),
            max_position_dollars: limits.max_position_dollars,
        }
    }

    /// Validate a proposal against every check.
    ///
    /// Checks are performed in order: positive count, contract ceiling, price
    /// range, and notional cap. The first failure is reported.
    #[must_use]
    pub fn validate(&self, proposal: &OrderProposal) -> ValidationResult {
        let checks = [
            Self::check_count(proposal),
            self.check_ceiling(proposal),
            Self::check_price(proposal),
            self.check_notional(proposal),
        ];

        match checks.into_iter().find_map(Result::err) {
            Some(rejection) => {
                warn!(
                    ticker = %proposal.ticker,
                    side = %proposal.side,
                    count = proposal.count,
                    price_cents = proposal.price_cents,
                    reason = %rejection,
                    "Order rejected"
                );
                ValidationResult::Rejected(rejection)
            }
            None => ValidationResult::Approved,
        }
    }

    fn check_count(proposal: &OrderProposal) -> Result<(), Rejection> {
        if proposal.count <= 0 {
            return Err(Rejection::NonPositiveCount {
                count: proposal.count,
            });
        }
        Ok(())
    }

    fn check_ceiling(&self, proposal: &OrderProposal) -> Result<(), Rejection> {
        if proposal.count > self.max_contracts {
            return Err(Rejection::CountAboveCeiling {
                count: proposal.count,
                ceiling: self.max_contracts,
            });
        }
        Ok(())
    }

    fn check_price(proposal: &OrderProposal) -> Result<(), Rejection> {
        if !is_tradable_price(proposal.price_cents) {
            return Err(Rejection::PriceOutOfRange {
                price_cents: proposal.price_cents,
            });
        }
        Ok(())
    }

    fn check_notional(&self, proposal: &OrderProposal) -> Result<(), Rejection> {
        // Only meaningful once count and price are in range.
        if proposal.count <= 0 || proposal.count > self.max_contracts {
            return Ok(());
        }
        let notional = proposal.notional();
        if notional > self.max_position_dollars {
            return Err(Rejection::NotionalExceedsLimit {
                notional,
                limit: self.max_position_dollars,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn validator() -> OrderValidator {
        OrderValidator::new(&RiskLimits::default())
    }

    fn proposal(count: i64, price_cents: i64) -> OrderProposal {
        OrderProposal::new("PRES-2028-DEM", Side::Yes, count, price_cents)
    }

    #[test]
    fn approves_order_within_limits() {
        assert!(validator().validate(&proposal(77, 40)).is_approved());
    }

    #[test]
    fn rejects_zero_and_negative_counts() {
        for count in [0, -5] {
            let result = validator().validate(&proposal(count, 40));
            assert_eq!(
                result.rejection(),
                Some(&Rejection::NonPositiveCount { count })
            );
        }
    }

    #[test]
    fn rejects_count_above_ceiling_even_when_affordable() {
        let limits = RiskLimits {
            max_position_dollars: dec!(1000000),
            ..RiskLimits::default()
        };
        let result = OrderValidator::new(&limits).validate(&proposal(1001, 1));
        assert!(matches!(
            result.rejection(),
            Some(Rejection::CountAboveCeiling { count: 1001, .. })
        ));
    }

    #[test]
    fn rejects_prices_outside_range() {
        for price in [0, 100, -1] {
            let result = validator().validate(&proposal(1, price));
            assert_eq!(
                result.rejection(),
                Some(&Rejection::PriceOutOfRange { price_cents: price })
            );
        }
    }

    #[test]
    fn notional_cap_is_inclusive() {
        assert!(validator().validate(&proposal(200, 50)).is_approved());

        let result = validator().validate(&proposal(201, 50));
        assert_eq!(
            result.rejection(),
            Some(&Rejection::NotionalExceedsLimit {
                notional: dec!(100.50),
                limit: dec!(100),
            })
        );
    }

    #[test]
    fn notional_uses_exact_cents() {
        assert_eq!(proposal(3, 33).notional(), dec!(0.99));
    }
}
