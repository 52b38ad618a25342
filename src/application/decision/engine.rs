//! The per-market decision pipeline.
//!
//! Fuses the forecast, measures edge against the ask, sizes a position when
//! the edge clears the threshold, and validates the resulting order. The
//! pipeline never fails: every degraded step falls back to "do not trade" or
//! "trade at neutral confidence" and is logged.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::edge::EdgeEvaluator;
use crate::application::risk::{
    limits::RiskLimits,
    sizer::PositionSizer,
    validator::{OrderProposal, OrderValidator},
};
use crate::domain::{
    edge::EdgeDecision, feature::QuantFeatureSet, id::Ticker, market::MarketSnapshot,
    outcome::Outcome, sizing::PositionSizingResult, trade::Side,
};
use crate::port::inbound::fusion::Fuser;
use crate::port::inbound::validation::ValidationResult;
use crate::port::outbound::executor::OrderRequest;

/// Inputs for one decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionRequest {
    pub ticker: Ticker,
    pub fundamental_prob: f64,
    pub features: QuantFeatureSet,
    /// Current YES ask, in cents.
    pub price_cents: u32,
}

impl DecisionRequest {
    /// Build a request from a market snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &MarketSnapshot) -> Self {
        Self::from_snapshot_at(snapshot, Utc::now())
    }

    /// Build a request from a market snapshot as seen at `now`.
    ///
    /// When the indicator pipeline did not report hours to expiration, they
    /// are taken from the snapshot's close time.
    #[must_use]
    pub fn from_snapshot_at(snapshot: &MarketSnapshot, now: DateTime<Utc>) -> Self {
        let mut features = snapshot.quant_features;
        if features.hours_to_expiration.is_none() {
            features.hours_to_expiration = snapshot.hours_until_close(now);
        }
        Self {
            ticker: snapshot.ticker.clone(),
            fundamental_prob: snapshot.fundamental_prob,
            features,
            price_cents: snapshot.yes_ask,
        }
    }
}

/// Everything the pipeline concluded about one market.
#[derive(Debug, Clone)]
pub struct Decision {
    pub ticker: Ticker,
    pub price_cents: u32,
    /// Fused probability, possibly degraded.
    pub hybrid: Outcome<f64>,
    pub edge: EdgeDecision,
    /// Present only when the edge cleared the threshold.
    pub sizing: Option<Outcome<PositionSizingResult>>,
    /// Present only when sizing produced at least one contract.
    pub validation: Option<ValidationResult>,
}

impl Decision {
    /// Fused probability carried by the decision.
    #[must_use]
    pub fn hybrid_prob(&self) -> f64 {
        *self.hybrid.value()
    }

    /// Contracts sized, zero if sizing did not run.
    #[must_use]
    pub fn contracts(&self) -> u32 {
        self.sizing
            .as_ref()
            .map_or(0, |sizing| sizing.value().contracts)
    }

    /// Return `true` if the order passed validation.
    #[must_use]
    pub fn should_submit(&self) -> bool {
        self.validation
            .as_ref()
            .is_some_and(ValidationResult::is_approved)
    }

    /// The order to submit, if approved.
    #[must_use]
    pub fn order(&self) -> Option<OrderRequest> {
        self.should_submit().then(|| OrderRequest {
            ticker: self.ticker.clone(),
            side: Side::Yes,
            count: self.contracts(),
            price_cents: self.price_cents,
        })
    }
}

/// Runs fusion, edge evaluation, sizing, and validation for one market.
pub struct DecisionEngine {
    fuser: Box<dyn Fuser>,
    evaluator: EdgeEvaluator,
    sizer: PositionSizer,
    validator: OrderValidator,
}

impl DecisionEngine {
    /// Create an engine around a fusion strategy and risk limits.
    #[must_use]
    pub fn new(fuser: Box<dyn Fuser>, limits: RiskLimits) -> Self {
        Self {
            fuser,
            evaluator: EdgeEvaluator::new(limits.min_edge_threshold),
            validator: OrderValidator::new(&limits),
            sizer: PositionSizer::new(limits),
        }
    }

    /// The fusion strategy in use.
    #[must_use]
    pub fn fuser(&self) -> &dyn Fuser {
        self.fuser.as_ref()
    }

    /// The edge evaluator in use.
    #[must_use]
    pub const fn evaluator(&self) -> &EdgeEvaluator {
        &self.evaluator
    }

    /// Decide what to do with one market.
    #[must_use]
    pub fn decide(&self, request: &DecisionRequest) -> Decision {
        let ticker = &request.ticker;

        let hybrid = self
            .fuser
            .fuse(request.fundamental_prob, &request.features);
        if let Some(reason) = hybrid.degraded_reason() {
            warn!(
                ticker = %ticker,
                strategy = self.fuser.name(),
                fallback = *hybrid.value(),
                reason,
                "Fusion degraded"
            );
        }

        let edge = self.evaluator.evaluate(*hybrid.value(), request.price_cents);
        debug!(
            ticker = %ticker,
            hybrid = *hybrid.value(),
            price_cents = request.price_cents,
            edge = edge.edge,
            action = %edge.action,
            "Edge evaluated"
        );

        let mut decision = Decision {
            ticker: ticker.clone(),
            price_cents: request.price_cents,
            hybrid,
            edge,
            sizing: None,
            validation: None,
        };

        if !edge.is_buy() {
            return decision;
        }

        let sizing = self.sizer.size(edge.edge, request.price_cents);
        if let Some(reason) = sizing.degraded_reason() {
            warn!(ticker = %ticker, reason, "Sizing degraded, not trading");
        }
        let contracts = sizing.value().contracts;
        decision.sizing = Some(sizing);

        if contracts == 0 {
            info!(ticker = %ticker, edge = edge.edge, "Position size too small, skipping");
            return decision;
        }

        let proposal = OrderProposal::new(
            ticker.clone(),
            Side::Yes,
            i64::from(contracts),
            i64::from(request.price_cents),
        );
        let validation = self.validator.validate(&proposal);
        if validation.is_approved() {
            info!(
                ticker = %ticker,
                contracts,
                price_cents = request.price_cents,
                edge = edge.edge,
                "Order approved"
            );
        }
        decision.validation = Some(validation);
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fusion::ensemble::EnsembleFuser;
    use crate::domain::edge::EdgeAction;
    use crate::domain::signal::SignalName;
    use chrono::Duration;

    fn engine() -> DecisionEngine {
        DecisionEngine::new(Box::new(EnsembleFuser::default()), RiskLimits::default())
    }

    fn request(price_cents: u32) -> DecisionRequest {
        DecisionRequest {
            ticker: Ticker::from("PRES-2028-DEM"),
            fundamental_prob: 0.65,
            features: QuantFeatureSet {
                rsi_14: Some(45.0),
                macd_hist: Some(0.02),
                obv: Some(5000.0),
                volume_sma_5: Some(1000.0),
                hours_to_expiration: Some(48.0),
            },
            price_cents,
        }
    }

    #[test]
    fn skips_when_edge_below_threshold() {
        let decision = engine().decide(&request(50));

        assert_eq!(decision.edge.action, EdgeAction::Skip);
        assert!(decision.sizing.is_none());
        assert!(decision.validation.is_none());
        assert!(!decision.should_submit());
        assert!(decision.order().is_none());
    }

    #[test]
    fn buys_when_edge_clears_threshold() {
        let decision = engine().decide(&request(40));

        assert_eq!(decision.edge.action, EdgeAction::Buy);
        assert!(decision.contracts() > 0);
        assert!(decision.should_submit());

        let order = decision.order().unwrap();
        assert_eq!(order.side, Side::Yes);
        assert_eq!(order.price_cents, 40);
        assert_eq!(order.count, decision.contracts());
    }

    #[test]
    fn degraded_fusion_still_decides() {
        let mut req = request(40);
        req.features.rsi_14 = Some(f64::NAN);
        let decision = engine().decide(&req);

        assert!(decision.hybrid.is_degraded());
        assert_eq!(decision.hybrid_prob(), 0.65);
        assert!(decision.edge.edge > 0.0);
    }

    #[test]
    fn untradable_price_never_submits() {
        let mut req = request(0);
        req.fundamental_prob = 0.9;
        let decision = engine().decide(&req);

        assert!(decision.edge.is_buy());
        assert_eq!(decision.contracts(), 0);
        assert!(!decision.should_submit());
    }

    fn snapshot_closing_at(
        expiration: DateTime<Utc>,
        hours_to_expiration: Option<f64>,
    ) -> MarketSnapshot {
        MarketSnapshot {
            ticker: Ticker::from("CLOSING-SOON"),
            title: String::new(),
            yes_ask: 50,
            volume: 5000,
            fundamental_prob: 0.65,
            quant_features: QuantFeatureSet {
                rsi_14: Some(45.0),
                hours_to_expiration,
                ..Default::default()
            },
            expiration: Some(expiration),
        }
    }

    #[test]
    fn close_time_fills_missing_hours() {
        let now = Utc::now();
        let snapshot = snapshot_closing_at(now + Duration::hours(2), None);
        let req = DecisionRequest::from_snapshot_at(&snapshot, now);

        assert_eq!(req.features.hours_to_expiration, Some(2.0));
        let signals = engine()
            .fuser()
            .signals(req.fundamental_prob, &req.features)
            .unwrap();
        let time_decay = signals.get(SignalName::TimeDecay).unwrap();
        assert!((time_decay - 0.85).abs() < 1e-9);
    }

    #[test]
    fn reported_hours_win_over_close_time() {
        let now = Utc::now();
        let snapshot = snapshot_closing_at(now + Duration::hours(2), Some(48.0));
        let req = DecisionRequest::from_snapshot_at(&snapshot, now);

        assert_eq!(req.features.hours_to_expiration, Some(48.0));
    }
}
