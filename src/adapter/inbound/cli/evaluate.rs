//! Handler for the `evaluate` command.
//!
//! Runs one market through the decision pipeline and prints every stage:
//! signals, hybrid probability, edge, sizing, and validation.

use serde_json::{json, Value};

use crate::adapter::inbound::cli::command::EvaluateArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::application::decision::engine::{Decision, DecisionRequest};
use crate::domain::feature::QuantFeatureSet;
use crate::domain::id::Ticker;
use crate::domain::signal::SignalSet;
use crate::error::Result;
use crate::infrastructure::factory::build_engine;
use crate::port::inbound::validation::ValidationResult;

impl EvaluateArgs {
    fn features(&self) -> QuantFeatureSet {
        QuantFeatureSet {
            rsi_14: self.rsi,
            macd_hist: self.macd,
            obv: self.obv,
            volume_sma_5: self.volume_sma,
            hours_to_expiration: self.hours,
        }
    }

    fn request(&self) -> DecisionRequest {
        DecisionRequest {
            ticker: Ticker::new(self.ticker.as_str()),
            fundamental_prob: self.fundamental,
            features: self.features(),
            price_cents: self.price,
        }
    }
}

/// Execute the evaluate command.
pub fn execute(args: &EvaluateArgs) -> Result<()> {
    let config = config::load_or_default(&args.config)?;
    let engine = build_engine(&config);
    let request = args.request();

    let signals = engine
        .fuser()
        .signals(request.fundamental_prob, &request.features);
    let decision = engine.decide(&request);

    if output::is_json() {
        output::json_output(decision_json(&decision, signals.as_ref()));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Ticker", &decision.ticker);
    output::field("Price", format!("{}¢", decision.price_cents));
    output::field("Strategy", engine.fuser().name());

    if let Some(signals) = &signals {
        output::section("Signals");
        for (name, value) in signals.iter() {
            output::field(name.as_str(), format!("{value:.4}"));
        }
    }

    output::section("Decision");
    output::field("Hybrid", output::highlight(format!("{:.4}", decision.hybrid_prob())));
    if let Some(reason) = decision.hybrid.degraded_reason() {
        output::warning(&format!("fusion degraded: {reason}"));
    }
    output::field("Edge", output::signed(decision.edge.edge, 4));
    let action = decision.edge.action.to_string();
    output::field(
        "Action",
        if decision.edge.is_buy() {
            output::positive(action)
        } else {
            output::muted(action)
        },
    );

    if let Some(sizing) = &decision.sizing {
        output::section("Sizing");
        let result = sizing.value();
        output::field("Kelly raw", format!("{:.4}", result.kelly_raw));
        output::field("Kelly adj", format!("{:.4}", result.kelly_adjusted));
        output::field("Contracts", result.contracts);
        if let Some(reason) = sizing.degraded_reason() {
            output::warning(&format!("sizing degraded: {reason}"));
        }
    }

    match &decision.validation {
        Some(ValidationResult::Approved) => {
            output::success(&format!(
                "Would buy {} YES @ {}¢",
                decision.contracts(),
                decision.price_cents
            ));
        }
        Some(ValidationResult::Rejected(rejection)) => {
            output::warning(&format!("Order rejected: {rejection}"));
        }
        None => output::note("No order"),
    }

    Ok(())
}

fn decision_json(decision: &Decision, signals: Option<&SignalSet>) -> Value {
    let signals: Option<serde_json::Map<String, Value>> = signals.map(|set| {
        set.iter()
            .map(|(name, value)| (name.as_str().to_string(), json!(value)))
            .collect()
    });

    json!({
        "command": "evaluate",
        "ticker": decision.ticker,
        "price_cents": decision.price_cents,
        "signals": signals,
        "hybrid_prob": decision.hybrid_prob(),
        "hybrid_degraded": decision.hybrid.degraded_reason(),
        "edge": decision.edge.edge,
        "action": decision.edge.action,
        "sizing": decision.sizing.as_ref().map(|sizing| json!({
            "contracts": sizing.value().contracts,
            "kelly_raw": sizing.value().kelly_raw,
            "kelly_adjusted": sizing.value().kelly_adjusted,
            "degraded": sizing.degraded_reason(),
        })),
        "validation": decision.validation.as_ref().map(|validation| json!({
            "approved": validation.is_approved(),
            "reason": validation.reason(),
        })),
        "submit": decision.should_submit(),
    })
}
