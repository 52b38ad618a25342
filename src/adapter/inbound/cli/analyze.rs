//! Handler for the `analyze` command.
//!
//! A self-test of the decision core: strategy diagnostics, a forecast on a
//! fixed reference market, and the edge it implies across a price ladder.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::{config, output};
use crate::application::decision::engine::DecisionEngine;
use crate::domain::feature::QuantFeatureSet;
use crate::error::Result;
use crate::infrastructure::factory::build_engine;

const REFERENCE_FUNDAMENTAL: f64 = 0.65;
const PRICE_LADDER: [u32; 5] = [40, 50, 60, 70, 80];

fn reference_features() -> QuantFeatureSet {
    QuantFeatureSet {
        rsi_14: Some(45.0),
        macd_hist: Some(0.02),
        obv: Some(5000.0),
        volume_sma_5: Some(1000.0),
        hours_to_expiration: Some(48.0),
    }
}

#[derive(Tabled)]
struct EdgeRow {
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Implied")]
    implied: String,
    #[tabled(rename = "Edge")]
    edge: String,
    #[tabled(rename = "Action")]
    action: String,
}

struct LadderPoint {
    price_cents: u32,
    edge: f64,
    buy: bool,
}

fn ladder(engine: &DecisionEngine, hybrid: f64) -> Vec<LadderPoint> {
    PRICE_LADDER
        .iter()
        .map(|&price_cents| {
            let decision = engine.evaluator().evaluate(hybrid, price_cents);
            LadderPoint {
                price_cents,
                edge: decision.edge,
                buy: decision.is_buy(),
            }
        })
        .collect()
}

/// Execute the analyze command.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = config::load_or_default(&args.config)?;
    let engine = build_engine(&config);
    let diagnostics = engine.fuser().diagnostics();

    let features = reference_features();
    let hybrid = engine.fuser().fuse(REFERENCE_FUNDAMENTAL, &features);
    let points = ladder(&engine, *hybrid.value());

    if output::is_json() {
        output::json_output(json!({
            "command": "analyze",
            "diagnostics": diagnostics,
            "sample": {
                "fundamental_prob": REFERENCE_FUNDAMENTAL,
                "features": features,
                "hybrid_prob": hybrid.value(),
                "degraded": hybrid.degraded_reason(),
            },
            "edges": points.iter().map(|point| json!({
                "price_cents": point.price_cents,
                "edge": point.edge,
                "action": if point.buy { "BUY" } else { "SKIP" },
            })).collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Fusion strategy");
    output::field("Strategy", diagnostics.strategy_type);
    output::field("Training", if diagnostics.requires_training { "required" } else { "none" });
    if let Some(confidence) = diagnostics.confidence {
        output::field("Confidence", format!("{confidence:.2}"));
    }
    if let Some(weights) = diagnostics.weights {
        for (name, weight) in weights.iter() {
            output::field(name.as_str(), format!("{weight:.2}"));
        }
    }

    output::section("Sample forecast");
    output::field("Fundamental", format!("{REFERENCE_FUNDAMENTAL:.2}"));
    output::field("Features", "rsi 45, macd 0.02, obv 5000, vol 1000, 48h");
    output::field("Hybrid", output::highlight(format!("{:.4}", hybrid.value())));
    if let Some(reason) = hybrid.degraded_reason() {
        output::warning(&format!("fusion degraded: {reason}"));
    }

    output::section(&format!(
        "Edge at {:.0}% threshold",
        engine.evaluator().threshold() * 100.0
    ));
    let rows: Vec<EdgeRow> = points
        .iter()
        .map(|point| EdgeRow {
            price: format!("{}¢", point.price_cents),
            implied: format!("{:.2}", f64::from(point.price_cents) / 100.0),
            edge: format!("{:+.4}", point.edge),
            action: if point.buy { "BUY" } else { "SKIP" }.to_string(),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    if !engine.fuser().requires_training() {
        output::hint("set [fusion] strategy = \"trained_classifier\" to use a trained model");
    }

    Ok(())
}
