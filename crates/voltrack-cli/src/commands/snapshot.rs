use serde_json::{json, Value};

use voltrack_core::{SeriesSummary, Snapshot};

use crate::error::CliError;

pub fn run(snapshot: &Snapshot) -> Result<Value, CliError> {
    let series = SeriesSummary::from_points(&snapshot.historical);

    Ok(json!({
        "market": snapshot.market,
        "volatility": snapshot.volatility,
        "riskLevel": snapshot.volatility.risk_level(),
        "marketCondition": snapshot.volatility.market_condition(),
        "har": snapshot.har,
        "signals": snapshot.signals,
        "signalSummary": voltrack_core::summarize(&snapshot.signals),
        "historicalPoints": snapshot.historical.len(),
        "series": series,
    }))
}
