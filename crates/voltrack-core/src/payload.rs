//! Raw upstream payload shapes.
//!
//! Two response schemas exist in the wild: a flat primary document with an
//! optionally embedded volatility block, and a richer document that nests
//! indicator, model, signal, and history blocks under an analysis section.
//! Both resolve once, at ingestion, into the typed union [`RawFeed`];
//! nothing downstream branches on payload shape again.
//!
//! Every field is optional here. Absence is the normal case, handled by the
//! reconciler's fallback chain, never an error. Timestamps arrive as free
//! strings and are parsed leniently during reconciliation.

use serde::Deserialize;

use crate::CoreError;

/// Price block embedded in the primary payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBlock {
    pub price: Option<f64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub previous_close: Option<f64>,
    pub timestamp: Option<String>,
}

/// Pre-fitted HAR block. Field names match the upstream wire format.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HarBlock {
    pub daily: Option<f64>,
    pub weekly: Option<f64>,
    pub monthly: Option<f64>,
    pub intercept: Option<f64>,
    pub r_squared: Option<f64>,
    pub mse: Option<f64>,
    pub forecast_1d: Option<f64>,
    pub forecast_5d: Option<f64>,
    pub forecast_22d: Option<f64>,
    pub timestamp: Option<String>,
}

/// Volatility indicator block, either embedded in the primary payload or
/// delivered as `volatilityIndicators` on the analysis payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolatilityBlock {
    pub realized_volatility: Option<f64>,
    pub implied_volatility: Option<f64>,
    pub volatility_trend: Option<String>,
    pub atr14: Option<f64>,
    pub parkinson_estimator: Option<f64>,
    pub garman_klass_estimator: Option<f64>,
    pub garch_forecast: Option<f64>,
    pub har: Option<HarBlock>,
    pub timestamp: Option<String>,
}

/// One discrete trading alert as delivered upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SignalPayload {
    #[serde(rename = "type")]
    pub signal_type: Option<String>,
    pub strength: Option<f64>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
    pub price: Option<f64>,
    pub indicator: Option<String>,
}

/// One historical OHLCV row. Older feeds put the close under `price` and
/// the volatility under `realized_volatility`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HistoricalPointPayload {
    pub date: Option<String>,
    pub timestamp: Option<String>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub price: Option<f64>,
    pub volume: Option<f64>,
    pub volatility: Option<f64>,
    pub realized_volatility: Option<f64>,
}

/// Primary payload: a price block plus an optionally embedded volatility
/// sub-block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryPayload {
    pub symbol: Option<String>,
    #[serde(default)]
    pub price: PriceBlock,
    pub volatility: Option<VolatilityBlock>,
}

/// Secondary "analysis" payload; every section is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub volatility_indicators: Option<VolatilityBlock>,
    pub har_model: Option<HarBlock>,
    pub signals: Option<Vec<SignalPayload>>,
    pub historical_data: Option<Vec<HistoricalPointPayload>>,
}

/// The two upstream schemas as one typed union, resolved at ingestion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawFeed {
    PrimaryWithAnalysis {
        primary: PrimaryPayload,
        #[serde(default)]
        analysis: AnalysisPayload,
    },
    PrimaryOnly(PrimaryPayload),
}

impl RawFeed {
    pub fn from_json(input: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn primary(&self) -> &PrimaryPayload {
        match self {
            Self::PrimaryWithAnalysis { primary, .. } => primary,
            Self::PrimaryOnly(primary) => primary,
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisPayload> {
        match self {
            Self::PrimaryWithAnalysis { analysis, .. } => Some(analysis),
            Self::PrimaryOnly(_) => None,
        }
    }
}
