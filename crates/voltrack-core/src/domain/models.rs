use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::{UtcDateTime, ValidationError};

/// Canonical market quote for one poll cycle.
///
/// Fields are pre-sanitized by the reconciler (finite, non-negative apart
/// from `change`/`change_percent`). The bar invariant `high >= open/close`
/// is tolerated when violated, never re-validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub previous_close: f64,
    pub timestamp: UtcDateTime,
}

/// Direction of the recent volatility regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl VolatilityTrend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl Display for VolatilityTrend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolatilityTrend {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "increasing" => Ok(Self::Increasing),
            "decreasing" => Ok(Self::Decreasing),
            "stable" => Ok(Self::Stable),
            other => Err(ValidationError::InvalidTrend {
                value: other.to_owned(),
            }),
        }
    }
}

/// Qualitative risk bucket derived from realized volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Whether the market is heating up or calming down relative to the
/// one-step GARCH forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCondition {
    Calming,
    Heating,
}

impl MarketCondition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calming => "calming",
            Self::Heating => "heating",
        }
    }
}

/// Canonical volatility indicator set for one poll cycle.
///
/// Figures are stored exactly as resolved from upstream (after the
/// non-finite/negative clamp); percent-vs-fraction normalization happens
/// where a figure enters pricing math, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolatilityRecord {
    pub realized_volatility: f64,
    pub garch_forecast: f64,
    pub atr14: f64,
    pub parkinson_estimator: f64,
    pub garman_klass_estimator: f64,
    pub volatility_trend: VolatilityTrend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implied_volatility: Option<f64>,
    pub timestamp: UtcDateTime,
}

impl VolatilityRecord {
    /// Risk bucket thresholds operate on the raw realized-volatility scale.
    pub fn risk_level(&self) -> RiskLevel {
        if self.realized_volatility > defaults::RISK_HIGH_THRESHOLD {
            RiskLevel::High
        } else if self.realized_volatility > defaults::RISK_MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Realized above forecast means the shock is already in the tape.
    pub fn market_condition(&self) -> MarketCondition {
        if self.realized_volatility > self.garch_forecast {
            MarketCondition::Calming
        } else {
            MarketCondition::Heating
        }
    }
}

/// Pre-fitted HAR regression parameters and forecasts.
///
/// Coefficients arrive fitted from an external source; this crate never
/// estimates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarParams {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub mse: f64,
    pub forecast_1d: f64,
    pub forecast_5d: f64,
    pub forecast_22d: f64,
    pub timestamp: UtcDateTime,
}

impl HarParams {
    /// Evaluate the fitted linear model against a realized-volatility
    /// triple: sigma(t+1) = b0 + bd*RVd + bw*RVw + bm*RVm.
    pub fn predict(&self, rv_daily: f64, rv_weekly: f64, rv_monthly: f64) -> f64 {
        let predicted = self.intercept
            + self.daily * rv_daily
            + self.weekly * rv_weekly
            + self.monthly * rv_monthly;

        if predicted.is_finite() {
            predicted
        } else {
            0.0
        }
    }
}

/// Discrete trading alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "type")]
    pub signal_type: String,
    pub strength: f64,
    pub message: String,
    pub timestamp: UtcDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
}

/// One row of the historical OHLCV series, with an optional per-day
/// volatility estimate used for chart band annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<f64>,
}

/// Summary statistics over a historical close-price window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub min_close: f64,
    pub max_close: f64,
    pub avg_close: f64,
    pub last_close: f64,
    pub change_percent: f64,
}

impl SeriesSummary {
    /// `None` for an empty series; the chart shows a placeholder instead.
    pub fn from_points(points: &[HistoricalPoint]) -> Option<Self> {
        let first = points.first()?;
        let last = points.last()?;

        let mut min_close = f64::INFINITY;
        let mut max_close = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for point in points {
            min_close = min_close.min(point.close);
            max_close = max_close.max(point.close);
            sum += point.close;
        }

        let change_percent = if first.close > 0.0 {
            (last.close - first.close) / first.close * 100.0
        } else {
            0.0
        };

        Some(Self {
            min_close,
            max_close,
            avg_close: sum / points.len() as f64,
            last_close: last.close,
            change_percent,
        })
    }
}

/// Symmetric confidence band around a base price at a given horizon.
///
/// Invariant: `upper >= base_price >= lower` and `expected_move >= 0` for
/// every input the projector accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub horizon_days: f64,
    pub base_price: f64,
    pub upper: f64,
    pub lower: f64,
    #[serde(rename = "move")]
    pub expected_move: f64,
}

/// Canonical bundle produced once per poll cycle.
///
/// Owned by the reconciler for exactly one cycle; consumers receive
/// read-only views and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub market: MarketRecord,
    pub volatility: VolatilityRecord,
    pub har: HarParams,
    pub signals: Vec<Signal>,
    pub historical: Vec<HistoricalPoint>,
}
