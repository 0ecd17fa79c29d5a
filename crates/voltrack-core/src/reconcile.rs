//! Payload reconciliation into the canonical snapshot.
//!
//! Field resolution order, first available wins:
//! 1. the dedicated field on the analysis payload,
//! 2. the corresponding field nested in the primary payload,
//! 3. the literal default from [`crate::defaults`].
//!
//! Resolution is deterministic and side-effect free apart from stamping
//! the current time on records whose upstream timestamp is absent or
//! unparseable. Inputs are never mutated.

use crate::defaults;
use crate::payload::{
    AnalysisPayload, HarBlock, HistoricalPointPayload, PrimaryPayload, RawFeed, SignalPayload,
    VolatilityBlock,
};
use crate::units::{sanitize, sanitize_signed};
use crate::{
    HarParams, HistoricalPoint, MarketRecord, Signal, Snapshot, UtcDateTime, VolatilityRecord,
    VolatilityTrend,
};

/// Reconcile one poll cycle's raw feed into the canonical snapshot.
pub fn reconcile(feed: &RawFeed) -> Snapshot {
    reconcile_parts(feed.primary(), feed.analysis())
}

/// Reconcile from the primary payload and an optional analysis payload.
pub fn reconcile_parts(primary: &PrimaryPayload, analysis: Option<&AnalysisPayload>) -> Snapshot {
    let indicators = analysis.and_then(|a| a.volatility_indicators.as_ref());
    let nested = primary.volatility.as_ref();

    let har_block = analysis.and_then(|a| a.har_model.as_ref());
    let nested_har = nested.and_then(|block| block.har.as_ref());

    Snapshot {
        market: build_market(primary),
        volatility: build_volatility(indicators, nested),
        har: build_har(har_block, nested_har),
        signals: analysis
            .and_then(|a| a.signals.as_deref())
            .map(build_signals)
            .unwrap_or_default(),
        historical: analysis
            .and_then(|a| a.historical_data.as_deref())
            .map(build_historical)
            .unwrap_or_default(),
    }
}

/// Pick the first finite value along the analysis -> nested chain, then
/// clamp negatives; otherwise take the literal default as-is.
fn resolve(analysis: Option<f64>, nested: Option<f64>, default: f64) -> f64 {
    analysis
        .filter(|value| value.is_finite())
        .or_else(|| nested.filter(|value| value.is_finite()))
        .map(sanitize)
        .unwrap_or(default)
}

/// Like [`resolve`] but keeps the sign; regression coefficients and the
/// intercept may legitimately be negative.
fn resolve_signed(analysis: Option<f64>, nested: Option<f64>, default: f64) -> f64 {
    analysis
        .filter(|value| value.is_finite())
        .or_else(|| nested.filter(|value| value.is_finite()))
        .unwrap_or(default)
}

fn parse_timestamp(raw: Option<&String>) -> UtcDateTime {
    raw.and_then(|value| UtcDateTime::parse(value).ok())
        .unwrap_or_else(UtcDateTime::now)
}

fn build_market(primary: &PrimaryPayload) -> MarketRecord {
    let block = &primary.price;

    let open = block.open.map(sanitize).unwrap_or(0.0);
    let close = block
        .close
        .or(block.price)
        .map(sanitize)
        .unwrap_or(0.0);

    // Absent change figures are derived from the session itself; absent
    // previousClose is approximated by the open (no true prior close
    // arrives upstream).
    let change = block
        .change
        .map(sanitize_signed)
        .unwrap_or(close - open);
    let change_percent = block.change_percent.map(sanitize_signed).unwrap_or_else(|| {
        if open > 0.0 {
            (close - open) / open * 100.0
        } else {
            0.0
        }
    });

    MarketRecord {
        symbol: primary
            .symbol
            .clone()
            .unwrap_or_else(|| String::from(defaults::SYMBOL)),
        price: close,
        change,
        change_percent,
        volume: block.volume.map(sanitize).unwrap_or(0.0),
        high: block.high.map(sanitize).unwrap_or(0.0),
        low: block.low.map(sanitize).unwrap_or(0.0),
        open,
        previous_close: block.previous_close.map(sanitize).unwrap_or(open),
        timestamp: parse_timestamp(block.timestamp.as_ref()),
    }
}

fn build_volatility(
    indicators: Option<&VolatilityBlock>,
    nested: Option<&VolatilityBlock>,
) -> VolatilityRecord {
    let field = |pick: fn(&VolatilityBlock) -> Option<f64>, default: f64| {
        resolve(
            indicators.and_then(pick),
            nested.and_then(pick),
            default,
        )
    };

    let trend = indicators
        .and_then(|block| block.volatility_trend.as_deref())
        .or_else(|| nested.and_then(|block| block.volatility_trend.as_deref()))
        .and_then(|raw| raw.parse::<VolatilityTrend>().ok())
        .unwrap_or(VolatilityTrend::Stable);

    let implied = indicators
        .and_then(|block| block.implied_volatility)
        .or_else(|| nested.and_then(|block| block.implied_volatility))
        .filter(|value| value.is_finite())
        .map(sanitize);

    let timestamp = indicators
        .and_then(|block| block.timestamp.as_ref())
        .or_else(|| nested.and_then(|block| block.timestamp.as_ref()));

    VolatilityRecord {
        realized_volatility: field(|b| b.realized_volatility, defaults::REALIZED_VOLATILITY),
        garch_forecast: field(|b| b.garch_forecast, defaults::GARCH_FORECAST),
        atr14: field(|b| b.atr14, defaults::ATR_14),
        parkinson_estimator: field(|b| b.parkinson_estimator, defaults::PARKINSON_ESTIMATOR),
        garman_klass_estimator: field(
            |b| b.garman_klass_estimator,
            defaults::GARMAN_KLASS_ESTIMATOR,
        ),
        volatility_trend: trend,
        implied_volatility: implied,
        timestamp: parse_timestamp(timestamp),
    }
}

fn build_har(analysis: Option<&HarBlock>, nested: Option<&HarBlock>) -> HarParams {
    let field = |pick: fn(&HarBlock) -> Option<f64>, default: f64| {
        resolve(analysis.and_then(pick), nested.and_then(pick), default)
    };
    let coefficient = |pick: fn(&HarBlock) -> Option<f64>, default: f64| {
        resolve_signed(analysis.and_then(pick), nested.and_then(pick), default)
    };

    let timestamp = analysis
        .and_then(|block| block.timestamp.as_ref())
        .or_else(|| nested.and_then(|block| block.timestamp.as_ref()));

    HarParams {
        daily: coefficient(|b| b.daily, defaults::HAR_DAILY),
        weekly: coefficient(|b| b.weekly, defaults::HAR_WEEKLY),
        monthly: coefficient(|b| b.monthly, defaults::HAR_MONTHLY),
        intercept: coefficient(|b| b.intercept, defaults::HAR_INTERCEPT),
        r_squared: field(|b| b.r_squared, defaults::HAR_R_SQUARED),
        mse: field(|b| b.mse, defaults::HAR_MSE),
        forecast_1d: field(|b| b.forecast_1d, defaults::HAR_DAILY),
        forecast_5d: field(|b| b.forecast_5d, defaults::HAR_WEEKLY),
        forecast_22d: field(|b| b.forecast_22d, defaults::HAR_MONTHLY),
        timestamp: parse_timestamp(timestamp),
    }
}

fn build_signals(raw: &[SignalPayload]) -> Vec<Signal> {
    raw.iter()
        .map(|signal| Signal {
            signal_type: signal.signal_type.clone().unwrap_or_default(),
            strength: signal.strength.map(sanitize).unwrap_or(0.0),
            message: signal.message.clone().unwrap_or_default(),
            timestamp: parse_timestamp(signal.timestamp.as_ref()),
            price: signal.price.filter(|value| value.is_finite()),
            indicator: signal.indicator.clone(),
        })
        .collect()
}

fn build_historical(raw: &[HistoricalPointPayload]) -> Vec<HistoricalPoint> {
    raw.iter()
        .filter_map(|point| {
            // Rows without a parseable date cannot be placed on a chart
            // axis and are dropped.
            let date = point
                .date
                .as_ref()
                .or(point.timestamp.as_ref())
                .and_then(|value| UtcDateTime::parse(value).ok())?;

            Some(HistoricalPoint {
                date,
                open: point.open.map(sanitize).unwrap_or(0.0),
                high: point.high.map(sanitize).unwrap_or(0.0),
                low: point.low.map(sanitize).unwrap_or(0.0),
                close: point
                    .close
                    .or(point.price)
                    .map(sanitize)
                    .unwrap_or(0.0),
                volume: point.volume.map(sanitize).unwrap_or(0.0),
                volatility: point
                    .volatility
                    .or(point.realized_volatility)
                    .filter(|value| value.is_finite())
                    .map(sanitize),
            })
        })
        .collect()
}
