//! Literal fallback values and shared model constants.
//!
//! The reconciler substitutes these when a field is missing from every
//! upstream source, so the rendering layer never sees an absent metric.
//! They live in one place because the upstream service scattered the same
//! figures across several views.

/// Fallback symbol when the primary payload omits one.
pub const SYMBOL: &str = "SPY";

/// Realized volatility, percent scale as delivered upstream.
pub const REALIZED_VOLATILITY: f64 = 1.5786;

/// Average True Range over 14 sessions, index points.
pub const ATR_14: f64 = 29.23;

/// Parkinson high/low range estimator.
pub const PARKINSON_ESTIMATOR: f64 = 0.123;

/// Garman-Klass OHLC estimator.
pub const GARMAN_KLASS_ESTIMATOR: f64 = 0.127;

/// One-step GARCH volatility forecast, percent scale.
pub const GARCH_FORECAST: f64 = 1.4977;

/// HAR daily coefficient, doubling as the 1-day forecast fallback.
pub const HAR_DAILY: f64 = 0.0918;

/// HAR weekly coefficient, doubling as the 5-day forecast fallback.
pub const HAR_WEEKLY: f64 = 0.2053;

/// HAR monthly coefficient, doubling as the 22-day forecast fallback.
pub const HAR_MONTHLY: f64 = 0.4306;

pub const HAR_INTERCEPT: f64 = 0.001;

pub const HAR_R_SQUARED: f64 = 0.8691;

pub const HAR_MSE: f64 = 0.0001;

/// Annualization convention for daily volatility scaling.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Two-sided sigma multiplier approximating a 95% confidence band.
pub const SIGMA_BAND_MULTIPLIER: f64 = 2.0;

/// Sub-day horizon used for the remaining-session intraday band.
pub const INTRADAY_HORIZON_DAYS: f64 = 0.25;

/// Per-point fallback volatility (fraction) for chart band annotation.
pub const CHART_FALLBACK_VOLATILITY: f64 = 0.15;

/// Range-ladder fallback when the GARCH figure is missing or zero
/// (percent scale).
pub const LADDER_FALLBACK_GARCH: f64 = 15.0;

/// Range-ladder fallback when realized volatility is missing or zero
/// (percent scale).
pub const LADDER_FALLBACK_REALIZED: f64 = 18.0;

/// Realized volatility above this is a high-risk regime.
pub const RISK_HIGH_THRESHOLD: f64 = 2.0;

/// Realized volatility above this (and below the high bound) is medium.
pub const RISK_MEDIUM_THRESHOLD: f64 = 1.5;

/// Signals at or above this strength count as strong.
pub const STRONG_SIGNAL_THRESHOLD: f64 = 0.7;

/// Signals at or above this strength (below strong) count as moderate.
pub const MODERATE_SIGNAL_THRESHOLD: f64 = 0.4;
