//! Core engine for voltrack.
//!
//! This crate contains:
//! - Canonical market/volatility domain models
//! - Raw payload shapes and the reconciliation fallback chain
//! - Volatility unit canonicalization
//! - HAR forecast evaluation and fit-quality classification
//! - Confidence-interval price projection
//! - Trading signal classification and filtering
//!
//! Everything is pure and synchronous; the polling and rendering layers
//! live elsewhere.

pub mod defaults;
pub mod domain;
pub mod error;
pub mod har;
pub mod payload;
pub mod projection;
pub mod reconcile;
pub mod signals;
pub mod units;

pub use domain::{
    HarParams, HistoricalPoint, MarketCondition, MarketRecord, PriceRange, RiskLevel,
    SeriesSummary, Signal, Snapshot, UtcDateTime, VolatilityRecord, VolatilityTrend,
};
pub use error::{CoreError, ValidationError};
pub use har::{DominantHorizon, FitQuality, HarEvaluation, HarForecasts};
pub use payload::{AnalysisPayload, PrimaryPayload, RawFeed};
pub use projection::{
    annotate_bands, band_accuracy, project_range, project_range_with, range_ladder, BandPoint,
    RangeLadder,
};
pub use reconcile::{reconcile, reconcile_parts};
pub use signals::{
    filter_signals, summarize, SignalDirection, SignalFilter, SignalSummary, StrengthTier,
};
pub use units::{normalize_volatility, normalize_volatility_with, UnitConvention};
