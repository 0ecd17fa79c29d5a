mod models;
mod timestamp;

pub use models::{
    HarParams, HistoricalPoint, MarketCondition, MarketRecord, PriceRange, RiskLevel,
    SeriesSummary, Signal, Snapshot, VolatilityRecord, VolatilityTrend,
};
pub use timestamp::UtcDateTime;
