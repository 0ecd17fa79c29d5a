//! Confidence-interval price projection.
//!
//! An annualized volatility figure is scaled down to the requested horizon
//! with the square-root-of-time rule and widened into a symmetric 2-sigma
//! band (roughly 95% two-sided coverage under normal returns).

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::units::{normalize_volatility_with, UnitConvention};
use crate::{HistoricalPoint, PriceRange, Snapshot, UtcDateTime};

/// Project a symmetric price band under the default unit convention.
///
/// Total over all inputs: a non-positive or non-finite horizon collapses
/// the band to zero width, and a non-positive base price yields a
/// degenerate zero-width range (callers filter nonsensical bases before
/// display rather than this function guessing at intent).
pub fn project_range(annualized_vol: f64, horizon_days: f64, base_price: f64) -> PriceRange {
    project_range_with(
        annualized_vol,
        horizon_days,
        base_price,
        UnitConvention::default(),
    )
}

/// Project a symmetric price band under an explicit unit convention.
pub fn project_range_with(
    annualized_vol: f64,
    horizon_days: f64,
    base_price: f64,
    convention: UnitConvention,
) -> PriceRange {
    let vol = normalize_volatility_with(annualized_vol, convention);
    let daily_vol = vol / defaults::TRADING_DAYS_PER_YEAR.sqrt();

    let horizon_vol = if horizon_days.is_finite() && horizon_days > 0.0 {
        daily_vol * horizon_days.sqrt()
    } else {
        0.0
    };

    let raw_move = base_price * horizon_vol * defaults::SIGMA_BAND_MULTIPLIER;
    let expected_move = if raw_move.is_finite() {
        raw_move.max(0.0)
    } else {
        0.0
    };

    PriceRange {
        horizon_days,
        base_price,
        upper: base_price + expected_move,
        lower: base_price - expected_move,
        expected_move,
    }
}

/// The four standard display horizons.
///
/// GARCH drives the short horizons, realized volatility the monthly one.
/// The intraday band is anchored at the session open; the rest at the
/// current price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeLadder {
    pub intraday: PriceRange,
    pub one_day: PriceRange,
    pub five_day: PriceRange,
    pub one_month: PriceRange,
}

pub fn range_ladder(snapshot: &Snapshot) -> RangeLadder {
    let garch = fallback_vol(
        snapshot.volatility.garch_forecast,
        defaults::LADDER_FALLBACK_GARCH,
    );
    let realized = fallback_vol(
        snapshot.volatility.realized_volatility,
        defaults::LADDER_FALLBACK_REALIZED,
    );

    let price = snapshot.market.price;
    let intraday_base = if snapshot.market.open > 0.0 {
        snapshot.market.open
    } else {
        price
    };

    RangeLadder {
        intraday: project_range(garch, defaults::INTRADAY_HORIZON_DAYS, intraday_base),
        one_day: project_range(garch, 1.0, price),
        five_day: project_range(garch, 5.0, price),
        one_month: project_range(realized, 22.0, price),
    }
}

fn fallback_vol(vol: f64, fallback: f64) -> f64 {
    if vol > 0.0 {
        vol
    } else {
        fallback
    }
}

/// One historical row annotated with its own one-day confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub date: UtcDateTime,
    pub close: f64,
    pub upper: f64,
    pub lower: f64,
}

/// Annotate each historical row with a one-day band derived from that
/// row's own volatility and close. Rows without a volatility estimate use
/// the chart fallback.
pub fn annotate_bands(points: &[HistoricalPoint]) -> Vec<BandPoint> {
    points
        .iter()
        .map(|point| {
            let range = project_range(point_volatility(point), 1.0, point.close);
            BandPoint {
                date: point.date,
                close: point.close,
                upper: range.upper,
                lower: range.lower,
            }
        })
        .collect()
}

/// Fraction of rows whose realized high/low stayed inside that row's
/// predicted band. Zero for an empty series.
pub fn band_accuracy(points: &[HistoricalPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    let hits = points
        .iter()
        .filter(|point| {
            let range = project_range(point_volatility(point), 1.0, point.close);
            point.high <= range.upper && point.low >= range.lower
        })
        .count();

    hits as f64 / points.len() as f64
}

fn point_volatility(point: &HistoricalPoint) -> f64 {
    point
        .volatility
        .filter(|vol| *vol > 0.0)
        .unwrap_or(defaults::CHART_FALLBACK_VOLATILITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_annualized_volatility_to_the_horizon() {
        let range = project_range(0.18, 1.0, 5000.0);

        // 0.18 / sqrt(252) * sqrt(1) * 5000 * 2 ~= 113.39
        assert!((range.expected_move - 113.39).abs() < 0.05);
        assert!((range.upper - 5113.39).abs() < 0.05);
        assert!((range.lower - 4886.61).abs() < 0.05);
    }

    #[test]
    fn normalizes_percent_scale_volatility_first() {
        let fraction = project_range(0.18, 1.0, 5000.0);
        let percent = project_range(18.0, 1.0, 5000.0);
        assert_eq!(fraction.expected_move, percent.expected_move);
    }

    #[test]
    fn band_is_symmetric_around_the_base() {
        let range = project_range(0.22, 5.0, 4873.5);
        assert!(((range.upper - range.base_price) - (range.base_price - range.lower)).abs() < 1e-9);
        assert!(range.expected_move >= 0.0);
    }

    #[test]
    fn longer_horizons_never_narrow_the_band() {
        let mut previous = 0.0;
        for horizon in [0.25, 1.0, 5.0, 22.0, 252.0] {
            let range = project_range(0.18, horizon, 5000.0);
            assert!(range.expected_move >= previous);
            previous = range.expected_move;
        }
    }

    #[test]
    fn fractional_horizons_are_supported() {
        let intraday = project_range(0.18, 0.25, 5000.0);
        let one_day = project_range(0.18, 1.0, 5000.0);
        assert!((intraday.expected_move - one_day.expected_move / 2.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_base_degenerates_instead_of_failing() {
        let range = project_range(0.18, 1.0, 0.0);
        assert_eq!(range.expected_move, 0.0);
        assert_eq!(range.upper, range.lower);

        let negative = project_range(0.18, 1.0, -100.0);
        assert_eq!(negative.expected_move, 0.0);
    }

    #[test]
    fn hostile_inputs_collapse_to_zero_width() {
        let range = project_range(f64::NAN, f64::INFINITY, 5000.0);
        assert_eq!(range.expected_move, 0.0);
        assert_eq!(range.upper, 5000.0);
        assert_eq!(range.lower, 5000.0);
    }
}
