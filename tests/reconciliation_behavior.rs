//! Behavior-driven tests for payload reconciliation
//!
//! These tests verify HOW raw upstream documents become the canonical
//! snapshot: resolution order, derived fields, and literal defaults.

use voltrack_core::{reconcile, RawFeed, VolatilityTrend};

fn feed(raw: &str) -> RawFeed {
    RawFeed::from_json(raw).expect("document should decode")
}

// =============================================================================
// Reconciliation: Derived Market Fields
// =============================================================================

#[test]
fn when_change_is_absent_system_derives_it_from_the_session() {
    // Given: A primary payload with open/close but no change figures
    let feed = feed(r#"{"symbol":"SPY","price":{"open":500.0,"close":505.0}}"#);

    // When: The payload is reconciled
    let snapshot = reconcile(&feed);

    // Then: Change figures are derived from the session itself
    assert_eq!(snapshot.market.change, 5.0);
    assert_eq!(snapshot.market.change_percent, 1.0);
}

#[test]
fn when_previous_close_is_absent_system_approximates_it_with_the_open() {
    let feed = feed(r#"{"price":{"open":4980.0,"close":5003.25}}"#);

    let snapshot = reconcile(&feed);

    assert_eq!(snapshot.market.previous_close, 4980.0);
}

#[test]
fn when_upstream_supplies_change_figures_system_keeps_them() {
    // Given: Upstream already computed change against the true prior close
    let feed = feed(
        r#"{"price":{"open":500.0,"close":505.0,"change":-2.5,"changePercent":-0.05,"previousClose":507.5}}"#,
    );

    let snapshot = reconcile(&feed);

    // Then: The supplied figures win over the derived ones
    assert_eq!(snapshot.market.change, -2.5);
    assert_eq!(snapshot.market.change_percent, -0.05);
    assert_eq!(snapshot.market.previous_close, 507.5);
}

// =============================================================================
// Reconciliation: Fallback Chain
// =============================================================================

#[test]
fn when_no_source_has_volatility_data_system_applies_literal_defaults() {
    // Given: An empty analysis payload and a primary without a volatility block
    let feed = feed(r#"{"primary":{"price":{"close":5000.0}},"analysis":{}}"#);

    let snapshot = reconcile(&feed);

    // Then: Every volatility field carries the documented literal default
    assert_eq!(snapshot.volatility.realized_volatility, 1.5786);
    assert_eq!(snapshot.volatility.atr14, 29.23);
    assert_eq!(snapshot.volatility.parkinson_estimator, 0.123);
    assert_eq!(snapshot.volatility.garman_klass_estimator, 0.127);
    assert_eq!(snapshot.volatility.garch_forecast, 1.4977);
    assert_eq!(snapshot.volatility.volatility_trend, VolatilityTrend::Stable);

    assert_eq!(snapshot.har.daily, 0.0918);
    assert_eq!(snapshot.har.weekly, 0.2053);
    assert_eq!(snapshot.har.monthly, 0.4306);
    assert_eq!(snapshot.har.intercept, 0.001);
    assert_eq!(snapshot.har.r_squared, 0.8691);
    assert_eq!(snapshot.har.mse, 0.0001);
    assert_eq!(snapshot.har.forecast_1d, 0.0918);
    assert_eq!(snapshot.har.forecast_5d, 0.2053);
    assert_eq!(snapshot.har.forecast_22d, 0.4306);
}

#[test]
fn when_both_sources_carry_a_field_the_analysis_payload_wins() {
    let feed = feed(
        r#"{
            "primary": {
                "price": {"close": 5000.0},
                "volatility": {"realizedVolatility": 1.1, "garchForecast": 1.2}
            },
            "analysis": {
                "volatilityIndicators": {"realizedVolatility": 1.9}
            }
        }"#,
    );

    let snapshot = reconcile(&feed);

    // Then: Analysis wins where present; the nested block fills the gap
    assert_eq!(snapshot.volatility.realized_volatility, 1.9);
    assert_eq!(snapshot.volatility.garch_forecast, 1.2);
}

#[test]
fn when_only_the_primary_nested_block_exists_system_reads_it() {
    let feed = feed(
        r#"{
            "symbol": "SPY",
            "price": {"close": 5000.0},
            "volatility": {
                "realizedVolatility": 1.31,
                "volatilityTrend": "Decreasing",
                "har": {"daily": 0.12, "r_squared": 0.55}
            }
        }"#,
    );

    let snapshot = reconcile(&feed);

    assert_eq!(snapshot.volatility.realized_volatility, 1.31);
    assert_eq!(
        snapshot.volatility.volatility_trend,
        VolatilityTrend::Decreasing
    );
    assert_eq!(snapshot.har.daily, 0.12);
    assert_eq!(snapshot.har.r_squared, 0.55);
    // Fields absent from the nested har block still fall back
    assert_eq!(snapshot.har.weekly, 0.2053);
}

// =============================================================================
// Reconciliation: Signals and History
// =============================================================================

#[test]
fn when_analysis_carries_signals_system_maps_them_in_order() {
    let feed = feed(
        r#"{
            "primary": {"price": {"close": 5000.0}},
            "analysis": {
                "signals": [
                    {"type": "BUY_MOMENTUM", "strength": 0.82, "message": "breakout", "price": 5001.5},
                    {"type": "sell_reversal", "strength": 0.44, "message": "fading"}
                ]
            }
        }"#,
    );

    let snapshot = reconcile(&feed);

    assert_eq!(snapshot.signals.len(), 2);
    assert_eq!(snapshot.signals[0].signal_type, "BUY_MOMENTUM");
    assert_eq!(snapshot.signals[0].price, Some(5001.5));
    assert_eq!(snapshot.signals[1].signal_type, "sell_reversal");
}

#[test]
fn when_historical_rows_use_legacy_field_names_system_still_reads_them() {
    // Given: An older feed with price/realized_volatility aliases
    let feed = feed(
        r#"{
            "primary": {"price": {"close": 5000.0}},
            "analysis": {
                "historicalData": [
                    {"date": "2025-06-02", "price": 4950.0, "realized_volatility": 0.16},
                    {"date": "2025-06-03", "open": 4950.0, "high": 4990.0, "low": 4930.0, "close": 4975.0, "volume": 1200000}
                ]
            }
        }"#,
    );

    let snapshot = reconcile(&feed);

    assert_eq!(snapshot.historical.len(), 2);
    assert_eq!(snapshot.historical[0].close, 4950.0);
    assert_eq!(snapshot.historical[0].volatility, Some(0.16));
    assert_eq!(snapshot.historical[1].high, 4990.0);
    assert_eq!(snapshot.historical[1].volatility, None);
}

#[test]
fn reconciliation_is_deterministic_for_the_same_document() {
    let raw = r#"{
        "primary": {"symbol": "SPY", "price": {"open": 500.0, "close": 505.0, "timestamp": "2025-06-02T14:30:00Z"}},
        "analysis": {"volatilityIndicators": {"realizedVolatility": 1.62, "timestamp": "2025-06-02T14:30:00Z"}}
    }"#;

    let first = reconcile(&RawFeed::from_json(raw).expect("decode"));
    let second = reconcile(&RawFeed::from_json(raw).expect("decode"));

    assert_eq!(first.market, second.market);
    assert_eq!(first.volatility, second.volatility);
}
