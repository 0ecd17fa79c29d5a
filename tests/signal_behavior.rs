//! Behavior-driven tests for signal classification over reconciled feeds
//!
//! Unit-level tier and direction rules live with the core crate; these
//! tests cover the end-to-end path from a raw document to a filtered,
//! summarized signal list.

use voltrack_core::signals::{filter_signals, summarize, SignalFilter};
use voltrack_core::{reconcile, RawFeed};

fn snapshot_with_signals() -> voltrack_core::Snapshot {
    let feed = RawFeed::from_json(
        r#"{
            "primary": {"price": {"close": 5000.0}},
            "analysis": {
                "signals": [
                    {"type": "BUY_MOMENTUM", "strength": 0.82, "message": "breakout above resistance"},
                    {"type": "sell_reversal", "strength": 0.70, "message": "failed retest"},
                    {"type": "Rebuy_dip", "strength": 0.41, "message": "pullback to support"},
                    {"type": "volatility_spike", "strength": 0.95, "message": "regime shift"},
                    {"type": "SELL_OVERBOUGHT", "strength": 0.35, "message": "rsi stretched"}
                ]
            }
        }"#,
    )
    .expect("document should decode");
    reconcile(&feed)
}

// =============================================================================
// Signals: Filtering
// =============================================================================

#[test]
fn when_filtering_for_buys_only_buy_substring_types_survive() {
    // Given: A reconciled feed carrying five mixed signals
    let snapshot = snapshot_with_signals();

    // When: The buy filter is applied
    let filtered = filter_signals(&snapshot.signals, SignalFilter::Buy);

    // Then: Both literal and embedded "buy" types match, in feed order
    let types = filtered
        .iter()
        .map(|s| s.signal_type.as_str())
        .collect::<Vec<_>>();
    assert_eq!(types, vec!["BUY_MOMENTUM", "Rebuy_dip"]);
}

#[test]
fn when_filtering_for_sells_the_match_is_case_insensitive() {
    let snapshot = snapshot_with_signals();

    let filtered = filter_signals(&snapshot.signals, SignalFilter::Sell);

    let types = filtered
        .iter()
        .map(|s| s.signal_type.as_str())
        .collect::<Vec<_>>();
    assert_eq!(types, vec!["sell_reversal", "SELL_OVERBOUGHT"]);
}

#[test]
fn strong_filter_admits_any_direction_at_or_above_the_threshold() {
    let snapshot = snapshot_with_signals();

    let filtered = filter_signals(&snapshot.signals, SignalFilter::Strong);

    // 0.70 sits exactly on the threshold and is admitted
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|s| s.strength >= 0.7));
}

#[test]
fn filtering_never_reorders_or_mutates_the_source_list() {
    let snapshot = snapshot_with_signals();
    let before = snapshot.signals.clone();

    let all = filter_signals(&snapshot.signals, SignalFilter::All);

    assert_eq!(all, before);
    assert_eq!(snapshot.signals, before);
}

// =============================================================================
// Signals: Summary
// =============================================================================

#[test]
fn summary_counts_follow_the_same_rules_as_the_filters() {
    let snapshot = snapshot_with_signals();

    let summary = summarize(&snapshot.signals);

    assert_eq!(
        summary.buy,
        filter_signals(&snapshot.signals, SignalFilter::Buy).len()
    );
    assert_eq!(
        summary.sell,
        filter_signals(&snapshot.signals, SignalFilter::Sell).len()
    );
    assert_eq!(
        summary.strong,
        filter_signals(&snapshot.signals, SignalFilter::Strong).len()
    );
}

#[test]
fn a_feed_without_signals_yields_an_empty_list_and_zero_counts() {
    let feed = RawFeed::from_json(r#"{"primary":{"price":{"close":5000.0}},"analysis":{}}"#)
        .expect("document should decode");

    let snapshot = reconcile(&feed);

    assert!(snapshot.signals.is_empty());
    let summary = summarize(&snapshot.signals);
    assert_eq!(summary.buy, 0);
    assert_eq!(summary.sell, 0);
    assert_eq!(summary.strong, 0);
}
