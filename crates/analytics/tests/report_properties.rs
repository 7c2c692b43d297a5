//! Property tests for report invariants.
//!
//! Uses proptest to verify:
//! 1. Membership implication: anything counted as Daily is counted in every window
//! 2. Additivity: breakdowns partition a window without dropping or double-counting
//! 3. Empty windows: no matching trades means all-zero stats and empty breakdowns
//! 4. Bounds: win rate stays in [0, 1]

use analytics::{AnalyticsEngine, BreakdownStats, Window};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use core_types::{Reaction, TradeRecord};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ── Strategies (proptest) ────────────────────────────────────────────

const PLATFORMS: &[&str] = &["Binance", "Bybit", "OKX", "SomeLocalBroker"];
const INSTRUMENTS: &[&str] = &["BTCUSD", "ETHUSD", "EURUSD", "XAUUSD"];

fn arb_today() -> impl Strategy<Value = NaiveDate> {
    // 2020-01-01 plus up to ~10 years, covering several ISO week-53 years.
    (0i64..3650).prop_map(|d| NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(d))
}

fn arb_trade(today: NaiveDate) -> impl Strategy<Value = TradeRecord> {
    (
        -400i64..400,
        0..PLATFORMS.len(),
        0..INSTRUMENTS.len(),
        -100_000i64..100_000,
        -2_000i64..2_000,
        0i64..1_000_000,
    )
        .prop_map(move |(offset, p, i, profit_cents, pct_bp, stake_cents)| TradeRecord {
            date: today + Duration::days(offset),
            platform: PLATFORMS[p].to_string(),
            instrument: INSTRUMENTS[i].to_string(),
            trade_type: "Futures".into(),
            profit_percent: Decimal::new(pct_bp, 2),
            profit_amount: Decimal::new(profit_cents, 2),
            total_stake: Decimal::new(stake_cents, 2),
            notes: String::new(),
            screenshot: None,
            reaction: Reaction::Approve,
            reaction_comment: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        })
}

fn arb_journal() -> impl Strategy<Value = (NaiveDate, Vec<TradeRecord>)> {
    arb_today().prop_flat_map(|today| (Just(today), prop::collection::vec(arb_trade(today), 0..60)))
}

fn sum_profit(stats: &std::collections::BTreeMap<String, BreakdownStats>) -> Decimal {
    stats.values().map(|s| s.total_profit).sum()
}

fn sum_count(stats: &std::collections::BTreeMap<String, BreakdownStats>) -> u32 {
    stats.values().map(|s| s.trade_count).sum()
}

// ── 1. Membership implication ────────────────────────────────────────

proptest! {
    #[test]
    fn daily_trades_are_in_every_window((today, trades) in arb_journal()) {
        for trade in trades.iter().filter(|t| Window::Daily.contains(t.date, today)) {
            for window in Window::ALL {
                prop_assert!(window.contains(trade.date, today), "{} missing from {}", trade.date, window);
            }
        }

        let report = AnalyticsEngine::new().calculate(&trades, today).unwrap();
        for window in Window::ALL {
            prop_assert!(report.summary(window).totals.trade_count >= report.daily.totals.trade_count);
        }
        prop_assert_eq!(report.all_time.totals.trade_count as usize, trades.len());
    }
}

// ── 2. Additivity ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn breakdowns_partition_each_window((today, trades) in arb_journal()) {
        let report = AnalyticsEngine::new().calculate(&trades, today).unwrap();

        for (window, summary) in report.iter() {
            let expected: Vec<&TradeRecord> = trades.iter().filter(|t| window.contains(t.date, today)).collect();
            prop_assert_eq!(summary.totals.trade_count as usize, expected.len());

            prop_assert_eq!(sum_profit(&summary.by_platform), summary.totals.total_profit);
            prop_assert_eq!(sum_profit(&summary.by_instrument), summary.totals.total_profit);
            prop_assert_eq!(sum_count(&summary.by_platform), summary.totals.trade_count);
            prop_assert_eq!(sum_count(&summary.by_instrument), summary.totals.trade_count);

            // No zero-count entries survive in a breakdown.
            prop_assert!(summary.by_platform.values().all(|s| s.trade_count > 0));
            prop_assert!(summary.by_instrument.values().all(|s| s.trade_count > 0));
        }
    }
}

// ── 3. Empty windows ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn far_future_reference_day_sees_only_all_time((today, trades) in arb_journal()) {
        let far = today + Duration::days(5 * 366);
        let report = AnalyticsEngine::new().calculate(&trades, far).unwrap();

        for window in [Window::Daily, Window::Weekly, Window::Monthly, Window::Quarterly, Window::Yearly] {
            let summary = report.summary(window);
            prop_assert_eq!(&summary.totals, &BreakdownStats::default());
            prop_assert!(summary.by_platform.is_empty());
            prop_assert!(summary.by_instrument.is_empty());
        }
        prop_assert_eq!(report.all_time.totals.trade_count as usize, trades.len());
    }
}

// ── 4. Bounds ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn win_rate_is_a_fraction((today, trades) in arb_journal()) {
        let report = AnalyticsEngine::new().calculate(&trades, today).unwrap();
        for (_, summary) in report.iter() {
            prop_assert!((0.0..=1.0).contains(&summary.totals.win_rate));
            for stats in summary.by_platform.values().chain(summary.by_instrument.values()) {
                prop_assert!((0.0..=1.0).contains(&stats.win_rate));
            }
        }
    }
}

#[test]
fn report_serializes_with_flattened_totals() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let report = AnalyticsEngine::new().calculate(&[], today).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["reference_date"], "2026-10-19");
    assert_eq!(json["all_time"]["trade_count"], 0);
    assert!(json["daily"]["by_platform"].as_object().unwrap().is_empty());
}
