// In crates/analytics/src/engine.rs

use crate::types::{AnalyticsReport, BreakdownStats, Window, WindowSummary};
use chrono::{DateTime, NaiveDate, TimeZone};
use core_types::{Result, TradeRecord};
use itertools::Itertools;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use std::collections::BTreeMap;

/// The engine responsible for turning a ledger snapshot into an `AnalyticsReport`.
///
/// Holds no state between calls: every report is a full recomputation.
#[derive(Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates the six window summaries as seen from `today`.
    ///
    /// Each window filters the whole snapshot independently, so a trade dated
    /// `today` is counted in every window.
    pub fn calculate(&self, trades: &[TradeRecord], today: NaiveDate) -> Result<AnalyticsReport> {
        // The ledger validates on append; this only catches snapshots built elsewhere.
        for trade in trades {
            trade.validate()?;
        }

        let mut report = AnalyticsReport::new(today);
        for window in Window::ALL {
            let window_trades: Vec<&TradeRecord> = trades
                .iter()
                .filter(|t| window.contains(t.date, today))
                .collect();
            *report.summary_mut(window) = summarize(&window_trades);
        }

        tracing::debug!(
            %today,
            total = trades.len(),
            daily = report.daily.totals.trade_count,
            weekly = report.weekly.totals.trade_count,
            monthly = report.monthly.totals.trade_count,
            "Analytics report recomputed."
        );

        Ok(report)
    }
}

/// Computes a report using the calendar day of `now` in its own timezone.
pub fn compute_report<Tz: TimeZone>(trades: &[TradeRecord], now: &DateTime<Tz>) -> Result<AnalyticsReport> {
    AnalyticsEngine::new().calculate(trades, now.date_naive())
}

fn summarize(trades: &[&TradeRecord]) -> WindowSummary {
    if trades.is_empty() {
        return WindowSummary::default();
    }

    WindowSummary {
        totals: breakdown(trades),
        by_platform: group_by(trades, |t| t.platform.clone()),
        by_instrument: group_by(trades, |t| t.instrument.clone()),
    }
}

fn group_by<F>(trades: &[&TradeRecord], key: F) -> BTreeMap<String, BreakdownStats>
where
    F: Fn(&TradeRecord) -> String,
{
    trades
        .iter()
        .copied()
        .into_group_map_by(|t| key(t))
        .into_iter()
        .map(|(k, group)| (k, breakdown(&group)))
        .collect()
}

fn breakdown(trades: &[&TradeRecord]) -> BreakdownStats {
    let mut stats = BreakdownStats::default();
    if trades.is_empty() {
        return stats;
    }

    // 1. Count
    stats.trade_count = u32::try_from(trades.len()).unwrap_or(u32::MAX);
    let count = Decimal::from(trades.len());

    // 2. Sums
    stats.total_profit = checked_sum(trades.iter().map(|t| t.profit_amount), "total_profit");
    stats.total_principal = checked_sum(trades.iter().map(|t| t.total_stake), "total_principal");

    // 3. Unweighted mean of the per-trade percentages
    let pct_sum = checked_sum(trades.iter().map(|t| t.profit_percent), "profit_percent");
    stats.avg_profit_pct = pct_sum.checked_div(count).unwrap_or(Decimal::ZERO);

    // 4. Win rate as a fraction; zero profit is not a win
    let wins = trades.iter().filter(|t| t.is_win()).count();
    stats.win_rate = (Decimal::from(wins) / count).to_f64().unwrap_or(0.0);

    stats
}

/// Adds without panicking. A sum that leaves the `Decimal` range is clamped to
/// it and logged, so a report is still produced for any valid ledger.
fn checked_sum<I>(values: I, field: &'static str) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().fold(Decimal::ZERO, |acc, value| match acc.checked_add(value) {
        Some(sum) => sum,
        None => {
            tracing::warn!(field, "Decimal overflow while summing; clamping.");
            if value.is_sign_negative() { Decimal::MIN } else { Decimal::MAX }
        }
    })
}
