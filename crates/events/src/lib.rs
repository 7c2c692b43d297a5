// --- Dashboard Message Structures ---

pub mod format;

use analytics::{AnalyticsReport, BreakdownStats, Window, WindowSummary};
use chrono::{DateTime, NaiveDate, Utc};
use core_types::TradeRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::format::{format_amount, format_percent};

/// One card in the reverse-chronological feed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeedEntry {
    pub date: NaiveDate,
    pub platform: String,
    pub instrument: String,
    pub trade_type: String,
    pub profit_percent: String,
    pub profit_amount: String,
    pub total_stake: String,
    pub notes: String,
    pub has_screenshot: bool,
    pub reaction: String,
    pub reaction_comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FeedEntry {
    pub fn from_record(record: &TradeRecord, currency: &str) -> Self {
        Self {
            date: record.date,
            platform: record.platform.clone(),
            instrument: record.instrument.clone(),
            trade_type: record.trade_type.clone(),
            profit_percent: format_percent(record.profit_percent),
            profit_amount: format_amount(record.profit_amount, currency),
            total_stake: format_amount(record.total_stake, currency),
            notes: record.notes.clone(),
            has_screenshot: record.screenshot.is_some(),
            reaction: record.reaction.symbol().to_string(),
            reaction_comment: record.reaction_comment.clone(),
            created_at: record.created_at,
        }
    }
}

/// A row of a breakdown table. Win rate is converted to a percentage here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BreakdownRow {
    pub key: String,
    pub total_profit: Decimal,
    pub avg_profit_pct: Decimal,
    pub total_principal: Decimal,
    pub win_rate_pct: f64,
    pub trade_count: u32,
}

impl BreakdownRow {
    pub fn new(key: impl Into<String>, stats: &BreakdownStats) -> Self {
        Self {
            key: key.into(),
            total_profit: stats.total_profit,
            avg_profit_pct: stats.avg_profit_pct,
            total_principal: stats.total_principal,
            win_rate_pct: stats.win_rate * 100.0,
            trade_count: stats.trade_count,
        }
    }
}

/// The per-platform and per-instrument tables shown for one window.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WindowTable {
    pub window: Window,
    pub totals: BreakdownRow,
    pub platforms: Vec<BreakdownRow>,
    pub instruments: Vec<BreakdownRow>,
}

impl WindowTable {
    pub fn from_summary(window: Window, summary: &WindowSummary) -> Self {
        Self {
            window,
            totals: BreakdownRow::new(window.label(), &summary.totals),
            platforms: sorted_rows(&summary.by_platform),
            instruments: sorted_rows(&summary.by_instrument),
        }
    }
}

/// Most profitable first; equal profits fall back to key order.
fn sorted_rows(stats: &BTreeMap<String, BreakdownStats>) -> Vec<BreakdownRow> {
    let mut rows: Vec<BreakdownRow> = stats.iter().map(|(k, s)| BreakdownRow::new(k.as_str(), s)).collect();
    rows.sort_by(|a, b| match b.total_profit.cmp(&a.total_profit) {
        Ordering::Equal => a.key.cmp(&b.key),
        other => other,
    });
    rows
}

/// The headline numbers for every window, in display order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardTiles {
    pub reference_date: NaiveDate,
    pub tiles: Vec<BreakdownRow>,
}

impl DashboardTiles {
    pub fn from_report(report: &AnalyticsReport) -> Self {
        Self {
            reference_date: report.reference_date,
            tiles: report
                .iter()
                .map(|(window, summary)| BreakdownRow::new(window.label(), &summary.totals))
                .collect(),
        }
    }
}

/// The top-level message handed to rendering surfaces.
/// `tag` and `content` are used by serde for clean JSON representation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum DashboardMessage {
    TradeLogged(FeedEntry),
    ReportUpdated(DashboardTiles),
    Window(WindowTable),
    Feed(Vec<FeedEntry>),
}
