// In crates/analytics/src/types.rs

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the six calendar-aligned, overlapping views over the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
    AllTime,
}

impl Window {
    /// Every window, finest first.
    pub const ALL: [Window; 6] = [
        Window::Daily,
        Window::Weekly,
        Window::Monthly,
        Window::Quarterly,
        Window::Yearly,
        Window::AllTime,
    ];

    /// Whether a trade dated `date` belongs to this window as seen from `today`.
    ///
    /// Each window is decided on its own; none is derived from a coarser one.
    /// Weekly follows ISO 8601: weeks start on Monday and belong to the
    /// week-based year, so 2024-12-30 and 2025-01-01 are both in 2025-W01.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Window::Daily => date == today,
            Window::Weekly => date.iso_week() == today.iso_week(),
            Window::Monthly => date.year() == today.year() && date.month() == today.month(),
            Window::Quarterly => date.year() == today.year() && quarter(date) == quarter(today),
            Window::Yearly => date.year() == today.year(),
            Window::AllTime => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Window::Daily => "Daily",
            Window::Weekly => "Weekly",
            Window::Monthly => "Monthly",
            Window::Quarterly => "Quarterly",
            Window::Yearly => "Yearly",
            Window::AllTime => "All Time",
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWindowError(pub String);

impl fmt::Display for ParseWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown window '{}'", self.0)
    }
}

impl std::error::Error for ParseWindowError {}

impl FromStr for Window {
    type Err = ParseWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "daily" | "day" => Ok(Window::Daily),
            "weekly" | "week" => Ok(Window::Weekly),
            "monthly" | "month" => Ok(Window::Monthly),
            "quarterly" | "quarter" => Ok(Window::Quarterly),
            "yearly" | "year" => Ok(Window::Yearly),
            "all_time" | "alltime" | "all" => Ok(Window::AllTime),
            _ => Err(ParseWindowError(s.to_string())),
        }
    }
}

/// Calendar quarter, 1 through 4.
pub fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// Sum, mean, ratio and count over a group of trades.
///
/// An empty group is all zeros rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BreakdownStats {
    pub total_profit: Decimal,
    /// Unweighted mean of `profit_percent`.
    pub avg_profit_pct: Decimal,
    pub total_principal: Decimal,
    /// Fraction in [0, 1] of trades with strictly positive profit.
    pub win_rate: f64,
    pub trade_count: u32,
}

/// Aggregates for one window, with per-platform and per-instrument breakdowns.
///
/// Breakdown maps only hold keys that actually occur inside the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WindowSummary {
    #[serde(flatten)]
    pub totals: BreakdownStats,
    pub by_platform: BTreeMap<String, BreakdownStats>,
    pub by_instrument: BTreeMap<String, BreakdownStats>,
}

impl WindowSummary {
    pub fn is_empty(&self) -> bool {
        self.totals.trade_count == 0
    }
}

/// The full derived view of a ledger as seen from one reference day.
///
/// Always rebuilt wholesale; never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub reference_date: NaiveDate,
    pub daily: WindowSummary,
    pub weekly: WindowSummary,
    pub monthly: WindowSummary,
    pub quarterly: WindowSummary,
    pub yearly: WindowSummary,
    pub all_time: WindowSummary,
}

impl AnalyticsReport {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            daily: WindowSummary::default(),
            weekly: WindowSummary::default(),
            monthly: WindowSummary::default(),
            quarterly: WindowSummary::default(),
            yearly: WindowSummary::default(),
            all_time: WindowSummary::default(),
        }
    }

    pub fn summary(&self, window: Window) -> &WindowSummary {
        match window {
            Window::Daily => &self.daily,
            Window::Weekly => &self.weekly,
            Window::Monthly => &self.monthly,
            Window::Quarterly => &self.quarterly,
            Window::Yearly => &self.yearly,
            Window::AllTime => &self.all_time,
        }
    }

    pub(crate) fn summary_mut(&mut self, window: Window) -> &mut WindowSummary {
        match window {
            Window::Daily => &mut self.daily,
            Window::Weekly => &mut self.weekly,
            Window::Monthly => &mut self.monthly,
            Window::Quarterly => &mut self.quarterly,
            Window::Yearly => &mut self.yearly,
            Window::AllTime => &mut self.all_time,
        }
    }

    /// Every window paired with its summary, finest first.
    pub fn iter(&self) -> impl Iterator<Item = (Window, &WindowSummary)> + '_ {
        Window::ALL.into_iter().map(move |w| (w, self.summary(w)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn iso_week_spans_year_boundary() {
        // Monday 2024-12-30 opens 2025-W01.
        let today = d(2025, 1, 1);
        assert!(Window::Weekly.contains(d(2024, 12, 30), today));
        assert!(!Window::Monthly.contains(d(2024, 12, 30), today));
        assert!(!Window::Yearly.contains(d(2024, 12, 30), today));
        // The Sunday before is still 2024-W52.
        assert!(!Window::Weekly.contains(d(2024, 12, 29), today));
    }

    #[test]
    fn iso_week_53_belongs_to_previous_year() {
        // Friday 2021-01-01 is in 2020-W53 together with 2020-12-28.
        assert!(Window::Weekly.contains(d(2020, 12, 28), d(2021, 1, 1)));
        assert!(!Window::Weekly.contains(d(2021, 1, 4), d(2021, 1, 1)));
    }

    #[test]
    fn same_week_number_in_another_year_is_excluded() {
        assert!(!Window::Weekly.contains(d(2025, 10, 20), d(2026, 10, 19)));
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(quarter(d(2026, 1, 1)), 1);
        assert_eq!(quarter(d(2026, 3, 31)), 1);
        assert_eq!(quarter(d(2026, 4, 1)), 2);
        assert_eq!(quarter(d(2026, 12, 31)), 4);

        let today = d(2026, 10, 19);
        assert!(Window::Quarterly.contains(d(2026, 12, 31), today));
        assert!(!Window::Quarterly.contains(d(2026, 9, 30), today));
        assert!(!Window::Quarterly.contains(d(2025, 10, 19), today));
    }

    #[test]
    fn month_requires_same_year() {
        let today = d(2026, 10, 19);
        assert!(Window::Monthly.contains(d(2026, 10, 1), today));
        assert!(!Window::Monthly.contains(d(2025, 10, 19), today));
    }

    #[test]
    fn all_time_contains_everything() {
        assert!(Window::AllTime.contains(d(1999, 1, 1), d(2026, 10, 19)));
        assert!(Window::AllTime.contains(d(2090, 1, 1), d(2026, 10, 19)));
    }

    #[test]
    fn window_parses_from_cli_names() {
        assert_eq!("daily".parse::<Window>().unwrap(), Window::Daily);
        assert_eq!("All-Time".parse::<Window>().unwrap(), Window::AllTime);
        assert_eq!("quarter".parse::<Window>().unwrap(), Window::Quarterly);
        assert!("fortnight".parse::<Window>().is_err());
    }
}
