// In crates/analytics/src/lib.rs

pub mod engine;
pub mod types;

pub use engine::{AnalyticsEngine, compute_report};
pub use types::{AnalyticsReport, BreakdownStats, Window, WindowSummary};
