// In crates/app-config/src/types.rs

use crate::{Error, Result};
use chrono::FixedOffset;
use core_types::catalog::{Catalog, DEFAULT_INSTRUMENTS, DEFAULT_PLATFORMS, DEFAULT_TRADE_TYPES};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// How trades are recorded and which calendar the windows follow.
    #[serde(default)]
    pub journal: JournalSettings,
    /// Synthetic journal used by the `demo` command.
    #[serde(default)]
    pub demo: DemoSettings,
}

impl Settings {
    pub(crate) fn validate(&self) -> Result<()> {
        self.journal.offset()?;
        if self.journal.settlement_currency.trim().is_empty() {
            return Err(Error::Invalid("journal.settlement_currency must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct JournalSettings {
    /// Currency every profit and stake amount is expressed in.
    #[serde(default = "default_currency")]
    pub settlement_currency: String,
    /// Offset from UTC of the trader's calendar, in minutes.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_platforms")]
    pub known_platforms: Vec<String>,
    #[serde(default = "default_instruments")]
    pub known_instruments: Vec<String>,
    #[serde(default = "default_trade_types")]
    pub trade_types: Vec<String>,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            settlement_currency: default_currency(),
            utc_offset_minutes: 0,
            known_platforms: default_platforms(),
            known_instruments: default_instruments(),
            trade_types: default_trade_types(),
        }
    }
}

impl JournalSettings {
    pub fn offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            Error::Invalid(format!(
                "journal.utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }

    pub fn catalog(&self) -> Catalog {
        Catalog {
            platforms: self.known_platforms.clone(),
            instruments: self.known_instruments.clone(),
            trade_types: self.trade_types.clone(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct DemoSettings {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_record_count")]
    pub record_count: usize,
    /// Synthetic trades are spread over this many days before today.
    #[serde(default = "default_days_back")]
    pub days_back: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            record_count: default_record_count(),
            days_back: default_days_back(),
        }
    }
}

/// Helper functions for serde defaults
fn default_currency() -> String { "USDT".into() }
fn default_platforms() -> Vec<String> { to_owned(DEFAULT_PLATFORMS) }
fn default_instruments() -> Vec<String> { to_owned(DEFAULT_INSTRUMENTS) }
fn default_trade_types() -> Vec<String> { to_owned(DEFAULT_TRADE_TYPES) }
fn default_seed() -> u64 { 42 }
fn default_record_count() -> usize { 40 }
fn default_days_back() -> u32 { 120 }

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
