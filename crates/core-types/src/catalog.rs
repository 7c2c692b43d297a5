// In crates/core-types/src/catalog.rs

//! Venues, pairs and categories the input surface offers as quick picks.
//!
//! Nothing here constrains a `TradeRecord`: unrecognized platforms or
//! instruments are carried through untouched.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PLATFORMS: &[&str] = &["Binance", "Bybit", "OKX", "Bitget", "MEXC", "KuCoin"];

pub const DEFAULT_INSTRUMENTS: &[&str] = &[
    "BTCUSD", "ETHUSD", "SOLUSD", "XRPUSD", "EURUSD", "GBPUSD", "XAUUSD",
];

pub const DEFAULT_TRADE_TYPES: &[&str] = &["Spot", "Futures", "Forex", "Options"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub platforms: Vec<String>,
    pub instruments: Vec<String>,
    pub trade_types: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            platforms: to_owned(DEFAULT_PLATFORMS),
            instruments: to_owned(DEFAULT_INSTRUMENTS),
            trade_types: to_owned(DEFAULT_TRADE_TYPES),
        }
    }
}

impl Catalog {
    pub fn is_known_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    pub fn is_known_instrument(&self, instrument: &str) -> bool {
        self.instruments.iter().any(|i| i == instrument)
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
