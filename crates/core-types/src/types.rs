// In crates/core-types/src/types.rs

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The qualitative verdict a trader attaches to a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    #[serde(alias = "✅")]
    Approve,
    #[serde(alias = "❌")]
    Disapprove,
}

impl Reaction {
    /// The symbol the dashboard renders for this reaction.
    pub fn symbol(&self) -> &'static str {
        match self {
            Reaction::Approve => "✅",
            Reaction::Disapprove => "❌",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Reaction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "approve" | "✅" => Ok(Reaction::Approve),
            "disapprove" | "❌" => Ok(Reaction::Disapprove),
            other => Err(Error::InvalidRecord {
                reason: format!("unknown reaction '{}'", other),
            }),
        }
    }
}

/// A trade as gathered by an input surface, before the ledger stamps it.
///
/// Unknown fields are rejected so malformed input never reaches the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TradeDraft {
    pub date: NaiveDate,
    pub platform: String,
    #[serde(alias = "trading_pair")]
    pub instrument: String,
    #[serde(default)]
    pub trade_type: String,
    pub profit_percent: Decimal,
    pub profit_amount: Decimal,
    pub total_stake: Decimal,
    #[serde(default)]
    pub notes: String,
    #[serde(default, with = "screenshot_base64")]
    pub screenshot: Option<Vec<u8>>,
    pub reaction: Reaction,
    #[serde(default)]
    pub reaction_comment: Option<String>,
}

impl TradeDraft {
    /// Stamps the draft with the instant it is appended.
    pub fn into_record(self, created_at: DateTime<Utc>) -> TradeRecord {
        TradeRecord {
            date: self.date,
            platform: self.platform,
            instrument: self.instrument,
            trade_type: self.trade_type,
            profit_percent: self.profit_percent,
            profit_amount: self.profit_amount,
            total_stake: self.total_stake,
            notes: self.notes,
            screenshot: self.screenshot,
            reaction: self.reaction,
            reaction_comment: self.reaction_comment,
            created_at,
        }
    }
}

/// A single journal entry. Immutable once it has been appended to a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// The trade's logical day.
    pub date: NaiveDate,
    pub platform: String,
    pub instrument: String,
    pub trade_type: String,
    pub profit_percent: Decimal,
    pub profit_amount: Decimal,
    pub total_stake: Decimal,
    pub notes: String,
    #[serde(default, with = "screenshot_base64")]
    pub screenshot: Option<Vec<u8>>,
    pub reaction: Reaction,
    pub reaction_comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TradeRecord {
    /// Checks the record-level invariants. Only the stake is constrained.
    pub fn validate(&self) -> Result<()> {
        if self.total_stake < Decimal::ZERO {
            return Err(Error::InvalidRecord {
                reason: format!("total_stake must be >= 0, got {}", self.total_stake),
            });
        }
        Ok(())
    }

    /// A trade is a win only when it made strictly positive profit.
    pub fn is_win(&self) -> bool {
        self.profit_amount > Decimal::ZERO
    }
}

/// Screenshots are opaque bytes in memory and base64 text on the wire.
mod screenshot_base64 {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
