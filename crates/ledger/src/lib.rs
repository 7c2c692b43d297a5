// In crates/ledger/src/lib.rs

use core_types::{Result, TradeRecord};

/// The append-only journal of every trade logged in a session.
///
/// Storage is oldest-first in append order, independent of each record's
/// `date`. Records are never edited or removed; identity is positional.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    records: Vec<TradeRecord>,
}

impl Ledger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end of insertion order.
    ///
    /// Fails with `InvalidRecord` if the stake is negative, in which case the
    /// ledger is left untouched. Any report computed earlier is stale after a
    /// successful append; the ledger does not notify anyone.
    pub fn append(&mut self, record: TradeRecord) -> Result<()> {
        if let Err(e) = record.validate() {
            tracing::warn!(
                platform = %record.platform,
                instrument = %record.instrument,
                error = %e,
                "Rejected trade record."
            );
            return Err(e);
        }

        tracing::debug!(
            position = self.records.len(),
            date = %record.date,
            platform = %record.platform,
            "Appended trade record."
        );
        self.records.push(record);
        Ok(())
    }

    /// The full sequence, oldest-first.
    pub fn snapshot(&self) -> &[TradeRecord] {
        &self.records
    }

    /// The records newest-first, i.e. the exact reverse of append order.
    pub fn feed_order(&self) -> impl Iterator<Item = &TradeRecord> + '_ {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use core_types::{Error, Reaction};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn record(day: u32, notes: &str, stake: Decimal) -> TradeRecord {
        TradeRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            platform: "Binance".into(),
            instrument: "BTCUSD".into(),
            trade_type: "Futures".into(),
            profit_percent: dec!(1),
            profit_amount: dec!(10),
            total_stake: stake,
            notes: notes.into(),
            screenshot: None,
            reaction: Reaction::Approve,
            reaction_comment: None,
            // Identical timestamps: ordering must come from insertion alone.
            created_at: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn append_preserves_insertion_order_not_date_order() {
        let mut ledger = Ledger::new();
        ledger.append(record(19, "first", dec!(100))).unwrap();
        ledger.append(record(3, "second", dec!(100))).unwrap();
        ledger.append(record(11, "third", dec!(100))).unwrap();

        let notes: Vec<_> = ledger.snapshot().iter().map(|r| r.notes.as_str()).collect();
        assert_eq!(notes, ["first", "second", "third"]);
    }

    #[test]
    fn feed_order_is_reversed_insertion_order() {
        let mut ledger = Ledger::new();
        for n in ["a", "b", "c"] {
            ledger.append(record(1, n, dec!(0))).unwrap();
        }
        let notes: Vec<_> = ledger.feed_order().map(|r| r.notes.as_str()).collect();
        assert_eq!(notes, ["c", "b", "a"]);
    }

    #[test]
    fn rejected_append_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        ledger.append(record(1, "ok", dec!(50))).unwrap();

        let result = ledger.append(record(2, "bad", dec!(-1)));
        assert!(matches!(result, Err(Error::InvalidRecord { .. })));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.snapshot()[0].notes, "ok");
    }

    #[test]
    fn large_amounts_are_not_a_validation_concern() {
        let mut ledger = Ledger::new();
        let mut huge = record(4, "huge", dec!(100));
        huge.profit_amount = dec!(50000000000000000000000000000);

        ledger.append(huge.clone()).unwrap();
        ledger.append(huge).unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert!(ledger.snapshot().is_empty());
        assert_eq!(ledger.feed_order().count(), 0);
    }
}
