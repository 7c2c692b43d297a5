// In crates/engine/src/session.rs

use analytics::{AnalyticsEngine, AnalyticsReport};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use core_types::{Result, TradeDraft, TradeRecord};
use ledger::Ledger;

/// A draft that failed validation during batch ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedDraft {
    /// Position of the draft in the submitted batch.
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub accepted: usize,
    pub rejected: Vec<RejectedDraft>,
}

/// One trader's journal: a ledger plus the report last derived from it.
///
/// Constructed explicitly and passed to whoever needs it. The cached report is
/// dropped on every append and is tied to the day it was computed for, so
/// `report_at` never hands out a view of the wrong ledger or the wrong day.
pub struct Session {
    ledger: Ledger,
    engine: AnalyticsEngine,
    offset: FixedOffset,
    report: Option<AnalyticsReport>,
}

impl Session {
    /// Creates an empty session whose calendar is `offset` from UTC.
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            ledger: Ledger::new(),
            engine: AnalyticsEngine::new(),
            offset,
            report: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The trader's calendar day at instant `now`.
    pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// Appends without recomputing. The report stays stale until `recompute`.
    pub fn append_trade(&mut self, record: TradeRecord) -> Result<()> {
        self.ledger.append(record)?;
        self.report = None;
        Ok(())
    }

    /// Rebuilds the whole report from the ledger as seen at `now`.
    pub fn recompute(&mut self, now: DateTime<Utc>) -> Result<&AnalyticsReport> {
        let today = self.local_date(now);
        let report = self.engine.calculate(self.ledger.snapshot(), today)?;
        Ok(self.report.insert(report))
    }

    /// Stamps, appends and recomputes in one call.
    ///
    /// On rejection the ledger and any cached report are left as they were.
    pub fn log_trade(&mut self, draft: TradeDraft, now: DateTime<Utc>) -> Result<&AnalyticsReport> {
        self.append_trade(draft.into_record(now))?;
        tracing::info!(trades = self.ledger.len(), "Trade logged.");
        self.recompute(now)
    }

    /// Appends every valid draft, then recomputes once.
    ///
    /// Invalid drafts are skipped and reported; they do not abort the batch.
    pub fn ingest_batch<I>(&mut self, drafts: I, now: DateTime<Utc>) -> Result<BatchOutcome>
    where
        I: IntoIterator<Item = TradeDraft>,
    {
        let mut outcome = BatchOutcome::default();

        for (index, draft) in drafts.into_iter().enumerate() {
            match self.append_trade(draft.into_record(now)) {
                Ok(()) => outcome.accepted += 1,
                Err(e) => outcome.rejected.push(RejectedDraft {
                    index,
                    reason: e.to_string(),
                }),
            }
        }

        tracing::info!(
            accepted = outcome.accepted,
            rejected = outcome.rejected.len(),
            "Batch ingested. Recomputing report."
        );

        self.recompute(now)?;
        Ok(outcome)
    }

    /// The last computed report, or `None` if trades were appended since.
    ///
    /// The report is as of its own `reference_date`; use `report_at` to read
    /// the dashboard for a given instant.
    pub fn report(&self) -> Option<&AnalyticsReport> {
        self.report.as_ref()
    }

    /// The report as seen at `now`.
    ///
    /// Reuses the cache only when it is current and was computed for the same
    /// local day; otherwise recomputes.
    pub fn report_at(&mut self, now: DateTime<Utc>) -> Result<&AnalyticsReport> {
        let today = self.local_date(now);
        match self.report.take() {
            Some(report) if report.reference_date == today => Ok(self.report.insert(report)),
            previous => {
                if let Some(previous) = previous {
                    tracing::debug!(cached = %previous.reference_date, %today, "Day rolled over. Recomputing report.");
                }
                self.recompute(now)
            }
        }
    }

    pub fn is_stale(&self) -> bool {
        self.report.is_none()
    }

    /// The feed view: newest first.
    pub fn feed(&self) -> impl Iterator<Item = &TradeRecord> + '_ {
        self.ledger.feed_order()
    }
}
