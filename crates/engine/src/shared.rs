// In crates/engine/src/shared.rs

use crate::session::{BatchOutcome, Session};
use analytics::AnalyticsReport;
use chrono::{DateTime, Utc};
use core_types::{Result, TradeDraft, TradeRecord};
use std::sync::{Arc, Mutex, MutexGuard};

/// A `Session` that several threads may write to and read from.
///
/// A single lock covers append and recompute together, so a recompute never
/// sees a half-finished append.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // Appends are a single push, so a panicking holder cannot leave the ledger half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn log_trade(&self, draft: TradeDraft, now: DateTime<Utc>) -> Result<AnalyticsReport> {
        let mut session = self.lock();
        session.log_trade(draft, now).cloned()
    }

    pub fn ingest_batch(&self, drafts: Vec<TradeDraft>, now: DateTime<Utc>) -> Result<BatchOutcome> {
        self.lock().ingest_batch(drafts, now)
    }

    /// The report as seen at `now`, recomputed if it is stale or was built for another day.
    pub fn report(&self, now: DateTime<Utc>) -> Result<AnalyticsReport> {
        self.lock().report_at(now).cloned()
    }

    pub fn feed(&self) -> Vec<TradeRecord> {
        self.lock().feed().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().ledger().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
