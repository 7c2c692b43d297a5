// In app/src/input.rs

use anyhow::{Context, Result};
use core_types::TradeDraft;
use core_types::catalog::Catalog;
use std::fs;
use std::path::Path;

/// Reads a JSON array of trade drafts, as produced by the entry form.
pub fn load_drafts(path: &Path) -> Result<Vec<TradeDraft>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let drafts: Vec<TradeDraft> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse trades in {}", path.display()))?;

    tracing::info!(count = drafts.len(), path = %path.display(), "Loaded trade drafts.");
    Ok(drafts)
}

/// Logs venues the catalog does not know. They are still accepted.
pub fn note_unknown_venues(drafts: &[TradeDraft], catalog: &Catalog) {
    for draft in drafts {
        if !catalog.is_known_platform(&draft.platform) {
            tracing::debug!(platform = %draft.platform, "Platform not in catalog; keeping as entered.");
        }
        if !catalog.is_known_instrument(&draft.instrument) {
            tracing::debug!(instrument = %draft.instrument, "Instrument not in catalog; keeping as entered.");
        }
    }
}
