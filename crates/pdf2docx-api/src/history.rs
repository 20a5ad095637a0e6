//! In-memory conversion history log.

use pdf2docx_core::ConversionRecord;
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

/// Process-lifetime ordered list of conversion attempts, most recent first.
///
/// Appends and reads take a short exclusive/shared critical section; the lock
/// is never held across an await point. Storage is unbounded; the read API
/// self-limits via `list`.
#[derive(Clone, Default)]
pub struct ConversionHistory {
    entries: Arc<RwLock<VecDeque<ConversionRecord>>>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the front of the history.
    pub fn record(&self, entry: ConversionRecord) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.push_front(entry);
    }

    /// Return up to `limit` most recent entries without mutating the log.
    pub fn list(&self, limit: usize) -> Vec<ConversionRecord> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
