//! Append-only game log with paged reads.
//!
//! Entries are never evicted. Backed by `im::Vector` so snapshots of the
//! session can share the log cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

/// One logged event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn number the event happened in (starts at 1).
    pub turn: u32,
    pub text: String,
}

/// Ordered turn events, oldest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameLog {
    entries: Vector<LogEntry>,
    page_size: usize,
}

impl GameLog {
    /// Create an empty log. A page size of zero is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            entries: Vector::new(),
            page_size: page_size.max(1),
        }
    }

    pub fn push(&mut self, turn: u32, text: impl Into<String>) {
        self.entries.push_back(LogEntry {
            turn,
            text: text.into(),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Number of pages; an empty log has one empty page.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.entries.len().div_ceil(self.page_size).max(1)
    }

    /// Entries of page `index`, counting from the oldest.
    pub fn page(&self, index: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries
            .iter()
            .skip(index.saturating_mul(self.page_size))
            .take(self.page_size)
    }

    /// Largest useful scroll offset for `window`.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.entries.len().saturating_sub(self.page_size)
    }

    /// A page-sized window starting `offset` entries from the oldest,
    /// clamped so the window is always full when the log is long enough.
    pub fn window(&self, offset: usize) -> impl Iterator<Item = &LogEntry> {
        let start = offset.min(self.max_offset());
        self.entries.iter().skip(start).take(self.page_size)
    }

    /// The most recent page-sized window.
    pub fn latest(&self) -> impl Iterator<Item = &LogEntry> {
        self.window(self.max_offset())
    }
}
