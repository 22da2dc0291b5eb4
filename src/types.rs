//! Core data types shared by the parsers, the indexer and the query layer.

use serde::Serialize;

/// A single subtitle cue with timing and text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedEntry {
    /// 1-based position in the parsed output
    pub id: usize,
    /// Start time in milliseconds
    pub start_ms: u64,
    /// End time in milliseconds (exclusive)
    pub end_ms: u64,
    /// Display text with markup removed
    pub text: String,
}

impl TimedEntry {
    /// Create a new timed entry
    pub fn new(id: usize, start_ms: u64, end_ms: u64, text: String) -> Self {
        Self {
            id,
            start_ms,
            end_ms,
            text,
        }
    }

    /// Get the duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Whether `time_ms` falls inside `[start_ms, end_ms)`
    pub fn contains(&self, time_ms: u64) -> bool {
        self.start_ms <= time_ms && time_ms < self.end_ms
    }
}

/// One timestamped appearance of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Estimated start of the word
    pub start_ms: u64,
    /// Estimated end of the word
    pub end_ms: u64,
    /// Full text of the cue the word appeared in
    pub context: String,
    /// Id of the owning `TimedEntry`
    pub entry_id: usize,
}

impl Occurrence {
    /// Whether this occurrence's span touches the closed window `[from_ms, to_ms]`.
    ///
    /// Zero-length spans (cues shorter than their token count) count as a
    /// single instant.
    pub fn intersects(&self, from_ms: u64, to_ms: u64) -> bool {
        self.intersects_scaled(from_ms, to_ms, 1)
    }

    /// [`intersects`](Self::intersects) with the window bounds given in
    /// units of `1/scale` ms, so half-millisecond bounds stay exact.
    pub(crate) fn intersects_scaled(&self, from: u64, to: u64, scale: u64) -> bool {
        let start = self.start_ms.saturating_mul(scale);
        let end = self.end_ms.saturating_mul(scale);
        if start == end {
            return from <= start && start <= to;
        }
        start <= to && end > from
    }
}

/// Aggregate for one normalized word form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    /// Normalized (lower-cased) word, the identity key
    pub word: String,
    /// Number of occurrences, always equal to `occurrences.len()`
    pub count: usize,
    /// Occurrences in scan order
    pub occurrences: Vec<Occurrence>,
}

impl WordEntry {
    pub(crate) fn new(word: String, first: Occurrence) -> Self {
        Self {
            word,
            count: 1,
            occurrences: vec![first],
        }
    }

    pub(crate) fn push(&mut self, occurrence: Occurrence) {
        self.occurrences.push(occurrence);
        self.count += 1;
    }

    /// The earliest occurrence, used to seek the player
    pub fn first_occurrence(&self) -> Option<&Occurrence> {
        self.occurrences.first()
    }
}
