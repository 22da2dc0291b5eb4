//! Read-only queries over a built [`WordIndex`]

use serde::Serialize;

use super::tokenizer::lookup_key;
use super::WordIndex;
use crate::error::Result;
use crate::known_words::KnownWords;
use crate::types::{Occurrence, TimedEntry, WordEntry};

/// The `{ entries, words }` payload handed to the UI, words ranked by
/// frequency
#[derive(Debug, Serialize)]
pub struct IndexSnapshot<'a> {
    pub entries: &'a [TimedEntry],
    pub words: Vec<&'a WordEntry>,
}

impl WordIndex {
    /// All cues in file order
    pub fn entries(&self) -> &[TimedEntry] {
        &self.entries
    }

    /// Look up a cue by its 1-based id
    pub fn entry(&self, id: usize) -> Option<&TimedEntry> {
        id.checked_sub(1).and_then(|pos| self.entries.get(pos))
    }

    /// Number of distinct words
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Total number of indexed tokens across all words
    pub fn total_occurrences(&self) -> usize {
        self.words.iter().map(|w| w.count).sum()
    }

    /// Look up a word; the argument is normalized first
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.lookup
            .get(&lookup_key(word))
            .map(|&pos| &self.words[pos])
    }

    /// Every occurrence of a word, in scan order
    pub fn occurrences(&self, word: &str) -> &[Occurrence] {
        self.get(word)
            .map(|w| w.occurrences.as_slice())
            .unwrap_or(&[])
    }

    /// Words in order of first sighting
    pub fn words(&self) -> impl Iterator<Item = &WordEntry> {
        self.words.iter()
    }

    /// Words by descending count; equal counts keep first-sighting order
    pub fn words_by_frequency(&self) -> Vec<&WordEntry> {
        self.by_frequency.iter().map(|&pos| &self.words[pos]).collect()
    }

    /// [`words_by_frequency`](Self::words_by_frequency) minus the words the
    /// caller already knows. The index itself is not filtered.
    pub fn unknown_words<K: KnownWords + ?Sized>(&self, known: &K) -> Vec<&WordEntry> {
        self.by_frequency
            .iter()
            .map(|&pos| &self.words[pos])
            .filter(|w| !known.is_known(&w.word))
            .collect()
    }

    /// The cue shown at `time_ms`. Overlapping cues resolve to the first in
    /// entry order.
    pub fn entry_at(&self, time_ms: u64) -> Option<&TimedEntry> {
        self.entries.iter().find(|e| e.contains(time_ms))
    }

    /// Words with at least one occurrence touching
    /// `[time_ms - window_ms/2, time_ms + window_ms/2]`, in first-sighting
    /// order.
    pub fn words_near(&self, time_ms: u64, window_ms: u64) -> Vec<&WordEntry> {
        // Bounds in half-milliseconds so an odd window loses nothing.
        let center = time_ms.saturating_mul(2);
        let from = center.saturating_sub(window_ms);
        let to = center.saturating_add(window_ms);

        self.words
            .iter()
            .filter(|w| w.occurrences.iter().any(|o| o.intersects_scaled(from, to, 2)))
            .collect()
    }

    /// [`words_near`](Self::words_near) with the configured window
    pub fn words_near_default(&self, time_ms: u64) -> Vec<&WordEntry> {
        self.words_near(time_ms, self.default_window_ms)
    }

    /// Borrowed export view for the UI
    pub fn snapshot(&self) -> IndexSnapshot<'_> {
        IndexSnapshot {
            entries: &self.entries,
            words: self.words_by_frequency(),
        }
    }

    /// The snapshot as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}
