//! Word occurrence index
//!
//! - Tokenization of cue text
//! - Index construction with per-word time estimates
//! - Read-only queries for the UI: frequency ranking, the cue active at a
//!   playback position, and words spoken around a playback position

pub mod builder;
pub mod query;
pub mod tokenizer;

use std::collections::HashMap;

use crate::types::{TimedEntry, WordEntry};

pub use builder::{build_index, IndexBuilder};
pub use query::IndexSnapshot;
pub use tokenizer::{lookup_key, tokenize, Tokenizer};

/// The result of indexing one subtitle file.
///
/// Immutable once built; a new file produces a new index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordIndex {
    /// All cues in file order, ids `1..=n`
    entries: Vec<TimedEntry>,
    /// Words in order of first sighting
    words: Vec<WordEntry>,
    /// Word -> position in `words`
    lookup: HashMap<String, usize>,
    /// Positions in `words`, sorted by descending count; ties keep
    /// first-sighting order
    by_frequency: Vec<usize>,
    /// Window for `words_near_default`
    default_window_ms: u64,
}

impl WordIndex {
    pub(crate) fn new(
        entries: Vec<TimedEntry>,
        words: Vec<WordEntry>,
        default_window_ms: u64,
    ) -> Self {
        let lookup = words
            .iter()
            .enumerate()
            .map(|(pos, w)| (w.word.clone(), pos))
            .collect();

        let mut by_frequency: Vec<usize> = (0..words.len()).collect();
        // sort_by is stable, so equal counts stay in first-sighting order.
        by_frequency.sort_by(|&a, &b| words[b].count.cmp(&words[a].count));

        Self {
            entries,
            words,
            lookup,
            by_frequency,
            default_window_ms,
        }
    }
}
