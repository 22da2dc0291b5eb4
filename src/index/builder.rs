//! Index construction
//!
//! Cues carry only a start and end time, so the time of each word is
//! estimated: a cue's `[start, end)` span is divided into `N` equal slices
//! for its `N` tokens, and token `i` gets slice `i`. Real speech is not
//! evenly paced; this is an approximation, not an alignment.

use std::collections::HashMap;

use tracing::info;

use super::tokenizer::Tokenizer;
use super::WordIndex;
use crate::config::{QueryConfig, VocabConfig};
use crate::types::{Occurrence, TimedEntry, WordEntry};

/// Builds a [`WordIndex`] from parsed cues
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    tokenizer: Tokenizer,
    default_window_ms: u64,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::from_config(&VocabConfig::default())
    }
}

impl IndexBuilder {
    pub fn new(tokenizer: Tokenizer, query: &QueryConfig) -> Self {
        Self {
            tokenizer,
            default_window_ms: query.default_window_ms,
        }
    }

    pub fn from_config(config: &VocabConfig) -> Self {
        Self::new(Tokenizer::from_config(&config.tokenizer), &config.query)
    }

    /// Index every token of every entry, in entry order
    pub fn build(&self, entries: Vec<TimedEntry>) -> WordIndex {
        let mut words: Vec<WordEntry> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut occurrences = 0usize;

        for entry in &entries {
            let tokens = self.tokenizer.tokenize(&entry.text);
            if tokens.is_empty() {
                continue;
            }

            let count = tokens.len();
            for (i, token) in tokens.into_iter().enumerate() {
                let (start_ms, end_ms) = word_span(entry, i, count);
                let occurrence = Occurrence {
                    start_ms,
                    end_ms,
                    context: entry.text.clone(),
                    entry_id: entry.id,
                };

                match positions.get(&token) {
                    Some(&pos) => words[pos].push(occurrence),
                    None => {
                        positions.insert(token.clone(), words.len());
                        words.push(WordEntry::new(token, occurrence));
                    }
                }
                occurrences += 1;
            }
        }

        info!(
            entries = entries.len(),
            words = words.len(),
            occurrences,
            "built word index"
        );

        WordIndex::new(entries, words, self.default_window_ms)
    }
}

/// Build an index with the default tokenizer
pub fn build_index(entries: Vec<TimedEntry>) -> WordIndex {
    IndexBuilder::default().build(entries)
}

/// Time slice `index` of `count` equal slices of the entry's span.
///
/// Slice bounds are computed from the entry start each time, so rounding
/// never accumulates and the last slice ends exactly at `end_ms`. When a
/// cue is shorter (in ms) than its token count some slices are empty.
fn word_span(entry: &TimedEntry, index: usize, count: usize) -> (u64, u64) {
    let span = entry.duration_ms() as u128;
    let offset = |k: usize| (span * k as u128 / count as u128) as u64;
    (
        entry.start_ms + offset(index),
        entry.start_ms + offset(index + 1),
    )
}
