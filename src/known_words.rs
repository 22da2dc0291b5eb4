//! Known and misspelled word sets
//!
//! The index never filters itself. Callers pass a [`KnownWords`]
//! implementation to [`WordIndex::unknown_words`](crate::WordIndex::unknown_words)
//! to hide what the learner already knows. Persistence of these sets
//! belongs to the surrounding application.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::index::lookup_key;

/// Set-membership query over normalized words
pub trait KnownWords {
    fn is_known(&self, word: &str) -> bool;
}

impl KnownWords for HashSet<String> {
    fn is_known(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl KnownWords for BTreeSet<String> {
    fn is_known(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// In-memory known / misspelled word lists.
///
/// Marking a word known removes it from the misspelled list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBook {
    known: BTreeSet<String>,
    misspelled: BTreeSet<String>,
}

impl WordBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a book from previously saved known words
    pub fn with_known<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut book = Self::new();
        for word in words {
            book.add_known(word.as_ref());
        }
        book
    }

    /// Returns false if the word was already known or normalizes to nothing
    pub fn add_known(&mut self, word: &str) -> bool {
        let key = lookup_key(word);
        if key.is_empty() {
            return false;
        }
        self.misspelled.remove(&key);
        if self.known.contains(&key) {
            return false;
        }
        debug!(word = %key, "added known word");
        self.known.insert(key)
    }

    /// Returns false if the word was already recorded or normalizes to nothing
    pub fn add_misspelled(&mut self, word: &str) -> bool {
        let key = lookup_key(word);
        if key.is_empty() {
            return false;
        }
        self.misspelled.insert(key)
    }

    pub fn is_misspelled(&self, word: &str) -> bool {
        self.misspelled.contains(&lookup_key(word))
    }

    /// Known words in sorted order
    pub fn known_words(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }

    /// Misspelled words in sorted order
    pub fn misspelled_words(&self) -> impl Iterator<Item = &str> {
        self.misspelled.iter().map(String::as_str)
    }
}

impl KnownWords for WordBook {
    fn is_known(&self, word: &str) -> bool {
        self.known.contains(&lookup_key(word))
    }
}
