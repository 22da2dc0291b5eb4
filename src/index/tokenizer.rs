//! Word tokenizer
//!
//! Extracts lower-cased vocabulary tokens from cue text in left-to-right
//! order. Tokens are maximal runs of ASCII letters that may contain
//! internal apostrophes or hyphens (`don't`, `mother-in-law`); digits,
//! punctuation, `<...>` tags and `{...}` override blocks never produce
//! tokens.

use crate::config::TokenizerConfig;

/// Tokenizer with a configurable minimum token length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_word_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::from_config(&TokenizerConfig::default())
    }
}

impl Tokenizer {
    pub fn from_config(config: &TokenizerConfig) -> Self {
        Self {
            min_word_len: config.min_word_len,
        }
    }

    /// Split `text` into normalized tokens, preserving source order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");
        let without_tags = regex!(r"<[^>]*>").replace_all(&lowered, " ");
        let plain = regex!(r"\{[^}]*\}").replace_all(&without_tags, " ");

        // Letters only, so pure-digit runs never match.
        regex!(r"[a-z]+(?:['-][a-z]+)*")
            .find_iter(&plain)
            .map(|m| m.as_str())
            .filter(|token| token.len() >= self.min_word_len)
            .map(str::to_string)
            .collect()
    }
}

/// Tokenize with the default settings
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

/// Normalize a word into the key format used by the index and by
/// dictionary lookups: trimmed and lower-cased.
pub fn lookup_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
