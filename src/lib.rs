//! Subtitle vocabulary index
//!
//! Parses SRT and ASS/SSA subtitle text into timed cues, extracts a
//! normalized vocabulary, and indexes every word occurrence with an
//! estimated time span so a player can seek to the moment a word is
//! spoken.

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

pub(crate) mod api;
pub mod config;
pub(crate) mod error;
pub mod index;
pub mod known_words;
pub mod logging;
pub mod subtitle;
pub(crate) mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use api::*;
pub use config::VocabConfig;
pub use error::{Result, SubtitleError};
pub use index::{build_index, lookup_key, tokenize, WordIndex};
pub use known_words::{KnownWords, WordBook};
pub use subtitle::timecode::{parse_timestamp, TimeFormat};
pub use subtitle::{ParseWarning, ParsedSubtitle, SubtitleFormat};
pub use types::{Occurrence, TimedEntry, WordEntry};
