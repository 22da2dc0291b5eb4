//! Subtitle parsing module
//!
//! Turns raw subtitle file text into an ordered list of [`TimedEntry`]:
//! - Timestamp decoding for both clock flavours
//! - SubRip (`.srt`) block parsing
//! - ASS/SSA (`.ass`, `.ssa`) `[Events]` parsing
//! - Parser selection by file extension

pub mod ass;
pub mod srt;
pub mod timecode;

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SubtitleError};
use crate::types::TimedEntry;

/// Subtitle format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    /// SubRip
    Srt,
    /// Advanced SubStation Alpha / SubStation Alpha
    Ass,
}

impl SubtitleFormat {
    /// Map a file extension to a format.
    ///
    /// The comparison is case-insensitive and a leading dot is ignored;
    /// no content sniffing is done.
    pub fn from_extension(ext: &str) -> Result<Self> {
        let ext = ext.trim().trim_start_matches('.');
        match ext.to_ascii_lowercase().as_str() {
            "srt" => Ok(SubtitleFormat::Srt),
            "ass" | "ssa" => Ok(SubtitleFormat::Ass),
            _ => Err(SubtitleError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Map a file path to a format by its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    /// Parse file text into timed entries
    pub fn parse(&self, text: &str) -> Result<Vec<TimedEntry>> {
        Ok(self.parse_detailed(text)?.entries)
    }

    /// Parse file text, keeping a record of every skipped block or line
    pub fn parse_detailed(&self, text: &str) -> Result<ParsedSubtitle> {
        match self {
            SubtitleFormat::Srt => Ok(srt::parse_detailed(text)),
            SubtitleFormat::Ass => ass::parse_detailed(text),
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Ass => "ass",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A block or line that was dropped while parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number where the dropped block or line starts
    pub line: usize,
    /// Why it was dropped
    pub reason: String,
}

impl ParseWarning {
    pub(crate) fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Parser output with diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubtitle {
    pub format: SubtitleFormat,
    pub entries: Vec<TimedEntry>,
    pub warnings: Vec<ParseWarning>,
}

/// Strip a UTF-8 BOM and turn `\r\n` / lone `\r` into `\n`.
pub(crate) fn normalize_newlines(text: &str) -> Cow<'_, str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_extension() {
        assert_eq!(SubtitleFormat::from_extension("srt").unwrap(), SubtitleFormat::Srt);
        assert_eq!(SubtitleFormat::from_extension(".SRT").unwrap(), SubtitleFormat::Srt);
        assert_eq!(SubtitleFormat::from_extension("ass").unwrap(), SubtitleFormat::Ass);
        assert_eq!(SubtitleFormat::from_extension("ssa").unwrap(), SubtitleFormat::Ass);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = SubtitleFormat::from_extension(".txt").unwrap_err();
        assert_eq!(err.to_string(), "unsupported format: txt");
        assert!(SubtitleFormat::from_extension("").is_err());
        assert!(SubtitleFormat::from_extension("vtt").is_err());
    }

    #[test]
    fn test_from_path() {
        let path = PathBuf::from("/movies/Some.Film.2001.en.ass");
        assert_eq!(SubtitleFormat::from_path(&path).unwrap(), SubtitleFormat::Ass);
        assert!(SubtitleFormat::from_path(&PathBuf::from("notes.txt")).is_err());
        assert!(SubtitleFormat::from_path(&PathBuf::from("no_extension")).is_err());
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("\u{feff}a\r\nb\rc"), "a\nb\nc");
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }
}
