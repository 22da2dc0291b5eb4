//! Timestamp parsing for subtitle clocks
//!
//! SRT uses `HH:MM:SS,mmm`, ASS/SSA uses `H:MM:SS.cc` (centiseconds).
//! Both map onto a single elapsed-millisecond timeline; hours are not
//! capped at 24.

use crate::error::{Result, SubtitleError};

/// Clock flavour of a timestamp string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `HH:MM:SS,mmm`
    Srt,
    /// `H:MM:SS.cc`
    Ass,
}

/// Parse a timestamp into milliseconds from the start of the file
pub fn parse_timestamp(raw: &str, format: TimeFormat) -> Result<u64> {
    let trimmed = raw.trim();
    let caps = match format {
        TimeFormat::Srt => regex!(r"^(\d+):(\d{2}):(\d{2}),(\d{3})$").captures(trimmed),
        TimeFormat::Ass => regex!(r"^(\d+):(\d{2}):(\d{2})\.(\d{2})$").captures(trimmed),
    }
    .ok_or_else(|| invalid(raw, format))?;

    let field = |i: usize| -> Result<u64> {
        caps[i].parse::<u64>().map_err(|_| invalid(raw, format))
    };
    let hours = field(1)?;
    let minutes = field(2)?;
    let seconds = field(3)?;
    let fraction = field(4)?;

    if minutes > 59 || seconds > 59 {
        return Err(invalid(raw, format));
    }

    let fraction_ms = match format {
        TimeFormat::Srt => fraction,
        TimeFormat::Ass => fraction * 10,
    };

    hours
        .checked_mul(3_600_000)
        .and_then(|ms| ms.checked_add(minutes * 60_000 + seconds * 1000 + fraction_ms))
        .ok_or_else(|| invalid(raw, format))
}

fn invalid(raw: &str, format: TimeFormat) -> SubtitleError {
    let expected = match format {
        TimeFormat::Srt => "HH:MM:SS,mmm",
        TimeFormat::Ass => "H:MM:SS.cc",
    };
    SubtitleError::InvalidTimestamp(format!("expected {}, got {:?}", expected, raw))
}
