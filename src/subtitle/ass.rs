//! ASS/SSA parser
//!
//! Only the `[Events]` section matters here. Its `Format:` line names the
//! comma-separated columns of every following `Dialogue:` line:
//!
//! ```text
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:01.00,0:00:04.00,Default,,0,0,0,,{\i1}Well, hello{\i0} there
//! ```
//!
//! The `Text` column may itself contain commas, so everything from the
//! `Text` column onward is joined back together.

use tracing::debug;

use super::timecode::{parse_timestamp, TimeFormat};
use super::{normalize_newlines, ParseWarning, ParsedSubtitle, SubtitleFormat};
use crate::error::{Result, SubtitleError};
use crate::types::TimedEntry;

const EVENTS_SECTION: &str = "[events]";
const FORMAT_PREFIX: &str = "Format:";
const DIALOGUE_PREFIX: &str = "Dialogue:";

/// Column positions resolved from the `Format:` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EventFormat {
    start: usize,
    end: usize,
    text: usize,
}

impl EventFormat {
    fn from_line(fields: &str, line_no: usize) -> Result<Self> {
        let names: Vec<String> = fields
            .split(',')
            .map(|f| f.trim().to_ascii_lowercase())
            .collect();
        let column = |name: &str| -> Result<usize> {
            names.iter().position(|n| n == name).ok_or_else(|| {
                SubtitleError::Parse(format!(
                    "line {}: Format line has no {} field",
                    line_no, name
                ))
            })
        };

        Ok(Self {
            start: column("start")?,
            end: column("end")?,
            text: column("text")?,
        })
    }

    fn min_fields(&self) -> usize {
        self.start.max(self.end).max(self.text) + 1
    }
}

/// Parse ASS/SSA text into timed entries
pub fn parse(input: &str) -> Result<Vec<TimedEntry>> {
    Ok(parse_detailed(input)?.entries)
}

/// Parse ASS/SSA text, reporting every dropped dialogue line.
///
/// Fails only when the `[Events]` section or its `Format:` line is absent.
pub fn parse_detailed(input: &str) -> Result<ParsedSubtitle> {
    let input = normalize_newlines(input);

    let mut in_events = false;
    let mut seen_events = false;
    let mut format: Option<EventFormat> = None;
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim_start();

        if line.starts_with('[') {
            in_events = line.trim_end().eq_ignore_ascii_case(EVENTS_SECTION);
            seen_events |= in_events;
            continue;
        }
        if !in_events {
            continue;
        }

        if let Some(fields) = strip_prefix_ignore_case(line, FORMAT_PREFIX) {
            if format.is_none() {
                format = Some(EventFormat::from_line(fields, line_no)?);
            }
            continue;
        }

        let Some(fields) = strip_prefix_ignore_case(line, DIALOGUE_PREFIX) else {
            // Comment:, Picture:, Sound:, Movie:, Command: and blank lines.
            continue;
        };
        let Some(event_format) = format else {
            let warning = ParseWarning::new(line_no, "Dialogue line before Format line");
            debug!(line = line_no, reason = %warning.reason, "skipping ass dialogue");
            warnings.push(warning);
            continue;
        };

        match parse_dialogue(fields, &event_format, entries.len() + 1) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                debug!(line = line_no, reason = %reason, "skipping ass dialogue");
                warnings.push(ParseWarning::new(line_no, reason));
            }
        }
    }

    if !seen_events {
        return Err(SubtitleError::Parse("no [Events] section".to_string()));
    }
    if format.is_none() {
        return Err(SubtitleError::Parse(
            "no Format line in [Events] section".to_string(),
        ));
    }

    debug!(
        entries = entries.len(),
        skipped = warnings.len(),
        "parsed ass subtitle"
    );

    Ok(ParsedSubtitle {
        format: SubtitleFormat::Ass,
        entries,
        warnings,
    })
}

fn parse_dialogue(
    fields: &str,
    format: &EventFormat,
    id: usize,
) -> std::result::Result<TimedEntry, String> {
    let parts: Vec<&str> = fields.split(',').collect();
    if parts.len() < format.min_fields() {
        return Err(format!(
            "expected at least {} fields, found {}",
            format.min_fields(),
            parts.len()
        ));
    }

    let start_ms =
        parse_timestamp(parts[format.start], TimeFormat::Ass).map_err(|e| e.to_string())?;
    let end_ms =
        parse_timestamp(parts[format.end], TimeFormat::Ass).map_err(|e| e.to_string())?;
    if end_ms <= start_ms {
        return Err(format!(
            "cue ends at {}ms, not after its start {}ms",
            end_ms, start_ms
        ));
    }

    let text = clean_ass_text(&parts[format.text..].join(","));
    Ok(TimedEntry::new(id, start_ms, end_ms, text))
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}

/// Clean ASS/SSA text by removing `{...}` style overrides and turning the
/// `\N`, `\n` and `\h` escapes into plain whitespace. A `{` with no closing
/// `}` is kept as text.
fn clean_ass_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => match text[pos + 1..].find('}') {
                Some(len) => {
                    let close = pos + 1 + len;
                    while chars.next_if(|&(i, _)| i <= close).is_some() {}
                }
                None => result.push(ch),
            },
            '\\' => match chars.peek().map(|&(_, c)| c) {
                Some('N') | Some('n') => {
                    chars.next();
                    result.push('\n');
                }
                Some('h') => {
                    chars.next();
                    result.push(' ');
                }
                _ => result.push(ch),
            },
            _ => result.push(ch),
        }
    }

    result
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
