//! SubRip (`.srt`) parser
//!
//! A file is a sequence of blank-line separated blocks:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! Hello, world!
//! ```
//!
//! Malformed blocks never fail the parse; they are dropped and reported
//! as warnings.

use tracing::debug;

use super::timecode::{parse_timestamp, TimeFormat};
use super::{normalize_newlines, ParseWarning, ParsedSubtitle, SubtitleFormat};
use crate::types::TimedEntry;

const ARROW: &str = "-->";

/// Parse SRT text into timed entries
pub fn parse(input: &str) -> Vec<TimedEntry> {
    parse_detailed(input).entries
}

/// Parse SRT text, reporting every dropped block
pub fn parse_detailed(input: &str) -> ParsedSubtitle {
    let input = normalize_newlines(input);
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for block in split_blocks(&input) {
        match parse_block(&block, entries.len() + 1) {
            Ok(entry) => entries.push(entry),
            Err(warning) => {
                debug!(line = warning.line, reason = %warning.reason, "skipping srt block");
                warnings.push(warning);
            }
        }
    }

    debug!(
        entries = entries.len(),
        skipped = warnings.len(),
        "parsed srt subtitle"
    );

    ParsedSubtitle {
        format: SubtitleFormat::Srt,
        entries,
        warnings,
    }
}

/// A block of consecutive non-blank lines with their 1-based line numbers
type Block<'a> = Vec<(usize, &'a str)>;

fn split_blocks(input: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Block = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push((idx + 1, line));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_block(block: &Block<'_>, id: usize) -> Result<TimedEntry, ParseWarning> {
    let first_line = block[0].0;

    // Normally "index, timing, text..."; some files omit the index line.
    let timing_pos = block
        .iter()
        .take(2)
        .position(|(_, line)| line.contains(ARROW))
        .ok_or_else(|| ParseWarning::new(first_line, "no timing line"))?;
    let (timing_line_no, timing_line) = block[timing_pos];

    let (start_ms, end_ms) = parse_timing_line(timing_line)
        .map_err(|reason| ParseWarning::new(timing_line_no, reason))?;
    if end_ms <= start_ms {
        return Err(ParseWarning::new(
            timing_line_no,
            format!("cue ends at {}ms, not after its start {}ms", end_ms, start_ms),
        ));
    }

    let text = block[timing_pos + 1..]
        .iter()
        .map(|(_, line)| strip_markup(line))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(TimedEntry::new(id, start_ms, end_ms, text))
}

/// Parse `START --> END`, ignoring anything after the end timestamp
/// (some files append position hints such as `X1:100 X2:200`).
fn parse_timing_line(line: &str) -> Result<(u64, u64), String> {
    let (start, rest) = line
        .split_once(ARROW)
        .ok_or_else(|| format!("invalid timing line: {}", line))?;
    let end = rest.split_whitespace().next().unwrap_or("");

    let start_ms = parse_timestamp(start, TimeFormat::Srt).map_err(|e| e.to_string())?;
    let end_ms = parse_timestamp(end, TimeFormat::Srt).map_err(|e| e.to_string())?;
    Ok((start_ms, end_ms))
}

/// Remove `<i>`-style tags and `{\an8}`-style override blocks
fn strip_markup(line: &str) -> String {
    let line = regex!(r"<[^>]*>").replace_all(line, "");
    let line = regex!(r"\{[^}]*\}").replace_all(&line, "");
    line.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_srt_basic() {
        let srt_data = "1
00:00:01,000 --> 00:00:04,000
Hello, world!

2
00:00:05,000 --> 00:00:07,000
This is a subtitle.

3
00:00:08,000 --> 00:00:10,000
Third subtitle line 1.
Third subtitle line 2.
";
        let entries = parse(srt_data);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].start_ms, 1000);
        assert_eq!(entries[0].end_ms, 4000);
        assert_eq!(entries[0].text, "Hello, world!");

        assert_eq!(entries[2].id, 3);
        assert_eq!(entries[2].start_ms, 8000);
        assert_eq!(entries[2].end_ms, 10_000);
        assert_eq!(entries[2].text, "Third subtitle line 1.\nThird subtitle line 2.");
    }

    #[test]
    fn test_crlf_and_bom() {
        let srt_data = "\u{feff}1\r\n00:00:01,000 --> 00:00:02,500\r\nHi there\r\n\r\n";
        let entries = parse(srt_data);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].end_ms, 2500);
        assert_eq!(entries[0].text, "Hi there");
    }

    #[test]
    fn test_missing_index_line() {
        let srt_data = "00:00:01,000 --> 00:00:04,000\nNo index here\n";
        let entries = parse(srt_data);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "No index here");
    }

    #[test]
    fn test_position_hints_ignored() {
        let srt_data = "1\n00:00:01,000 --> 00:00:02,000 X1:100 X2:600 Y1:50 Y2:80\nPositioned\n";
        let entries = parse(srt_data);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].end_ms, 2000);
    }

    #[test]
    fn test_markup_stripped_from_text() {
        let srt_data = concat!(
            "1\n00:00:01,000 --> 00:00:02,000\n",
            "{\\an8}<i>Hello</i> <font color=\"red\">there</font>\n"
        );
        let entries = parse(srt_data);
        assert_eq!(entries[0].text, "Hello there");
    }

    #[test]
    fn test_malformed_blocks_skipped() {
        let srt_data = "1
00:00:01,000 00:00:04,000
Missing arrow

2
00:00:05.000 --> 00:00:06,000
Dot separator

3
00:00:09,000 --> 00:00:08,000
Backwards

just some text

5
00:00:10,000 --> 00:00:12,000
Survivor
";
        let parsed = parse_detailed(srt_data);
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].id, 1);
        assert_eq!(parsed.entries[0].text, "Survivor");
        assert_eq!(parsed.warnings.len(), 4);
        assert_eq!(parsed.warnings[0].line, 1);
        assert_eq!(parsed.warnings[1].line, 6);
        assert_eq!(parsed.warnings[3].line, 13);
    }

    #[test]
    fn test_ids_are_contiguous_after_filtering() {
        let srt_data = "1
garbage

2
00:00:01,000 --> 00:00:02,000
first

3
00:00:03,000 --> 00:00:04,000
second
";
        let entries = parse(srt_data);
        let ids: Vec<usize> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_no_timing_lines_is_empty_not_error() {
        let entries = parse("This is not a valid SRT format at all\n\nNeither is this");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_text_kept() {
        let srt_data = "1
00:00:01,000 --> 00:00:04,000

2
00:00:05,000 --> 00:00:08,000
Next subtitle";
        let entries = parse(srt_data);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "");
        assert_eq!(entries[1].text, "Next subtitle");
    }
}
