use std::path::Path;

use tracing::{debug, info};

use crate::config::VocabConfig;
use crate::error::Result;
use crate::index::{IndexBuilder, WordIndex};
use crate::subtitle::{ParseWarning, SubtitleFormat};

/// Parse subtitle text and index it.
///
/// `extension` selects the parser (`srt`, `ass`, `ssa`); anything else is
/// an `UnsupportedFormat` error regardless of the content.
pub fn parse_subtitle(text: &str, extension: &str) -> Result<WordIndex> {
    parse_subtitle_with(text, extension, &VocabConfig::default())
}

/// [`parse_subtitle`] with explicit tokenizer/query settings
pub fn parse_subtitle_with(text: &str, extension: &str, config: &VocabConfig) -> Result<WordIndex> {
    Ok(analyze(text, extension, config)?.index)
}

/// An index plus the blocks or lines the parser dropped
#[derive(Debug, Clone)]
pub struct Analysis {
    pub format: SubtitleFormat,
    pub index: WordIndex,
    pub warnings: Vec<ParseWarning>,
}

/// Parse and index, keeping parser diagnostics
pub fn analyze(text: &str, extension: &str, config: &VocabConfig) -> Result<Analysis> {
    let format = SubtitleFormat::from_extension(extension)?;
    let parsed = format.parse_detailed(text)?;
    debug!(
        format = %format,
        entries = parsed.entries.len(),
        skipped = parsed.warnings.len(),
        "parsed subtitle"
    );

    let index = IndexBuilder::from_config(config).build(parsed.entries);
    Ok(Analysis {
        format,
        index,
        warnings: parsed.warnings,
    })
}

/// Read a subtitle file from disk and index it.
///
/// The format is chosen from the path's extension before the file is read.
pub fn load_file<P: AsRef<Path>>(path: P, config: &VocabConfig) -> Result<Analysis> {
    let path = path.as_ref();
    let format = SubtitleFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    info!(path = %path.display(), format = %format, bytes = text.len(), "loading subtitle file");
    analyze(&text, format.name(), config)
}
