use thiserror::Error;

/// Main error type for subtitle parsing and indexing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The file extension does not map to a known subtitle parser
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file lacks the structural markers its format requires
    #[error("Parse error: {0}")]
    Parse(String),

    /// A timestamp string does not match the format's clock pattern
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A standard I/O error while loading a subtitle or config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure serializing the index for the UI
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SubtitleError>;
