//! Error types and exit codes for refnote
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (service unreachable, transport, IO)
//! - 2: Usage error (bad citekey, bad flags/args)
//! - 3: Data error (no results, missing template, missing note)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the refnote binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad citekey, bad flags/args (2)
    Usage = 2,
    /// Data error - no results, missing template, missing note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during refnote operations
#[derive(Error, Debug)]
pub enum RefnoteError {
    // Usage errors (exit code 2)
    #[error("invalid citekey: {0} (expected lowercase segments like author_shorttitle_year)")]
    InvalidCitekey(String),

    #[error("unknown config entry: {0}")]
    UnknownConfigEntry(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no results found for {0}")]
    NoResults(String),

    #[error("no valid selection")]
    NoSelection,

    #[error("unknown template: {0}")]
    TemplateNotFound(String),

    #[error("note not found: {0}")]
    NoteNotFound(String),

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("Better BibTeX is not running. Please make sure to launch Zotero with BBT")]
    ServiceNotRunning,

    #[error("search request rejected: {0}")]
    BadRequest(String),

    #[error("search failed with status {0}")]
    SearchFailed(u16),

    #[error("http error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RefnoteError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RefnoteError::InvalidCitekey(_)
            | RefnoteError::UnknownConfigEntry(_)
            | RefnoteError::UsageError(_) => ExitCode::Usage,

            RefnoteError::NoResults(_)
            | RefnoteError::NoSelection
            | RefnoteError::TemplateNotFound(_)
            | RefnoteError::NoteNotFound(_)
            | RefnoteError::InvalidConfig { .. } => ExitCode::Data,

            RefnoteError::ServiceNotRunning
            | RefnoteError::BadRequest(_)
            | RefnoteError::SearchFailed(_)
            | RefnoteError::Http(_)
            | RefnoteError::Io(_)
            | RefnoteError::Json(_)
            | RefnoteError::Toml(_)
            | RefnoteError::Other(_) => ExitCode::Failure,
        }
    }
}

/// Result type alias for refnote operations
pub type Result<T> = std::result::Result<T, RefnoteError>;
