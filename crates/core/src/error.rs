//! Error types for the dictionary library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dictionary loading, querying and saving.
#[derive(Error, Debug)]
pub enum DictError {
    /// A source line has no key/value separator, or no value after it
    #[error("Malformed entry at line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    /// Bytes that do not form a valid UTF-8 character boundary.
    ///
    /// `offset` is relative to the scanned buffer; `line` is set when the
    /// buffer is a line of a dictionary source.
    #[error(
        "Encoding error at {}byte {offset}: {reason}",
        .line.map(|l| format!("line {l}, ")).unwrap_or_default()
    )]
    Encoding {
        offset: usize,
        line: Option<usize>,
        reason: &'static str,
    },

    /// Dictionary file could not be opened for reading
    #[error("Cannot open dictionary {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or written
    #[error("Cannot write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on a caller-owned stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Entry rejected on insert (empty key or empty value list)
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Key already present in the store
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}

impl DictError {
    /// Build an `Encoding` error with no line attached.
    pub fn encoding(offset: usize, reason: &'static str) -> Self {
        Self::Encoding {
            offset,
            line: None,
            reason,
        }
    }

    /// Attach a 1-based source line to an `Encoding` error.
    ///
    /// Other variants, and errors that already carry a line, pass through.
    pub fn with_line(self, line_no: usize) -> Self {
        match self {
            Self::Encoding {
                offset,
                line: None,
                reason,
            } => Self::Encoding {
                offset,
                line: Some(line_no),
                reason,
            },
            other => other,
        }
    }

    /// Shift an `Encoding` offset found in a sub-slice starting at `base`.
    pub fn offset_by(self, base: usize) -> Self {
        match self {
            Self::Encoding {
                offset,
                line,
                reason,
            } => Self::Encoding {
                offset: base + offset,
                line,
                reason,
            },
            other => other,
        }
    }

    /// Build a `MalformedEntry` error for a 1-based line number.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for dictionary operations.
pub type Result<T> = std::result::Result<T, DictError>;
