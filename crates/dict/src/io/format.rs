//! Format definitions for dictionary serialization.
//!
//! The primary format is plain text, one entry per line:
//!
//! ```text
//! <key>\t<value1> <value2> ... <valueN>\n
//! ```
//!
//! Keys cannot contain tabs or spaces and values cannot contain spaces; there
//! is no escaping. A JSON form carries the same data for tooling.

use dictum_core::DictEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// On-disk dictionary formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictFormat {
    /// Tab/space separated text, one entry per line
    #[default]
    Text,
    /// JSON document holding the sorted entry list
    Json,
}

impl DictFormat {
    /// Guess the format from a file extension, defaulting to text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DictFormat::Json,
            _ => DictFormat::Text,
        }
    }
}

impl FromStr for DictFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(DictFormat::Text),
            "json" => Ok(DictFormat::Json),
            other => Err(format!("unknown dictionary format '{}'", other)),
        }
    }
}

impl fmt::Display for DictFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictFormat::Text => f.write_str("text"),
            DictFormat::Json => f.write_str("json"),
        }
    }
}

/// Complete dictionary in JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedDict {
    /// Version of the library that wrote the file
    pub version: String,
    /// Byte length of the longest key
    pub max_key_length: usize,
    /// Entries in key order
    pub entries: Vec<DictEntry>,
}
