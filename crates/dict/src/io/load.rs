//! Load functionality for dictionaries.
//!
//! Loading is all-or-nothing: every line is parsed and validated before any
//! entry reaches the store, so a bad line never leaves a half-loaded
//! dictionary behind.

use super::format::{DictFormat, SerializedDict};
use dictum_core::utf8;
use dictum_core::{DictEntry, DictError, DuplicatePolicy, Result, TextDict};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Configuration for loading dictionaries.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Source format
    pub format: DictFormat,
    /// Handling of keys that appear more than once
    pub duplicates: DuplicatePolicy,
}

/// Builder for creating a loader.
#[derive(Debug, Clone, Default)]
pub struct DictLoaderBuilder {
    config: LoaderConfig,
}

impl DictLoaderBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source format.
    pub fn format(mut self, format: DictFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Set the duplicate key policy.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicates = policy;
        self
    }

    /// Build the loader.
    pub fn build(self) -> DictLoader {
        DictLoader::with_config(self.config)
    }
}

/// Dictionary loader - parses sources into a [`TextDict`].
#[derive(Debug, Clone, Default)]
pub struct DictLoader {
    config: LoaderConfig,
}

impl DictLoader {
    /// Create a text loader that rejects duplicate keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with the given configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Create a loader builder.
    pub fn builder() -> DictLoaderBuilder {
        DictLoaderBuilder::new()
    }

    /// Get the loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a dictionary file into a new store.
    pub fn load(&self, path: &Path) -> Result<TextDict> {
        let mut dict = TextDict::new();
        self.load_into(&mut dict, path)?;
        Ok(dict)
    }

    /// Load a dictionary file into an existing store.
    ///
    /// The file is closed before returning, on success or failure.
    /// Returns how many entries were added.
    pub fn load_into(&self, dict: &mut TextDict, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|source| DictError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let added = self.load_from_reader(dict, BufReader::new(file))?;
        tracing::debug!(path = %path.display(), entries = added, "loaded dictionary");
        Ok(added)
    }

    /// Load from a caller-owned stream. The stream is not closed.
    pub fn load_from_reader<R: BufRead>(&self, dict: &mut TextDict, mut reader: R) -> Result<usize> {
        utf8::skip_utf8_bom(&mut reader)?;

        let entries = match self.config.format {
            DictFormat::Text => read_text_entries(&mut reader)?,
            DictFormat::Json => read_json_entries(&mut reader)?,
        };

        let added = dict.insert_batch(entries, self.config.duplicates)?;
        dict.ensure_sorted();
        Ok(added)
    }

    /// Load from an in-memory string into a new store.
    pub fn load_str(&self, source: &str) -> Result<TextDict> {
        let mut dict = TextDict::new();
        self.load_from_reader(&mut dict, source.as_bytes())?;
        Ok(dict)
    }
}

/// Parse every line of a text source. Lines may be arbitrarily long.
fn read_text_entries<R: BufRead>(reader: &mut R) -> Result<Vec<DictEntry>> {
    let mut entries = Vec::new();
    let mut line = Vec::new();
    let mut line_no = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_no += 1;
        entries.push(parse_entry(&line, line_no)?);
    }

    Ok(entries)
}

fn read_json_entries<R: BufRead>(reader: &mut R) -> Result<Vec<DictEntry>> {
    let data: SerializedDict = serde_json::from_reader(reader)?;

    for (i, entry) in data.entries.iter().enumerate() {
        if entry.values().iter().any(|v| v.is_empty()) {
            return Err(DictError::InvalidEntry(format!(
                "entry {} ('{}') has an empty value",
                i,
                entry.key()
            )));
        }
    }

    Ok(data.entries)
}

/// Parse one text line (`key\tv1 v2 ...`), with or without its line ending.
///
/// `line_no` is 1-based and only used for error reporting. Encoding errors
/// carry it along with their byte offset within `line`.
pub fn parse_entry(line: &[u8], line_no: usize) -> Result<DictEntry> {
    parse_line(line, line_no).map_err(|e| e.with_line(line_no))
}

fn parse_line(line: &[u8], line_no: usize) -> Result<DictEntry> {
    let tab = utf8::find_next_delimiter(line, b'\t')?;
    if utf8::at_line_end(line, tab) {
        return Err(DictError::malformed(line_no, "no tab between key and values"));
    }
    if tab == 0 {
        return Err(DictError::malformed(line_no, "empty key"));
    }

    let mut entry = DictEntry::new(to_str(line, 0, tab)?);

    let mut pos = tab;
    while !utf8::at_line_end(line, pos) {
        // Skip the tab or space just found.
        let start = utf8::next_char_start(line, pos)?;
        let end = start
            + utf8::find_next_delimiter(&line[start..], b' ').map_err(|e| e.offset_by(start))?;
        if end == start {
            let reason = if entry.num_values() == 0 {
                "no values after tab"
            } else {
                "empty value"
            };
            return Err(DictError::malformed(line_no, reason));
        }
        entry.push_value(to_str(line, start, end)?);
        pos = end;
    }

    if !matches!(&line[pos..], b"" | b"\n" | b"\r" | b"\r\n") {
        return Err(DictError::malformed(line_no, "unexpected terminator inside line"));
    }

    Ok(entry)
}

fn to_str(line: &[u8], start: usize, end: usize) -> Result<&str> {
    std::str::from_utf8(&line[start..end])
        .map_err(|e| DictError::encoding(start + e.valid_up_to(), "invalid UTF-8"))
}
