//! Save functionality for dictionaries.
//!
//! Output is always in key order and never carries a byte-order mark, so
//! saving the same dictionary twice produces identical files.

use super::format::{DictFormat, SerializedDict};
use dictum_core::{utf8, Dict, DictEntry, DictError, Result, TextDict};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Dictionary saver - writes a sorted lexicon to disk.
pub struct DictSaver<'a> {
    /// Entries in key order
    entries: &'a [DictEntry],
    /// Byte length of the longest key
    max_key_length: usize,
    /// Output format
    format: DictFormat,
}

impl<'a> DictSaver<'a> {
    /// Create a text saver for any sorted dictionary.
    pub fn new<D: Dict + ?Sized>(dict: &'a D) -> Self {
        Self {
            entries: dict.lexicon(),
            max_key_length: dict.key_max_length(),
            format: DictFormat::Text,
        }
    }

    /// Create a text saver for a store, sorting it first if needed.
    pub fn from_text_dict(dict: &'a mut TextDict) -> Self {
        let max_key_length = dict.key_max_length();
        Self {
            entries: dict.lexicon(),
            max_key_length,
            format: DictFormat::Text,
        }
    }

    /// Set the output format.
    pub fn format(mut self, format: DictFormat) -> Self {
        self.format = format;
        self
    }

    /// Save to a file, creating or truncating it.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file_write = |source: std::io::Error| DictError::FileWrite {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(file_write)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(|e| match e {
            DictError::Io(source) => file_write(source),
            other => other,
        })?;
        writer.flush().map_err(file_write)?;

        tracing::debug!(
            path = %path.display(),
            entries = self.entries.len(),
            format = %self.format,
            "saved dictionary"
        );
        Ok(())
    }

    /// Write to a caller-owned stream. The stream is not flushed or closed.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        match self.format {
            DictFormat::Text => self.write_text(&mut writer),
            DictFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &self.serialize())?;
                writer.write_all(b"\n")?;
                Ok(())
            }
        }
    }

    /// Render the text form into a string.
    pub fn to_text(&self) -> Result<String> {
        let mut out = Vec::new();
        self.write_text(&mut out)?;
        String::from_utf8(out)
            .map_err(|e| DictError::encoding(e.utf8_error().valid_up_to(), "invalid UTF-8"))
    }

    fn write_text<W: Write>(&self, writer: &mut W) -> Result<()> {
        for entry in self.entries {
            check_representable(entry)?;

            writer.write_all(entry.key().as_bytes())?;
            writer.write_all(b"\t")?;
            for (i, value) in entry.values().iter().enumerate() {
                if i > 0 {
                    writer.write_all(b" ")?;
                }
                writer.write_all(value.as_bytes())?;
            }
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Serialize the dictionary to the JSON structure.
    fn serialize(&self) -> SerializedDict {
        SerializedDict {
            version: env!("CARGO_PKG_VERSION").to_string(),
            max_key_length: self.max_key_length,
            entries: self.entries.to_vec(),
        }
    }
}

/// Reject entries the unescaped text format cannot reproduce.
///
/// The loader splits a line at its first tab, then splits the rest at spaces.
/// So keys may hold spaces but no tab, and values may hold tabs but no space.
fn check_representable(entry: &DictEntry) -> Result<()> {
    let bad_key = entry
        .key()
        .bytes()
        .any(|b| b == b'\t' || utf8::is_terminator(b));
    if bad_key {
        return Err(DictError::InvalidEntry(format!(
            "key {:?} contains a tab or line break",
            entry.key()
        )));
    }

    let bad_value = entry
        .values()
        .iter()
        .any(|v| v.is_empty() || v.bytes().any(|b| b == b' ' || utf8::is_terminator(b)));
    if bad_value || entry.num_values() == 0 {
        return Err(DictError::InvalidEntry(format!(
            "values of key {:?} cannot be written as text",
            entry.key()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load::DictLoader;

    fn sample() -> TextDict {
        let mut dict = TextDict::new();
        dict.insert(DictEntry::with_values("b", ["B"])).unwrap();
        dict.insert(DictEntry::with_values("a", ["A1", "A2", "A3"]))
            .unwrap();
        dict.insert(DictEntry::with_values("\u{4e2d}", ["zh"])).unwrap();
        dict
    }

    #[test]
    fn test_text_output_is_sorted() {
        let mut dict = sample();
        let text = DictSaver::from_text_dict(&mut dict).to_text().unwrap();
        assert_eq!(text, "a\tA1 A2 A3\nb\tB\n\u{4e2d}\tzh\n");
    }

    #[test]
    fn test_text_roundtrip() {
        let lexicon = sample().freeze();
        let text = DictSaver::new(&lexicon).to_text().unwrap();

        let reloaded = DictLoader::new().load_str(&text).unwrap().freeze();
        assert_eq!(reloaded, lexicon);
    }

    #[test]
    fn test_json_roundtrip() {
        let lexicon = sample().freeze();
        let mut out = Vec::new();
        DictSaver::new(&lexicon)
            .format(DictFormat::Json)
            .write_to(&mut out)
            .unwrap();

        let mut reloaded = TextDict::new();
        let added = DictLoader::builder()
            .format(DictFormat::Json)
            .build()
            .load_from_reader(&mut reloaded, &out[..])
            .unwrap();
        assert_eq!(added, 3);
        assert_eq!(reloaded.key_max_length(), lexicon.key_max_length());
        assert_eq!(reloaded.lexicon(), lexicon.lexicon());
    }

    #[test]
    fn test_tabs_in_values_and_spaces_in_keys_roundtrip() {
        let source = "k\ta\tb c\nsp ace\tv\n";
        let mut dict = DictLoader::new().load_str(source).unwrap();
        assert_eq!(dict.get("k").unwrap().values(), &["a\tb", "c"]);
        assert!(dict.contains_key("sp ace"));

        let text = DictSaver::from_text_dict(&mut dict).to_text().unwrap();
        assert_eq!(text, "k\ta\tb c\nsp ace\tv\n");

        let mut reloaded = DictLoader::new().load_str(&text).unwrap();
        assert_eq!(reloaded.lexicon(), dict.lexicon());
    }

    #[test]
    fn test_rejects_unrepresentable() {
        let mut dict = TextDict::new();
        dict.insert(DictEntry::with_values("a\tb", ["x"])).unwrap();
        assert!(DictSaver::from_text_dict(&mut dict).to_text().is_err());

        let mut dict = TextDict::new();
        dict.insert(DictEntry::with_values("a", ["x\ny"])).unwrap();
        assert!(DictSaver::from_text_dict(&mut dict).to_text().is_err());

        let mut dict = TextDict::new();
        dict.insert(DictEntry::with_values("a", ["x y"])).unwrap();
        assert!(matches!(
            DictSaver::from_text_dict(&mut dict).to_text(),
            Err(DictError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut dict = sample();

        DictSaver::from_text_dict(&mut dict).save(&path).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert!(!written.starts_with(&utf8::UTF8_BOM));
        assert_eq!(
            String::from_utf8(written).unwrap(),
            "a\tA1 A2 A3\nb\tB\n\u{4e2d}\tzh\n"
        );
    }

    #[test]
    fn test_save_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let lexicon = sample().freeze();

        let err = DictSaver::new(&lexicon).save(&path).unwrap_err();
        assert!(matches!(err, DictError::FileWrite { .. }));
    }
}
