//! CLI commands for the dictum tool.

pub mod benchmark;
pub mod export;
pub mod lookup;
pub mod segment;
pub mod sort;

pub use benchmark::BenchmarkCommand;
pub use export::ExportCommand;
pub use lookup::LookupCommand;
pub use segment::SegmentCommand;
pub use sort::SortCommand;

use anyhow::{Context, Result as AnyhowResult};
use dictum::{DictEntry, DictFormat, DictLoader, DuplicatePolicy, Lexicon};
use std::path::Path;

/// Load a dictionary file, guessing the format from its extension.
pub fn load_lexicon(path: &Path, keep_first: bool) -> AnyhowResult<Lexicon> {
    let policy = if keep_first {
        DuplicatePolicy::KeepFirst
    } else {
        DuplicatePolicy::Reject
    };

    let loader = DictLoader::builder()
        .format(DictFormat::from_path(path))
        .duplicates(policy)
        .build();

    let dict = loader
        .load(path)
        .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
    Ok(dict.freeze())
}

/// Render an entry as a text-format line, without the line ending.
pub fn format_entry(entry: &DictEntry) -> String {
    let values: Vec<&str> = entry.values().iter().map(|v| v.as_str()).collect();
    format!("{}\t{}", entry.key(), values.join(" "))
}

/// Read text from the argument, or from stdin when it is "-".
pub fn read_input(input: &str) -> AnyhowResult<String> {
    if input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(input.to_string())
    }
}
