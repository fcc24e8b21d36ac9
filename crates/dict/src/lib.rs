//! Dictum - text dictionaries for greedy substitution passes
//!
//! This crate builds on `dictum-core` with everything needed to use a
//! dictionary from disk: the line-oriented text codec, a JSON interchange
//! format, and a longest-match segmenter.
//!
//! # Features
//!
//! - Text format `key\tv1 v2 ...`, BOM-tolerant on read, BOM-free on write
//! - All-or-nothing loading with line-numbered errors
//! - Deterministic, key-sorted output
//! - Greedy segmentation over any [`Dict`]
//!
//! # Example
//!
//! ```rust
//! use dictum::{DictLoader, Segmenter};
//!
//! let lexicon = DictLoader::new()
//!     .load_str("a\tX\nab\tY\n")?
//!     .freeze();
//!
//! let segments = Segmenter::new(&lexicon).segment("abz")?;
//! assert_eq!(segments[0].replacement(), "Y");
//! assert_eq!(segments[1].text(), "z");
//! # Ok::<(), dictum::DictError>(())
//! ```

// Re-export core types
pub use dictum_core::{
    utf8, Dict, DictEntry, DictError, DuplicatePolicy, Lexicon, LexiconView, Result, SortState,
    TextDict,
};

// IO/Serialization
pub mod io;
pub use io::{DictFormat, DictLoader, DictLoaderBuilder, DictSaver, LoaderConfig};

// Segmentation
pub mod segment;
pub use segment::{Segment, SegmentStats, Segmenter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod proptests;
