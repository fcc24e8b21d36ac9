//! Serialization and deserialization for dictionaries.
//!
//! This module provides loading and saving in the line-oriented text format
//! and in a JSON interchange format.

pub mod format;
pub mod load;
pub mod save;

pub use format::{DictFormat, SerializedDict};
pub use load::{parse_entry, DictLoader, DictLoaderBuilder, LoaderConfig};
pub use save::DictSaver;
