//! Dictum-core - sorted prefix-matching dictionaries
//!
//! This crate provides the in-memory side of a text substitution dictionary:
//! entries mapping a key to ordered replacement candidates, a store that
//! sorts itself lazily, and longest-prefix / all-prefixes queries that never
//! split a multi-byte character.
//!
//! # Features
//!
//! - `TextDict`: O(1) inserts, one sort before the first ordered read
//! - `Lexicon`: frozen, immutable form with `&self` queries
//! - `Dict` trait: the capability other backends implement; a `TextDict`
//!   takes part through the borrowed [`LexiconView`] from `TextDict::view`
//! - UTF-8 boundary helpers that report malformed input instead of guessing
//!
//! # Example
//!
//! ```rust
//! use dictum_core::{DictEntry, TextDict};
//!
//! let mut dict = TextDict::new();
//! dict.insert(DictEntry::with_values("a", ["X"]))?;
//! dict.insert(DictEntry::with_values("ab", ["Y"]))?;
//!
//! let hit = dict.match_prefix("abc")?.unwrap();
//! assert_eq!(hit.key(), "ab");
//! # Ok::<(), dictum_core::DictError>(())
//! ```
//!
//! # Threads
//!
//! `TextDict` is single-threaded by construction: its reads take `&mut self`.
//! Share a frozen [`Lexicon`] (for example behind an `Arc`) instead, or guard
//! the `TextDict` with a single lock.

pub mod error;
pub use error::{DictError, Result};

pub mod entry;
pub use entry::DictEntry;

pub mod utf8;

pub mod matcher;

pub mod dict;
pub use dict::Dict;

pub mod lexicon;
pub use lexicon::{Lexicon, LexiconView};

pub mod text_dict;
pub use text_dict::{DuplicatePolicy, SortState, StoreOp, TextDict};

#[cfg(test)]
mod proptests;
