//! Immutable sorted lexicon.
//!
//! A `Lexicon` is what a [`TextDict`](crate::TextDict) becomes once loading
//! is finished: entries sorted once, queries through `&self`, safe to share
//! between threads behind an `Arc`.

use crate::dict::Dict;
use crate::entry::DictEntry;

/// Finalized, query-only dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<DictEntry>,
    max_key_length: usize,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries already sorted and free of duplicate keys.
    pub(crate) fn from_sorted(entries: Vec<DictEntry>, max_key_length: usize) -> Self {
        debug_assert!(entries
            .windows(2)
            .all(|w| w[0].cmp_by_key(&w[1]).is_lt()));
        debug_assert_eq!(
            max_key_length,
            entries.iter().map(DictEntry::key_len).max().unwrap_or(0)
        );
        Self {
            entries,
            max_key_length,
        }
    }

    /// Look up an exact key.
    pub fn get(&self, key: &str) -> Option<&DictEntry> {
        crate::matcher::find_exact(&self.entries, key.as_bytes())
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> std::slice::Iter<'_, DictEntry> {
        self.entries.iter()
    }

    pub(crate) fn into_parts(self) -> (Vec<DictEntry>, usize) {
        (self.entries, self.max_key_length)
    }
}

impl Dict for Lexicon {
    #[inline]
    fn key_max_length(&self) -> usize {
        self.max_key_length
    }

    #[inline]
    fn lexicon(&self) -> &[DictEntry] {
        &self.entries
    }
}

/// Borrowed [`Dict`] over a store that has already been sorted.
///
/// Obtained from [`TextDict::view`](crate::TextDict::view). The borrow keeps
/// the store from being modified, so the view can never go stale.
#[derive(Debug, Clone, Copy)]
pub struct LexiconView<'a> {
    entries: &'a [DictEntry],
    max_key_length: usize,
}

impl<'a> LexiconView<'a> {
    pub(crate) fn from_sorted(entries: &'a [DictEntry], max_key_length: usize) -> Self {
        debug_assert!(entries
            .windows(2)
            .all(|w| w[0].cmp_by_key(&w[1]).is_lt()));
        Self {
            entries,
            max_key_length,
        }
    }

    /// Look up an exact key.
    pub fn get(&self, key: &str) -> Option<&'a DictEntry> {
        crate::matcher::find_exact(self.entries, key.as_bytes())
    }
}

impl Dict for LexiconView<'_> {
    #[inline]
    fn key_max_length(&self) -> usize {
        self.max_key_length
    }

    #[inline]
    fn lexicon(&self) -> &[DictEntry] {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a DictEntry;
    type IntoIter = std::slice::Iter<'a, DictEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
