//! The dictionary capability shared by all backends.

use crate::entry::DictEntry;
use crate::error::Result;
use crate::matcher;

/// A read-only dictionary sorted by key.
///
/// Implementors only supply the sorted lexicon and the longest key length;
/// prefix queries come for free. Any `Dict` can seed
/// [`TextDict::rebuild_from`](crate::TextDict::rebuild_from).
pub trait Dict {
    /// Byte length of the longest key, or 0 when empty.
    fn key_max_length(&self) -> usize;

    /// All entries in ascending key order.
    fn lexicon(&self) -> &[DictEntry];

    /// Longest entry whose key is a prefix of `text`.
    fn match_prefix(&self, text: &[u8]) -> Result<Option<&DictEntry>> {
        matcher::longest_prefix(self.lexicon(), self.key_max_length(), text)
    }

    /// Every entry whose key is a prefix of `text`, longest first.
    fn match_all_prefixes(&self, text: &[u8]) -> Result<Vec<&DictEntry>> {
        matcher::all_prefixes(self.lexicon(), self.key_max_length(), text)
    }

    /// Number of entries.
    fn len(&self) -> usize {
        self.lexicon().len()
    }

    fn is_empty(&self) -> bool {
        self.lexicon().is_empty()
    }
}
