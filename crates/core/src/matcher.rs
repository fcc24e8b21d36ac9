//! Prefix matching over a lexicon sorted by key.
//!
//! A query truncates the text to the longest key length without splitting a
//! character, then shrinks that candidate one trailing character at a time,
//! binary-searching the lexicon for an exact key at each length.

use crate::entry::DictEntry;
use crate::error::Result;
use crate::utf8;

/// Exact key lookup by lower-bound search.
///
/// `lexicon` must be sorted by [`DictEntry::cmp_by_key`].
#[inline]
pub fn find_exact<'a>(lexicon: &'a [DictEntry], key: &[u8]) -> Option<&'a DictEntry> {
    let idx = lexicon.partition_point(|entry| entry.key().as_bytes() < key);
    lexicon
        .get(idx)
        .filter(|entry| entry.key().as_bytes() == key)
}

/// Longest entry whose key is a prefix of `text`.
///
/// Candidates are tried longest first and the first hit wins.
pub fn longest_prefix<'a>(
    lexicon: &'a [DictEntry],
    max_key_length: usize,
    text: &[u8],
) -> Result<Option<&'a DictEntry>> {
    let candidate = utf8::truncate(text, max_key_length)?;

    let mut len = candidate.len();
    while len > 0 {
        if let Some(entry) = find_exact(lexicon, &candidate[..len]) {
            tracing::trace!(key = entry.key(), "longest prefix match");
            return Ok(Some(entry));
        }
        len -= utf8::prev_char_len(candidate, len)?;
    }

    Ok(None)
}

/// Every entry whose key is a prefix of `text`, longest first.
pub fn all_prefixes<'a>(
    lexicon: &'a [DictEntry],
    max_key_length: usize,
    text: &[u8],
) -> Result<Vec<&'a DictEntry>> {
    let candidate = utf8::truncate(text, max_key_length)?;

    let mut matches = Vec::new();
    let mut len = candidate.len();
    while len > 0 {
        if let Some(entry) = find_exact(lexicon, &candidate[..len]) {
            matches.push(entry);
        }
        len -= utf8::prev_char_len(candidate, len)?;
    }

    Ok(matches)
}
