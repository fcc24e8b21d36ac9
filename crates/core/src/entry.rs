//! Dictionary entries.
//!
//! An entry is a key with an ordered list of replacement candidates. The
//! first value is the preferred candidate and later values are alternates.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A key with its ordered replacement candidates.
///
/// Entries are ordered by key alone, byte-wise (see [`DictEntry::cmp_by_key`]).
/// Equality compares both key and values. Once an entry is handed to a store
/// it is only reachable through shared references, so its values are frozen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DictEntry {
    key: CompactString,
    values: Vec<CompactString>,
}

impl DictEntry {
    /// Create an entry with no values yet.
    pub fn new(key: impl Into<CompactString>) -> Self {
        Self {
            key: key.into(),
            values: Vec::new(),
        }
    }

    /// Create an entry from a key and its candidates, in preference order.
    pub fn with_values<I, V>(key: impl Into<CompactString>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CompactString>,
    {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a candidate after the existing ones.
    pub fn push_value(&mut self, value: impl Into<CompactString>) {
        self.values.push(value.into());
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key length in bytes.
    #[inline]
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// All candidates in preference order.
    #[inline]
    pub fn values(&self) -> &[CompactString] {
        &self.values
    }

    /// The preferred candidate, if any.
    #[inline]
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(|v| v.as_str())
    }

    /// Number of candidates.
    #[inline]
    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    /// Storage and search order: byte-wise comparison of keys.
    #[inline]
    pub fn cmp_by_key(&self, other: &Self) -> Ordering {
        self.key.as_bytes().cmp(other.key.as_bytes())
    }

    /// Split into key and values.
    pub fn into_parts(self) -> (CompactString, Vec<CompactString>) {
        (self.key, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_keep_order() {
        let mut entry = DictEntry::new("干");
        entry.push_value("幹");
        entry.push_value("乾");
        entry.push_value("干");

        assert_eq!(entry.key(), "干");
        assert_eq!(entry.key_len(), 3);
        assert_eq!(entry.first_value(), Some("幹"));
        assert_eq!(entry.values(), &["幹", "乾", "干"]);
    }

    #[test]
    fn test_order_is_by_key_only() {
        let a = DictEntry::with_values("ab", ["z"]);
        let b = DictEntry::with_values("b", ["a"]);
        let a2 = DictEntry::with_values("ab", ["y"]);

        assert_eq!(a.cmp_by_key(&b), Ordering::Less);
        assert_eq!(a.cmp_by_key(&a2), Ordering::Equal);
        assert_ne!(a, a2);
    }

    #[test]
    fn test_byte_order_matches_utf8() {
        // U+FF21 (3 bytes) sorts after U+00E9 (2 bytes) byte-wise and by code point.
        let wide = DictEntry::new("Ａ");
        let accented = DictEntry::new("é");
        assert_eq!(accented.cmp_by_key(&wide), Ordering::Less);
    }

    #[test]
    fn test_empty_entry() {
        let entry = DictEntry::new("key");
        assert_eq!(entry.num_values(), 0);
        assert_eq!(entry.first_value(), None);
    }
}
