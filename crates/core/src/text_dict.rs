//! Mutable dictionary store with lazy sorting.
//!
//! Inserts append in O(1) and mark the store dirty. Any read that depends on
//! key order sorts once first, so a bulk load pays for a single sort no matter
//! how many entries it inserts. Reads take `&mut self` for that reason; call
//! [`TextDict::freeze`] to get an immutable [`Lexicon`] that can be shared.

use crate::dict::Dict;
use crate::entry::DictEntry;
use crate::error::{DictError, Result};
use crate::lexicon::{Lexicon, LexiconView};
use crate::matcher;
use ahash::AHashSet;
use compact_str::CompactString;

/// Whether the entry vector is currently in key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState {
    /// Entries were appended since the last sort
    Dirty,
    /// Entries are in ascending key order
    Sorted,
}

/// Operations that affect [`SortState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Insert,
    Sort,
    Rebuild,
}

impl SortState {
    /// State after applying `op`.
    #[inline]
    pub const fn after(self, op: StoreOp) -> Self {
        match op {
            StoreOp::Insert => SortState::Dirty,
            StoreOp::Sort | StoreOp::Rebuild => SortState::Sorted,
        }
    }
}

/// What to do when an inserted key is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail with [`DictError::DuplicateKey`] and insert nothing
    #[default]
    Reject,
    /// Keep the entry seen first and drop the later one
    KeepFirst,
}

/// Dictionary store: an unordered append log that sorts itself on demand.
///
/// `TextDict` does not implement [`Dict`] itself: the trait's reads take
/// `&self`, but a store may still need its pending sort. Call
/// [`TextDict::view`] to sort and borrow it as a `Dict`, or
/// [`TextDict::freeze`] to give it up for an owned [`Lexicon`].
#[derive(Debug, Clone)]
pub struct TextDict {
    /// Entries, in key order only when `state` is `Sorted`
    entries: Vec<DictEntry>,
    /// Keys present, for O(1) duplicate detection
    keys: AHashSet<CompactString>,
    /// Byte length of the longest key
    max_key_length: usize,
    state: SortState,
}

impl TextDict {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            keys: AHashSet::with_capacity(capacity),
            max_key_length: 0,
            state: SortState::Sorted,
        }
    }

    /// Add an entry.
    ///
    /// Fails on an empty key, an empty value list, or a key already present.
    pub fn insert(&mut self, entry: DictEntry) -> Result<()> {
        validate(&entry)?;
        if !self.keys.insert(CompactString::from(entry.key())) {
            return Err(DictError::DuplicateKey(entry.key().to_string()));
        }
        self.push(entry);
        Ok(())
    }

    /// Add a batch of entries as one unit.
    ///
    /// Every entry is checked before any is committed: on error the store is
    /// left exactly as it was. Returns how many entries were added, which is
    /// less than the batch size only under [`DuplicatePolicy::KeepFirst`].
    pub fn insert_batch(&mut self, batch: Vec<DictEntry>, policy: DuplicatePolicy) -> Result<usize> {
        let mut new_keys = AHashSet::with_capacity(batch.len());
        let mut accepted = Vec::with_capacity(batch.len());

        for entry in batch {
            validate(&entry)?;
            let key = CompactString::from(entry.key());
            if self.keys.contains(&key) || new_keys.contains(&key) {
                match policy {
                    DuplicatePolicy::Reject => return Err(DictError::DuplicateKey(key.into())),
                    DuplicatePolicy::KeepFirst => {
                        tracing::warn!(key = %key, "dropping duplicate dictionary key");
                        continue;
                    }
                }
            }
            new_keys.insert(key);
            accepted.push(entry);
        }

        let added = accepted.len();
        self.keys.extend(new_keys);
        self.entries.reserve(added);
        for entry in accepted {
            self.push(entry);
        }
        Ok(added)
    }

    fn push(&mut self, entry: DictEntry) {
        self.max_key_length = self.max_key_length.max(entry.key_len());
        self.entries.push(entry);
        self.state = self.state.after(StoreOp::Insert);
    }

    /// Sort entries by key if anything was inserted since the last sort.
    pub fn ensure_sorted(&mut self) {
        if self.state == SortState::Dirty {
            self.entries.sort_unstable_by(DictEntry::cmp_by_key);
            self.state = self.state.after(StoreOp::Sort);
            tracing::debug!(entries = self.entries.len(), "sorted lexicon");
        }
    }

    /// Byte length of the longest key, or 0 when empty. Never sorts.
    #[inline]
    pub fn key_max_length(&self) -> usize {
        self.max_key_length
    }

    /// All entries in ascending key order.
    pub fn lexicon(&mut self) -> &[DictEntry] {
        self.ensure_sorted();
        &self.entries
    }

    /// Sort if needed and borrow the store as a [`Dict`].
    pub fn view(&mut self) -> LexiconView<'_> {
        self.ensure_sorted();
        LexiconView::from_sorted(&self.entries, self.max_key_length)
    }

    /// Longest entry whose key is a prefix of `text`.
    pub fn match_prefix(&mut self, text: impl AsRef<[u8]>) -> Result<Option<&DictEntry>> {
        self.ensure_sorted();
        matcher::longest_prefix(&self.entries, self.max_key_length, text.as_ref())
    }

    /// Every entry whose key is a prefix of `text`, longest first.
    pub fn match_all_prefixes(&mut self, text: impl AsRef<[u8]>) -> Result<Vec<&DictEntry>> {
        self.ensure_sorted();
        matcher::all_prefixes(&self.entries, self.max_key_length, text.as_ref())
    }

    /// Look up an exact key.
    pub fn get(&mut self, key: &str) -> Option<&DictEntry> {
        if !self.keys.contains(key) {
            return None;
        }
        self.ensure_sorted();
        matcher::find_exact(&self.entries, key.as_bytes())
    }

    /// Check if a key is present. Never sorts.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Replace the whole store with a copy of another dictionary.
    pub fn rebuild_from<D: Dict + ?Sized>(&mut self, other: &D) {
        let entries = other.lexicon().to_vec();
        self.keys = collect_keys(&entries);
        self.entries = entries;
        self.max_key_length = other.key_max_length();
        self.state = self.state.after(StoreOp::Rebuild);
        tracing::debug!(entries = self.entries.len(), "rebuilt lexicon");
    }

    /// Sort once and hand the entries over to an immutable [`Lexicon`].
    pub fn freeze(mut self) -> Lexicon {
        self.ensure_sorted();
        Lexicon::from_sorted(self.entries, self.max_key_length)
    }

    /// Current sort state.
    #[inline]
    pub fn state(&self) -> SortState {
        self.state
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TextDict {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Lexicon> for TextDict {
    fn from(lexicon: Lexicon) -> Self {
        let (entries, max_key_length) = lexicon.into_parts();
        Self {
            keys: collect_keys(&entries),
            entries,
            max_key_length,
            state: SortState::Sorted,
        }
    }
}

fn validate(entry: &DictEntry) -> Result<()> {
    if entry.key().is_empty() {
        return Err(DictError::InvalidEntry("empty key".to_string()));
    }
    if entry.num_values() == 0 {
        return Err(DictError::InvalidEntry(format!(
            "key '{}' has no values",
            entry.key()
        )));
    }
    Ok(())
}

fn collect_keys(entries: &[DictEntry]) -> AHashSet<CompactString> {
    entries.iter().map(|e| CompactString::from(e.key())).collect()
}
