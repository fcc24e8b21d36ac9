//! Greedy longest-match segmentation.
//!
//! This module walks a text left to right and splits it at dictionary keys,
//! always taking the longest key that matches at the current position.
//! Characters no key covers are passed through as unmatched segments.

use dictum_core::{utf8, Dict, DictEntry, Result};

/// One piece of a segmented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text equal to a dictionary key
    Matched {
        text: &'a str,
        entry: &'a DictEntry,
    },
    /// A run of characters no key starts with
    Unmatched(&'a str),
}

impl<'a> Segment<'a> {
    /// The covered slice of the input.
    #[inline]
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Matched { text, .. } => text,
            Segment::Unmatched(text) => text,
        }
    }

    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Segment::Matched { .. })
    }

    /// Preferred candidate for matched segments, the input slice otherwise.
    pub fn replacement(&self) -> &'a str {
        match *self {
            Segment::Matched { text, entry } => entry.first_value().unwrap_or(text),
            Segment::Unmatched(text) => text,
        }
    }
}

/// Counts over a segmentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    pub matched_segments: usize,
    pub unmatched_segments: usize,
    pub matched_bytes: usize,
    pub unmatched_bytes: usize,
}

impl SegmentStats {
    /// Tally a list of segments.
    pub fn from_segments(segments: &[Segment<'_>]) -> Self {
        segments.iter().fold(Self::default(), |mut stats, seg| {
            if seg.is_matched() {
                stats.matched_segments += 1;
                stats.matched_bytes += seg.text().len();
            } else {
                stats.unmatched_segments += 1;
                stats.unmatched_bytes += seg.text().len();
            }
            stats
        })
    }

    /// Fraction of input bytes covered by dictionary keys.
    pub fn coverage(&self) -> f64 {
        let total = self.matched_bytes + self.unmatched_bytes;
        if total == 0 {
            0.0
        } else {
            self.matched_bytes as f64 / total as f64
        }
    }
}

/// Longest-match segmenter over any [`Dict`].
pub struct Segmenter<'d, D: Dict + ?Sized> {
    dict: &'d D,
}

impl<'d, D: Dict + ?Sized> Segmenter<'d, D> {
    /// Create a segmenter borrowing `dict`.
    pub fn new(dict: &'d D) -> Self {
        Self { dict }
    }

    /// Split `text` into matched and unmatched segments.
    ///
    /// Concatenating the segment texts gives back `text` exactly.
    pub fn segment<'a>(&self, text: &'a str) -> Result<Vec<Segment<'a>>>
    where
        'd: 'a,
    {
        let dict: &'d D = self.dict;
        let bytes = text.as_bytes();

        let mut segments = Vec::new();
        let mut unmatched_from: Option<usize> = None;
        let mut pos = 0;

        while pos < bytes.len() {
            match dict.match_prefix(&bytes[pos..])? {
                Some(entry) => {
                    if let Some(start) = unmatched_from.take() {
                        segments.push(Segment::Unmatched(&text[start..pos]));
                    }
                    let end = pos + entry.key_len();
                    segments.push(Segment::Matched {
                        text: &text[pos..end],
                        entry,
                    });
                    pos = end;
                }
                None => {
                    unmatched_from.get_or_insert(pos);
                    pos = utf8::next_char_start(bytes, pos)?;
                }
            }
        }

        if let Some(start) = unmatched_from {
            segments.push(Segment::Unmatched(&text[start..]));
        }

        tracing::trace!(segments = segments.len(), bytes = bytes.len(), "segmented text");
        Ok(segments)
    }
}
