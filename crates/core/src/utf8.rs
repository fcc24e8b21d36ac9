//! UTF-8 character boundary utilities.
//!
//! Everything here works on raw bytes so that dictionary sources and query
//! text can be scanned without first validating the whole buffer. Malformed
//! sequences are reported as [`DictError::Encoding`], never guessed at as
//! single-byte characters.

use crate::error::{DictError, Result};
use std::io::{self, BufRead};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Longest UTF-8 sequence accepted.
pub const MAX_CHAR_WIDTH: usize = 4;

/// Check if a byte ends a line or the input (`\n`, `\r` or NUL).
#[inline]
pub fn is_terminator(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r' | 0)
}

/// Check if `pos` is at a terminator byte or past the end of `text`.
#[inline]
pub fn at_line_end(text: &[u8], pos: usize) -> bool {
    text.get(pos).map_or(true, |&b| is_terminator(b))
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Width in bytes of the character introduced by `lead`.
///
/// Returns `None` for continuation bytes and bytes that never start a
/// UTF-8 sequence (overlong `0xC0`/`0xC1`, and `0xF5..=0xFF`).
#[inline]
pub fn char_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Byte length of the character starting at `pos`.
pub fn next_char_len(text: &[u8], pos: usize) -> Result<usize> {
    let lead = *text
        .get(pos)
        .ok_or_else(|| DictError::encoding(pos, "unexpected end of input"))?;
    let width = char_width(lead).ok_or_else(|| DictError::encoding(pos, "invalid leading byte"))?;

    let end = pos + width;
    if end > text.len() {
        return Err(DictError::encoding(pos, "truncated character"));
    }
    if let Some(i) = text[pos + 1..end].iter().position(|&b| !is_continuation(b)) {
        return Err(DictError::encoding(pos + 1 + i, "invalid continuation byte"));
    }

    Ok(width)
}

/// Position just past the character starting at `pos`.
#[inline]
pub fn next_char_start(text: &[u8], pos: usize) -> Result<usize> {
    Ok(pos + next_char_len(text, pos)?)
}

/// Byte length of the character that ends right before `end`.
pub fn prev_char_len(text: &[u8], end: usize) -> Result<usize> {
    if end == 0 || end > text.len() {
        return Err(DictError::encoding(end, "no preceding character"));
    }

    let mut start = end - 1;
    while is_continuation(text[start]) {
        if start == 0 || end - start >= MAX_CHAR_WIDTH {
            return Err(DictError::encoding(start, "missing leading byte"));
        }
        start -= 1;
    }

    match char_width(text[start]) {
        Some(width) if width == end - start => Ok(width),
        Some(_) => Err(DictError::encoding(start, "character width mismatch")),
        None => Err(DictError::encoding(start, "invalid leading byte")),
    }
}

/// Find the first `delimiter` that starts a character.
///
/// Scanning moves one whole character at a time, so a continuation byte that
/// happens to equal `delimiter` is never reported. Stops early at a line or
/// input terminator; use [`at_line_end`] on the result to tell the cases apart.
pub fn find_next_delimiter(text: &[u8], delimiter: u8) -> Result<usize> {
    let mut pos = 0;
    while pos < text.len() {
        let byte = text[pos];
        if byte == delimiter || is_terminator(byte) {
            return Ok(pos);
        }
        pos = next_char_start(text, pos)?;
    }
    Ok(pos)
}

/// Longest prefix of `text` that fits in `max_bytes` without splitting a character.
pub fn truncate(text: &[u8], max_bytes: usize) -> Result<&[u8]> {
    // Bytes past the budget are never decoded.
    let limit = max_bytes.min(text.len());
    let mut len = 0;
    while len < limit {
        let width = next_char_len(text, len)?;
        if len + width > max_bytes {
            break;
        }
        len += width;
    }
    Ok(&text[..len])
}

/// Consume a leading byte-order mark from `reader`, if there is one.
///
/// Returns whether a mark was skipped.
pub fn skip_utf8_bom<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<bool> {
    let found = reader.fill_buf()?.starts_with(&UTF8_BOM);
    if found {
        reader.consume(UTF8_BOM.len());
    }
    Ok(found)
}

/// Slice variant of [`skip_utf8_bom`].
#[inline]
pub fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = "a\u{e9}\u{4e2d}\u{1f600}b"; // 1, 2, 3, 4, 1 bytes

    #[test]
    fn test_char_widths() {
        let bytes = MIXED.as_bytes();
        let mut pos = 0;
        let mut widths = Vec::new();
        while pos < bytes.len() {
            let w = next_char_len(bytes, pos).unwrap();
            widths.push(w);
            pos += w;
        }
        assert_eq!(widths, vec![1, 2, 3, 4, 1]);
    }

    #[test]
    fn test_prev_char_len() {
        let bytes = MIXED.as_bytes();
        assert_eq!(prev_char_len(bytes, bytes.len()).unwrap(), 1);
        assert_eq!(prev_char_len(bytes, bytes.len() - 1).unwrap(), 4);
        assert_eq!(prev_char_len(bytes, 6).unwrap(), 3);
        assert_eq!(prev_char_len(bytes, 3).unwrap(), 2);
        assert_eq!(prev_char_len(bytes, 1).unwrap(), 1);
        assert!(prev_char_len(bytes, 0).is_err());
    }

    #[test]
    fn test_prev_char_len_rejects_orphan_continuations() {
        assert!(prev_char_len(&[0x80, 0x80], 2).is_err());
        assert!(prev_char_len(&[b'a', 0x80, 0x80, 0x80, 0x80], 5).is_err());
        // 3-byte lead followed by a single continuation byte
        assert!(prev_char_len(&[0xE4, 0xB8], 2).is_err());
    }

    #[test]
    fn test_next_char_len_rejects_malformed() {
        assert!(next_char_len(&[0x80], 0).is_err());
        assert!(next_char_len(&[0xFF], 0).is_err());
        assert!(next_char_len(&[0xE4, 0xB8], 0).is_err());
        assert!(next_char_len(&[0xE4, b'a', b'b'], 0).is_err());
        assert!(next_char_len(b"", 0).is_err());
    }

    #[test]
    fn test_truncate_never_splits() {
        let bytes = MIXED.as_bytes();
        assert_eq!(truncate(bytes, 0).unwrap(), b"");
        assert_eq!(truncate(bytes, 1).unwrap(), b"a");
        assert_eq!(truncate(bytes, 2).unwrap(), b"a");
        assert_eq!(truncate(bytes, 3).unwrap(), "a\u{e9}".as_bytes());
        assert_eq!(truncate(bytes, 5).unwrap(), "a\u{e9}".as_bytes());
        assert_eq!(truncate(bytes, 6).unwrap(), "a\u{e9}\u{4e2d}".as_bytes());
        assert_eq!(truncate(bytes, 100).unwrap(), bytes);
    }

    #[test]
    fn test_truncate_reports_bad_encoding() {
        let err = truncate(&[b'a', 0xC3], 10).unwrap_err();
        assert!(matches!(err, DictError::Encoding { offset: 1, .. }));
    }

    #[test]
    fn test_truncate_ignores_bytes_past_budget() {
        assert_eq!(truncate(b"ab\xFF", 2).unwrap(), b"ab");
        assert_eq!(truncate(b"\xFF", 0).unwrap(), b"");
        assert_eq!(truncate(&[0x80, 0x80], 0).unwrap(), b"");
    }

    #[test]
    fn test_find_next_delimiter() {
        assert_eq!(find_next_delimiter(b"key\tvalue", b'\t').unwrap(), 3);
        assert_eq!(find_next_delimiter(b"a b", b' ').unwrap(), 1);
        // terminator before delimiter
        let line = b"nokey\n\tx";
        let pos = find_next_delimiter(line, b'\t').unwrap();
        assert_eq!(pos, 5);
        assert!(at_line_end(line, pos));
        // end of input
        assert_eq!(find_next_delimiter(b"abc", b'\t').unwrap(), 3);
        assert!(at_line_end(b"abc", 3));
    }

    #[test]
    fn test_find_next_delimiter_skips_continuation_bytes() {
        // U+4E2D is E4 B8 AD; 0xB8 must not be found inside it.
        let text = "\u{4e2d}x".as_bytes();
        assert_eq!(find_next_delimiter(text, 0xB8).unwrap(), 4);
    }

    #[test]
    fn test_terminators() {
        assert!(is_terminator(b'\n'));
        assert!(is_terminator(b'\r'));
        assert!(is_terminator(0));
        assert!(!is_terminator(b'\t'));
        assert!(!is_terminator(b' '));
    }

    #[test]
    fn test_skip_bom() {
        let mut with_bom: &[u8] = b"\xEF\xBB\xBFa\tb\n";
        assert!(skip_utf8_bom(&mut with_bom).unwrap());
        assert_eq!(with_bom, b"a\tb\n");

        let mut without: &[u8] = b"a\tb\n";
        assert!(!skip_utf8_bom(&mut without).unwrap());
        assert_eq!(without, b"a\tb\n");

        assert_eq!(strip_utf8_bom(b"\xEF\xBB\xBFx"), b"x");
        assert_eq!(strip_utf8_bom(b"x"), b"x");
    }
}
