use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

/// Characters of every UTF-8 width, 1 through 4 bytes.
fn mixed_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'a', 'b', 'z', '\u{e9}', '\u{df}', '\u{4e2d}', '\u{6587}', '\u{1f600}', '\u{1f4a9}',
    ])
}

fn word(max_chars: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(mixed_char(), 1..=max_chars).prop_map(|cs| cs.into_iter().collect())
}

fn keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(4), 0..40)
}

fn build(keys: &[String]) -> TextDict {
    let mut dict = TextDict::new();
    for key in keys {
        // Duplicates are rejected; the first occurrence stays.
        let _ = dict.insert(DictEntry::with_values(key.as_str(), ["v"]));
    }
    dict
}

proptest! {
    #[test]
    fn prop_lexicon_sorted_after_inserts(keys in keys()) {
        let mut dict = build(&keys);
        let lexicon = dict.lexicon();
        prop_assert!(lexicon.windows(2).all(|w| w[0].key() < w[1].key()));
        prop_assert_eq!(lexicon.len(), keys.iter().collect::<BTreeSet<_>>().len());
    }

    #[test]
    fn prop_key_max_length_tracks_inserts(keys in keys()) {
        let dict = build(&keys);
        let expected = keys.iter().map(String::len).max().unwrap_or(0);
        prop_assert_eq!(dict.key_max_length(), expected);
        prop_assert_eq!(dict.freeze().key_max_length(), expected);
    }

    #[test]
    fn prop_truncate_lands_on_boundary(text in word(12), max in 0usize..40) {
        let cut = utf8::truncate(text.as_bytes(), max).unwrap();
        prop_assert!(cut.len() <= max);
        prop_assert!(text.is_char_boundary(cut.len()));
        if let Some(next) = text[cut.len()..].chars().next() {
            prop_assert!(cut.len() + next.len_utf8() > max);
        }
    }

    #[test]
    fn prop_prev_char_len_walks_chars(text in word(12)) {
        let bytes = text.as_bytes();
        let expected: Vec<usize> = text.chars().rev().map(char::len_utf8).collect();

        let mut widths = Vec::new();
        let mut end = bytes.len();
        while end > 0 {
            let width = utf8::prev_char_len(bytes, end).unwrap();
            widths.push(width);
            end -= width;
        }
        prop_assert_eq!(widths, expected);
    }

    #[test]
    fn prop_prefix_queries_match_brute_force(keys in keys(), text in word(8)) {
        let mut dict = build(&keys);

        let mut expected: Vec<&String> = keys
            .iter()
            .filter(|k| text.starts_with(k.as_str()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        expected.sort_by_key(|k| std::cmp::Reverse(k.len()));

        let longest = dict.match_prefix(&text).unwrap().map(|e| e.key().to_string());
        prop_assert_eq!(longest.as_ref(), expected.first().copied());

        let all: Vec<String> = dict
            .match_all_prefixes(&text)
            .unwrap()
            .into_iter()
            .map(|e| e.key().to_string())
            .collect();
        let expected: Vec<String> = expected.into_iter().cloned().collect();
        prop_assert_eq!(all, expected);
    }
}
