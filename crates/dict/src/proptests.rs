use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

fn mixed_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'a', 'b', 'q', '\u{e9}', '\u{3b1}', '\u{4e2d}', '\u{6587}', '\u{5e72}', '\u{1f600}',
    ])
}

fn word(max_chars: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(mixed_char(), 1..=max_chars).prop_map(|cs| cs.into_iter().collect())
}

/// Unique keys, each with 1-4 candidates.
fn entries() -> impl Strategy<Value = BTreeMap<String, Vec<String>>> {
    prop::collection::btree_map(word(4), prop::collection::vec(word(3), 1..5), 0..30)
}

fn build(entries: &BTreeMap<String, Vec<String>>) -> TextDict {
    let mut dict = TextDict::new();
    // Insert in reverse so the store starts out of order.
    for (key, values) in entries.iter().rev() {
        dict.insert(DictEntry::with_values(key.as_str(), values.iter().map(String::as_str)))
            .unwrap();
    }
    dict
}

proptest! {
    #[test]
    fn prop_text_roundtrip(entries in entries()) {
        let mut dict = build(&entries);
        let text = DictSaver::from_text_dict(&mut dict).to_text().unwrap();

        let mut reloaded = DictLoader::new().load_str(&text).unwrap();
        prop_assert_eq!(reloaded.lexicon(), dict.lexicon());
        prop_assert_eq!(reloaded.key_max_length(), dict.key_max_length());

        // Serializing again is byte-identical.
        let again = DictSaver::from_text_dict(&mut reloaded).to_text().unwrap();
        prop_assert_eq!(again, text);
    }

    #[test]
    fn prop_json_roundtrip(entries in entries()) {
        let lexicon = build(&entries).freeze();
        let mut out = Vec::new();
        DictSaver::new(&lexicon).format(DictFormat::Json).write_to(&mut out).unwrap();

        let mut reloaded = TextDict::new();
        let added = DictLoader::builder()
            .format(DictFormat::Json)
            .build()
            .load_from_reader(&mut reloaded, &out[..])
            .unwrap();
        prop_assert_eq!(added, lexicon.len());
        prop_assert_eq!(reloaded.key_max_length(), lexicon.key_max_length());
        prop_assert_eq!(reloaded.lexicon(), lexicon.lexicon());
    }

    #[test]
    fn prop_segments_cover_input(entries in entries(), text in prop::collection::vec(word(3), 0..6)) {
        let lexicon = build(&entries).freeze();
        let text: String = text.concat();

        let segments = Segmenter::new(&lexicon).segment(&text).unwrap();
        let joined: String = segments.iter().map(Segment::text).collect();
        prop_assert_eq!(joined, text.clone());

        for pair in segments.windows(2) {
            prop_assert!(pair[0].is_matched() || pair[1].is_matched());
        }
        for seg in &segments {
            if let Segment::Matched { text, entry } = seg {
                prop_assert_eq!(*text, entry.key());
            }
        }
    }
}
