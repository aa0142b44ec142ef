//! Property-based tests for the key pipeline.
//!
//! Generates words from Malayalam graphemes mixed with foreign characters and
//! checks the invariants every key triple must satisfy.

use proptest::prelude::*;

use crate::compute;
use crate::keys::{BROAD_DROPPED, MEDIUM_DROPPED};
use crate::normalize::strip_foreign;
use crate::unicode::is_code_char;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_malayalam_char() -> impl Strategy<Value = char> {
    prop_oneof![
        // Consonants and vowels dominate, as in real words.
        6 => prop::sample::select(vec![
            'ക', 'ഗ', 'ങ', 'ച', 'ജ', 'ഞ', 'ട', 'ണ', 'ത', 'ദ', 'ധ', 'ന', 'പ', 'ബ',
            'മ', 'യ', 'ര', 'ല', 'വ', 'ശ', 'ഷ', 'സ', 'ഹ', 'ള', 'ഴ', 'റ',
            'അ', 'ആ', 'ഇ', 'ഉ', 'എ', 'ഐ', 'ഒ', 'ഔ',
        ]),
        4 => prop::sample::select(vec![
            'ാ', 'ി', 'ീ', 'ു', 'ൂ', 'ൃ', 'െ', 'േ', 'ൈ', 'ൊ', 'ോ', 'ൌ', 'ൗ', 'ം', 'ഃ', '്',
        ]),
        1 => prop::sample::select(vec!['ൽ', 'ൾ', 'ൺ', 'ൻ', 'ർ', 'ൿ']),
        // Unmapped code points inside the block.
        1 => (0x0D00u32..=0x0D7F).prop_map(|c| char::from_u32(c).unwrap_or('ക')),
    ]
}

fn arb_foreign_char() -> impl Strategy<Value = char> {
    prop_oneof![
        Just(' '),
        Just('-'),
        Just('{'),
        Just('}'),
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        prop::char::range('\u{0900}', '\u{097F}'),
    ]
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![8 => arb_malayalam_char(), 1 => arb_foreign_char()],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// `filter` removes exactly the `dropped` chars from `full`, in order.
fn is_filter_of(filter: &str, full: &str, dropped: &[char]) -> bool {
    let expected: String = full.chars().filter(|c| !dropped.contains(c)).collect();
    expected == filter
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn deterministic(word in arb_word()) {
        prop_assert_eq!(compute(&word), compute(&word));
    }

    #[test]
    fn keys_are_code_chars(word in arb_word()) {
        for key in compute(&word) {
            prop_assert!(key.chars().all(is_code_char), "key={}", key);
        }
    }

    #[test]
    fn information_loss_is_monotonic(word in arb_word()) {
        let [key0, key1, key2] = compute(&word);
        prop_assert!(is_filter_of(&key1, &key2, &MEDIUM_DROPPED));
        prop_assert!(is_filter_of(&key0, &key2, &BROAD_DROPPED));
        prop_assert!(is_filter_of(&key0, &key1, &['1']));
    }

    #[test]
    fn foreign_characters_do_not_matter(word in arb_word()) {
        prop_assert_eq!(compute(&word), compute(&strip_foreign(&word)));
    }

    #[test]
    fn strip_foreign_idempotent(word in arb_word()) {
        let once = strip_foreign(&word);
        prop_assert_eq!(strip_foreign(&once), once.clone());
    }

    #[test]
    fn anuswaram_survives(word in arb_word()) {
        let [key0, key1, key2] = compute(&word);
        let count = |k: &str| k.matches('3').count();
        prop_assert_eq!(count(key0.as_str()), count(key2.as_str()));
        prop_assert_eq!(count(key1.as_str()), count(key2.as_str()));
    }

    #[test]
    fn keys_are_not_reencoded(word in arb_word()) {
        let [_, _, key2] = compute(&word);
        prop_assert_eq!(compute(&key2), [String::new(), String::new(), String::new()]);
    }

    #[test]
    fn compounds_never_fragment(prefix in "[അആഇഉ]{0,2}") {
        let word = format!("{prefix}ക്ക");
        let [_, _, key2] = compute(&word);
        prop_assert!(key2.ends_with("K2"), "key2={}", key2);
    }
}
