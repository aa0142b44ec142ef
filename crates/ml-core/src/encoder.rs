use tracing::debug_span;

use crate::exception::correct_with;
use crate::glyphs::GlyphTables;
use crate::keys::derive;
use crate::matcher::{render, resolve};
use crate::normalize::strip_foreign;
use crate::settings::{settings, ExceptionSettings};

/// Compute `[key0, key1, key2]` for a word using the global tables and settings.
///
/// Total over all input: text without Malayalam yields three empty keys.
pub fn compute(word: &str) -> [String; 3] {
    compute_with(GlyphTables::global(), &settings().exception, word)
}

pub fn compute_with(tables: &GlyphTables, rule: &ExceptionSettings, word: &str) -> [String; 3] {
    let key2 = encode_with(tables, rule, word);
    let (key0, key1) = derive(&key2);
    [key0, key1, key2]
}

/// The narrow key (key2) alone.
pub fn encode(word: &str) -> String {
    encode_with(GlyphTables::global(), &settings().exception, word)
}

pub fn encode_with(tables: &GlyphTables, rule: &ExceptionSettings, word: &str) -> String {
    let _span = debug_span!("encode", len = word.len()).entered();
    let normalized = strip_foreign(word);
    let segments = resolve(tables, &normalized);
    correct_with(rule, &render(&segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_only_input() {
        assert_eq!(compute("hello, world 42"), ["", "", ""]);
        assert_eq!(compute(""), ["", "", ""]);
    }

    #[test]
    fn test_single_vowel() {
        assert_eq!(compute("അ"), ["A", "A", "A"]);
        assert_eq!(compute("ഐ"), ["AI", "AI", "AI"]);
    }

    #[test]
    fn test_compound_with_vowel_sign() {
        // ക്ക + ി
        assert_eq!(compute("ക്കി"), ["K", "K", "K24"]);
        // ള്ള + ു
        assert_eq!(compute("ള്ളു"), ["L", "L1", "L125"]);
    }

    #[test]
    fn test_word_final_chillu() {
        let [_, _, key2] = compute("അവൾ");
        assert!(key2.ends_with("L1"));
        assert_eq!(key2, "AVL1");
    }

    #[test]
    fn test_malayalam() {
        // മ ല യാ ളം
        assert_eq!(compute("മലയാളം"), ["MLYL3", "MLYL13", "MLYL13"]);
    }

    #[test]
    fn test_hard_and_doubled_sounds() {
        // കേ ര ളം
        assert_eq!(compute("കേരളം"), ["KRL3", "KRL13", "K6RL13"]);
        // പ ട്ട ണം
        assert_eq!(compute("പട്ടണം"), ["PTN3", "PTN13", "PT2N13"]);
    }

    #[test]
    fn test_spelling_variants_converge() {
        assert_eq!(compute("ഉത്സവം"), compute("ഉൽസവം"));
        assert_eq!(encode("ഉൽസവം"), "U0SV3");
    }

    #[test]
    fn test_foreign_characters_ignored() {
        assert_eq!(compute("(കേരളം)!"), compute("കേരളം"));
        assert_eq!(compute("kerala കേരളം"), compute("കേരളം"));
    }

    #[test]
    fn test_keys_are_not_script_input() {
        let [_, _, key2] = compute("മലയാളം");
        assert_eq!(compute(&key2), ["", "", ""]);
    }
}
