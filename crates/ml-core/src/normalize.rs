//! Input and output cleanup around grapheme matching.

use crate::unicode::{is_code_char, is_malayalam};

/// Remove every code point outside the Malayalam block, then trim.
///
/// Never fails: text with no Malayalam content yields an empty string.
pub fn strip_foreign(text: &str) -> String {
    let kept: String = text.chars().filter(|&c| is_malayalam(c)).collect();
    kept.trim().to_string()
}

/// Remove everything that is not `A-Z` or `0-9`.
///
/// Runs after matching, so it also drops script fragments no table recognised.
pub fn strip_scaffolding(text: &str) -> String {
    text.chars().filter(|&c| is_code_char(c)).collect()
}
