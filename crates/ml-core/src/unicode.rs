//! Character-level Unicode classification for Malayalam text.

/// First code point of the Malayalam block.
pub const MALAYALAM_START: char = '\u{0D00}';
/// Last code point of the Malayalam block.
pub const MALAYALAM_END: char = '\u{0D7F}';

pub fn is_malayalam(c: char) -> bool {
    (MALAYALAM_START..=MALAYALAM_END).contains(&c)
}

/// Characters allowed in a phonetic code: `A-Z` and `0-9`.
pub fn is_code_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// Check if a string is made only of Malayalam code points.
pub fn is_malayalam_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_malayalam)
}

/// Check if a string is a well-formed (possibly empty) phonetic code.
pub fn is_code(s: &str) -> bool {
    s.chars().all(is_code_char)
}
