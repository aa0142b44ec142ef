//! Word-list input for the batch commands.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("no words in {0}")]
    Empty(String),
}

/// One word per line; blank lines and `#` comments are skipped.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn read_words_file(path: &Path) -> Result<Vec<String>, InputError> {
    let words = parse_words(&fs::read_to_string(path)?);
    if words.is_empty() {
        return Err(InputError::Empty(path.display().to_string()));
    }
    Ok(words)
}

pub fn read_words_stdin() -> Result<Vec<String>, InputError> {
    let mut words = Vec::new();
    for line in io::stdin().lock().lines() {
        words.extend(parse_words(&line?));
    }
    if words.is_empty() {
        return Err(InputError::Empty("stdin".to_string()));
    }
    Ok(words)
}
