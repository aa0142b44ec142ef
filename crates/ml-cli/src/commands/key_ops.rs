use std::path::Path;
use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use mlphone::{compute, KeyLevel, PhoneticIndex, PhoneticKeys};

use crate::input::{read_words_file, read_words_stdin};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// One output record of `keys --json`.
#[derive(Debug, Serialize)]
pub struct KeyRecord<'a> {
    pub word: &'a str,
    #[serde(flatten)]
    pub keys: PhoneticKeys,
}

/// Pad `s` with spaces to `width` terminal columns.
pub fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Tab-separated rows: `word<TAB>key0<TAB>key1<TAB>key2`. Empty keys stay
/// as empty fields so every row has four columns.
pub fn format_key_rows(rows: &[(String, PhoneticKeys)]) -> Vec<String> {
    rows.iter()
        .map(|(word, k)| format!("{word}\t{}\t{}\t{}", k.key0, k.key1, k.key2))
        .collect()
}

/// Space-padded columns aligned by terminal width, for reading by eye.
pub fn format_aligned_rows(rows: &[(String, PhoneticKeys)]) -> Vec<String> {
    let word_w = rows
        .iter()
        .map(|(w, _)| UnicodeWidthStr::width(w.as_str()))
        .max()
        .unwrap_or(0);
    let k0_w = rows.iter().map(|(_, k)| k.key0.len()).max().unwrap_or(0);
    let k1_w = rows.iter().map(|(_, k)| k.key1.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(word, k)| {
            format!(
                "{}  {}  {}  {}",
                pad(word, word_w),
                pad(&k.key0, k0_w),
                pad(&k.key1, k1_w),
                k.key2
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

pub fn keys_cmd(words: &[String], json: bool, align: bool) {
    let words = if words.is_empty() {
        die!(read_words_stdin(), "Error reading stdin: {}")
    } else {
        words.to_vec()
    };
    let rows: Vec<(String, PhoneticKeys)> = words
        .into_iter()
        .map(|w| {
            let keys = compute(&w);
            (w, keys)
        })
        .collect();

    if json {
        for (word, keys) in &rows {
            let record = KeyRecord {
                word,
                keys: keys.clone(),
            };
            println!("{}", die!(serde_json::to_string(&record), "Error: {}"));
        }
    } else {
        let lines = if align {
            format_aligned_rows(&rows)
        } else {
            format_key_rows(&rows)
        };
        for line in lines {
            println!("{line}");
        }
    }
}

pub fn group_cmd(file: &str, level: KeyLevel, min_size: usize, json: bool) {
    let words = die!(read_words_file(Path::new(file)), "Error reading {file}: {}");
    let mut index = PhoneticIndex::new(level);
    index.extend(&words);
    let clusters = index.clusters(min_size);

    if json {
        for group in &clusters {
            println!("{}", die!(serde_json::to_string(group), "Error: {}"));
        }
        return;
    }

    let key_w = clusters.iter().map(|g| g.key.len()).max().unwrap_or(0);
    for group in &clusters {
        println!("{}  {}", pad(&group.key, key_w), group.words.join(", "));
    }
    eprintln!(
        "{} words, {} keys ({level}), {} groups shown",
        index.len(),
        index.key_count(),
        clusters.len()
    );
}

pub fn explain_cmd(word: &str, json: bool) {
    let result = mlphone::api::explain(word);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&result), "Error: {}")
        );
    } else {
        print!("{}", result.to_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("AB", 4), "AB  ");
        assert_eq!(pad("ABCDE", 4), "ABCDE");
        let word = "കടൽ";
        let padded = pad(word, UnicodeWidthStr::width(word) + 2);
        assert!(padded.ends_with("  "));
    }

    fn rows(words: &[&str]) -> Vec<(String, PhoneticKeys)> {
        words.iter().map(|w| (w.to_string(), compute(w))).collect()
    }

    #[test]
    fn test_format_key_rows() {
        let lines = format_key_rows(&rows(&["കേരളം", "അ"]));
        assert_eq!(lines, vec!["കേരളം\tKRL3\tKRL13\tK6RL13", "അ\tA\tA\tA"]);
    }

    #[test]
    fn test_format_key_rows_keeps_empty_fields() {
        let lines = format_key_rows(&rows(&["ി", "hello"]));
        assert_eq!(lines, vec!["ി\t\t\t4", "hello\t\t\t"]);
        assert!(lines.iter().all(|l| l.split('\t').count() == 4));
    }

    #[test]
    fn test_format_aligned_rows() {
        let lines = format_aligned_rows(&rows(&["കേരളം", "അ"]));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("കേരളം"));
        assert!(lines[0].ends_with("KRL3  KRL13  K6RL13"));
        assert!(!lines[0].contains('\t'));
        assert!(lines[1].ends_with("A"));
    }

    #[test]
    fn test_key_record_json() {
        let record = KeyRecord {
            word: "അ",
            keys: compute("അ"),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"word":"അ","key0":"A","key1":"A","key2":"A"}"#);
    }
}
