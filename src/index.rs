//! Word index grouped by phonetic key.
//!
//! Words are bucketed under their key at one [`KeyLevel`]; every bucket with
//! more than one word is a set of near-duplicates.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::api::{compute, KeyLevel};

/// Words sharing one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneticGroup {
    pub key: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PhoneticIndex {
    level: KeyLevel,
    groups: BTreeMap<String, Vec<String>>,
    words: usize,
}

impl PhoneticIndex {
    pub fn new(level: KeyLevel) -> Self {
        Self {
            level,
            groups: BTreeMap::new(),
            words: 0,
        }
    }

    pub fn level(&self) -> KeyLevel {
        self.level
    }

    /// Register a word. Returns `true` if newly added, `false` if it was
    /// already present or has an empty key at the index level.
    pub fn register(&mut self, word: &str) -> bool {
        let keys = compute(word);
        let key = keys.key(self.level);
        if key.is_empty() {
            debug!(word, level = %self.level, "skipped word without key");
            return false;
        }
        let words = self.groups.entry(key.to_string()).or_default();
        if words.iter().any(|w| w == word) {
            return false;
        }
        words.push(word.to_string());
        self.words += 1;
        true
    }

    /// Unregister a word. Returns `true` if removed, `false` if not found.
    pub fn unregister(&mut self, word: &str) -> bool {
        let key = compute(word).key(self.level).to_string();
        let Some(words) = self.groups.get_mut(&key) else {
            return false;
        };
        let before = words.len();
        words.retain(|w| w != word);
        let removed = words.len() < before;
        if words.is_empty() {
            self.groups.remove(&key);
        }
        if removed {
            self.words -= 1;
        }
        removed
    }

    /// Registered words that share `word`'s key, in insertion order.
    /// `word` itself need not be registered.
    pub fn lookup(&self, word: &str) -> &[String] {
        let keys = compute(word);
        let key = keys.key(self.level);
        if key.is_empty() {
            return &[];
        }
        self.groups
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All groups ordered by key.
    pub fn groups(&self) -> impl Iterator<Item = PhoneticGroup> + '_ {
        self.groups.iter().map(|(key, words)| PhoneticGroup {
            key: key.clone(),
            words: words.clone(),
        })
    }

    /// Groups with at least `min_size` words, largest first.
    pub fn clusters(&self, min_size: usize) -> Vec<PhoneticGroup> {
        let mut result: Vec<PhoneticGroup> =
            self.groups().filter(|g| g.words.len() >= min_size).collect();
        result.sort_by(|a, b| b.words.len().cmp(&a.words.len()).then(a.key.cmp(&b.key)));
        result
    }

    /// Number of registered words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.groups.len()
    }
}

impl<S: AsRef<str>> Extend<S> for PhoneticIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.register(word.as_ref());
        }
    }
}
