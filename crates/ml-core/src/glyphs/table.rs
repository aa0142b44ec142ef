use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::config::{parse_glyph_toml, GlyphConfig, GlyphConfigError};
use super::DEFAULT_GLYPHS_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// One grapheme sequence and the code it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEntry {
    pub grapheme: String,
    pub code: String,
}

/// A single mapping table, ordered longest grapheme first so the first
/// prefix hit during a scan is the longest one.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    entries: Vec<GlyphEntry>,
}

impl GlyphTable {
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut entries: Vec<GlyphEntry> = map
            .iter()
            .map(|(grapheme, code)| GlyphEntry {
                grapheme: grapheme.clone(),
                code: code.clone(),
            })
            .collect();
        // Stable sort keeps BTreeMap order among equal lengths.
        entries.sort_by_key(|e| Reverse(e.grapheme.chars().count()));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlyphEntry> {
        self.entries.iter()
    }

    /// Exact lookup of a grapheme's code.
    pub fn get(&self, grapheme: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.grapheme == grapheme)
            .map(|e| e.code.as_str())
    }

    /// Every entry whose grapheme is a prefix of `text`, longest first.
    pub fn prefixes<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a GlyphEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| text.starts_with(e.grapheme.as_str()))
    }

    /// The longest entry whose grapheme is a prefix of `text`.
    pub fn longest_prefix<'a>(&'a self, text: &'a str) -> Option<&'a GlyphEntry> {
        self.prefixes(text).next()
    }
}

/// The five tables consulted by the grapheme matcher.
#[derive(Debug, Clone)]
pub struct GlyphTables {
    pub vowels: GlyphTable,
    pub consonants: GlyphTable,
    pub chillus: GlyphTable,
    pub compounds: GlyphTable,
    pub modifiers: GlyphTable,
}

impl GlyphTables {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), GlyphConfigError> {
        // Validate eagerly
        parse_glyph_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| GlyphConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlyphTables {
        static INSTANCE: OnceLock<GlyphTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_GLYPHS_TOML);
            Self::from_toml(toml_str).expect("glyph TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, GlyphConfigError> {
        parse_glyph_toml(toml_str).map(|config| Self::from_config(&config))
    }

    pub fn from_config(config: &GlyphConfig) -> Self {
        Self {
            vowels: GlyphTable::from_map(&config.vowels),
            consonants: GlyphTable::from_map(&config.consonants),
            chillus: GlyphTable::from_map(&config.chillus),
            compounds: GlyphTable::from_map(&config.compounds),
            modifiers: GlyphTable::from_map(&config.modifiers),
        }
    }
}
