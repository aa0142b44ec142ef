use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::{is_code, is_malayalam_text};

/// Raw table contents as read from TOML, before indexing for matching.
#[derive(Debug, Clone, Deserialize)]
pub struct GlyphConfig {
    pub vowels: BTreeMap<String, String>,
    pub consonants: BTreeMap<String, String>,
    pub chillus: BTreeMap<String, String>,
    pub compounds: BTreeMap<String, String>,
    pub modifiers: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("[{table}] grapheme is not Malayalam: {grapheme:?}")]
    InvalidGrapheme {
        table: &'static str,
        grapheme: String,
    },
    #[error("[{table}] invalid code {code:?} for {grapheme}")]
    InvalidCode {
        table: &'static str,
        grapheme: String,
        code: String,
    },
    #[error("[{table}] empty code for {grapheme}")]
    EmptyCode {
        table: &'static str,
        grapheme: String,
    },
    #[error("{grapheme} appears in both [consonants] and [vowels]")]
    Overlap { grapheme: String },
    #[error("glyph tables already initialized")]
    AlreadyInitialized,
}

/// Parse and validate glyph table TOML.
pub fn parse_glyph_toml(toml_str: &str) -> Result<GlyphConfig, GlyphConfigError> {
    let config: GlyphConfig =
        toml::from_str(toml_str).map_err(|e| GlyphConfigError::Parse(e.to_string()))?;

    validate_table("vowels", &config.vowels, false)?;
    validate_table("consonants", &config.consonants, false)?;
    validate_table("chillus", &config.chillus, false)?;
    validate_table("compounds", &config.compounds, false)?;
    validate_table("modifiers", &config.modifiers, true)?;

    // Consonants and vowels are searched together when a modifier trails them.
    if let Some(grapheme) = config
        .consonants
        .keys()
        .find(|g| config.vowels.contains_key(*g))
    {
        return Err(GlyphConfigError::Overlap {
            grapheme: grapheme.clone(),
        });
    }

    Ok(config)
}

fn validate_table(
    table: &'static str,
    map: &BTreeMap<String, String>,
    allow_empty_code: bool,
) -> Result<(), GlyphConfigError> {
    if map.is_empty() {
        return Err(GlyphConfigError::Empty(table));
    }
    for (grapheme, code) in map {
        if !is_malayalam_text(grapheme) {
            return Err(GlyphConfigError::InvalidGrapheme {
                table,
                grapheme: grapheme.clone(),
            });
        }
        if code.is_empty() && !allow_empty_code {
            return Err(GlyphConfigError::EmptyCode {
                table,
                grapheme: grapheme.clone(),
            });
        }
        if !is_code(code) {
            return Err(GlyphConfigError::InvalidCode {
                table,
                grapheme: grapheme.clone(),
                code: code.clone(),
            });
        }
    }
    Ok(())
}
