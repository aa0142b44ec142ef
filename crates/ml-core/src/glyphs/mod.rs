//! Grapheme-to-code tables for Malayalam.
//!
//! Five tables (vowels, consonants, chillu, compounds, modifiers) loaded from
//! TOML. The embedded defaults are used unless a custom document is installed
//! with [`GlyphTables::init_custom`] before first use.

mod config;
mod table;

pub use config::{parse_glyph_toml, GlyphConfig, GlyphConfigError};
pub use table::{GlyphEntry, GlyphTable, GlyphTables};

pub const DEFAULT_GLYPHS_TOML: &str = include_str!("default_glyphs.toml");

/// Returns the embedded default glyph TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_GLYPHS_TOML
}
