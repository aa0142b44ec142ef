//! Public API over the core pipeline: key computation, configuration
//! loading and diagnostics.

mod types;

pub use types::{KeyLevel, MlphoneError, PhoneticKeys};

use std::path::Path;

use ml_core::glyphs::GlyphTables;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

/// Phonetic keys for `word`. Never fails; see [`PhoneticKeys::is_empty`].
pub fn compute(word: &str) -> PhoneticKeys {
    PhoneticKeys::from(ml_core::compute(word))
}

/// Keys for many words, in input order.
pub fn compute_batch<S: AsRef<str>>(words: &[S]) -> Vec<PhoneticKeys> {
    words.iter().map(|w| compute(w.as_ref())).collect()
}

/// Whether two words share the key at `level`. An empty key at that level
/// never matches.
pub fn sounds_alike(a: &str, b: &str, level: KeyLevel) -> bool {
    let ka = compute(a);
    let kb = compute(b);
    let key = ka.key(level);
    !key.is_empty() && key == kb.key(level)
}

/// Pass-by-pass trace of the pipeline for one word.
pub fn explain(word: &str) -> ml_core::ExplainResult {
    ml_core::explain(word)
}

/// Install custom glyph tables from a TOML file. Must run before first use.
pub fn glyphs_load_config(path: &Path) -> Result<(), MlphoneError> {
    let content = read_config(path)?;
    GlyphTables::init_custom(content).map_err(|e| MlphoneError::InvalidData { msg: e.to_string() })
}

/// Install custom settings from a TOML file. Must run before first use.
pub fn settings_load_config(path: &Path) -> Result<(), MlphoneError> {
    let content = read_config(path)?;
    ml_core::settings::init_custom(content)
        .map_err(|e| MlphoneError::InvalidData { msg: e.to_string() })
}

/// Validate a glyph TOML file without installing it; returns the entry count.
pub fn glyphs_validate(path: &Path) -> Result<usize, MlphoneError> {
    let content = read_config(path)?;
    let config = ml_core::glyphs::parse_glyph_toml(&content)
        .map_err(|e| MlphoneError::InvalidData { msg: e.to_string() })?;
    Ok(config.vowels.len()
        + config.consonants.len()
        + config.chillus.len()
        + config.compounds.len()
        + config.modifiers.len())
}

/// Validate a settings TOML file without installing it.
pub fn settings_validate(path: &Path) -> Result<ml_core::settings::Settings, MlphoneError> {
    let content = read_config(path)?;
    ml_core::settings::parse_settings_toml(&content)
        .map_err(|e| MlphoneError::InvalidData { msg: e.to_string() })
}

pub fn glyphs_default_config() -> String {
    ml_core::glyphs::default_toml().to_string()
}

pub fn settings_default_config() -> String {
    ml_core::settings::default_toml().to_string()
}

/// Write a JSON trace under `log_dir`. Fails with
/// [`MlphoneError::Unsupported`] unless built with the `trace` feature.
pub fn trace_init(log_dir: &Path) -> Result<(), MlphoneError> {
    crate::trace_init::init_tracing(log_dir)
}

fn read_config(path: &Path) -> Result<String, MlphoneError> {
    std::fs::read_to_string(path).map_err(|e| MlphoneError::Io {
        msg: format!("{}: {e}", path.display()),
    })
}
