//! Global settings loaded from TOML, following the same OnceLock pattern as the glyph tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::unicode::is_code;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub exception: ExceptionSettings,
}

/// Start-of-key rewrite `<lead><pivot><trail>` → `<lead><replacement><trail>`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExceptionSettings {
    pub enabled: bool,
    pub leads: Vec<String>,
    pub pivot: String,
    pub trails: Vec<String>,
    pub replacement: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_code {
        ($field:literal, $value:expr) => {
            if $value.is_empty() || !is_code($value) {
                return Err(SettingsError::InvalidValue {
                    field: $field.to_string(),
                    reason: "must be a non-empty code of A-Z and 0-9".to_string(),
                });
            }
        };
    }
    macro_rules! check_non_empty {
        ($field:literal, $list:expr) => {
            if $list.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: $field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    let ex = &s.exception;
    check_non_empty!("exception.leads", ex.leads);
    check_non_empty!("exception.trails", ex.trails);
    for lead in &ex.leads {
        check_code!("exception.leads", lead);
    }
    for trail in &ex.trails {
        check_code!("exception.trails", trail);
    }
    check_code!("exception.pivot", &ex.pivot);
    check_code!("exception.replacement", &ex.replacement);

    Ok(())
}
