use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum MlphoneError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("unsupported: {msg}")]
    Unsupported { msg: String },
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// The three phonetic keys of a word, broad to narrow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneticKeys {
    pub key0: String,
    pub key1: String,
    pub key2: String,
}

impl PhoneticKeys {
    pub fn key(&self, level: KeyLevel) -> &str {
        match level {
            KeyLevel::Broad => &self.key0,
            KeyLevel::Medium => &self.key1,
            KeyLevel::Narrow => &self.key2,
        }
    }

    /// True when the input contained nothing the tables recognise.
    pub fn is_empty(&self) -> bool {
        self.key2.is_empty()
    }
}

impl From<[String; 3]> for PhoneticKeys {
    fn from([key0, key1, key2]: [String; 3]) -> Self {
        Self { key0, key1, key2 }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which key to compare on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyLevel {
    /// key0
    #[default]
    Broad,
    /// key1
    Medium,
    /// key2
    Narrow,
}

impl KeyLevel {
    pub const ALL: [KeyLevel; 3] = [KeyLevel::Broad, KeyLevel::Medium, KeyLevel::Narrow];

    pub fn as_str(self) -> &'static str {
        match self {
            KeyLevel::Broad => "broad",
            KeyLevel::Medium => "medium",
            KeyLevel::Narrow => "narrow",
        }
    }
}

impl fmt::Display for KeyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyLevel {
    type Err = MlphoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "broad" | "key0" => Ok(KeyLevel::Broad),
            "1" | "medium" | "key1" => Ok(KeyLevel::Medium),
            "2" | "narrow" | "key2" => Ok(KeyLevel::Narrow),
            _ => Err(MlphoneError::InvalidData {
                msg: format!("unknown key level: {s}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_by_level() {
        let keys = PhoneticKeys::from(["KRL3".to_string(), "KRL13".to_string(), "K6RL13".to_string()]);
        assert_eq!(keys.key(KeyLevel::Broad), "KRL3");
        assert_eq!(keys.key(KeyLevel::Medium), "KRL13");
        assert_eq!(keys.key(KeyLevel::Narrow), "K6RL13");
        assert!(!keys.is_empty());
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("broad".parse::<KeyLevel>().unwrap(), KeyLevel::Broad);
        assert_eq!("1".parse::<KeyLevel>().unwrap(), KeyLevel::Medium);
        assert_eq!("Key2".parse::<KeyLevel>().unwrap(), KeyLevel::Narrow);
        let err = "loose".parse::<KeyLevel>().unwrap_err();
        assert!(err.to_string().contains("loose"));
    }

    #[test]
    fn test_level_display_roundtrip() {
        for level in KeyLevel::ALL {
            assert_eq!(level.to_string().parse::<KeyLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_keys_json() {
        let keys = PhoneticKeys::from(["A".to_string(), "A".to_string(), "A".to_string()]);
        let json = serde_json::to_string(&keys).unwrap();
        assert_eq!(json, r#"{"key0":"A","key1":"A","key2":"A"}"#);
        let level = serde_json::to_string(&KeyLevel::Medium).unwrap();
        assert_eq!(level, r#""medium""#);
    }
}
