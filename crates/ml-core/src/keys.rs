//! Derivation of the broad and medium keys from the narrow key.
//!
//! Digit meanings in a narrow key:
//! - `1`: hard / retroflex consonant (kept in key1 and key2)
//! - `2`: geminated consonant (key2 only)
//! - `3`: anuswaram (kept in every key)
//! - `4`..`9`: vowel signs (key2 only)

/// Digits removed from key2 to produce key1.
pub const MEDIUM_DROPPED: [char; 7] = ['2', '4', '5', '6', '7', '8', '9'];

/// Digits removed from key2 to produce key0.
pub const BROAD_DROPPED: [char; 8] = ['1', '2', '4', '5', '6', '7', '8', '9'];

/// Returns `(key0, key1)` for a narrow key.
pub fn derive(key2: &str) -> (String, String) {
    let key1 = key2.replace(MEDIUM_DROPPED, "");
    let key0 = key2.replace(BROAD_DROPPED, "");
    (key0, key1)
}
