//! MLphone: phonetic keys for Malayalam words, for fuzzy search and
//! near-duplicate detection.
//!
//! ```
//! use mlphone::{compute, KeyLevel};
//!
//! let keys = compute("കേരളം");
//! assert_eq!(keys.key(KeyLevel::Broad), "KRL3");
//! assert_eq!(keys.key(KeyLevel::Narrow), "K6RL13");
//! ```

pub mod api;
pub mod index;
mod trace_init;

pub use api::{compute, compute_batch, sounds_alike, KeyLevel, MlphoneError, PhoneticKeys};
pub use index::{PhoneticGroup, PhoneticIndex};
pub use ml_core;
