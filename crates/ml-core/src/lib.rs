//! MLphone: phonetic keys for Malayalam words.
//!
//! A word is reduced to three ASCII keys of decreasing tolerance so that
//! words which sound alike compare equal:
//!
//! - key0: broad, ignores hard sounds, gemination and vowel signs
//! - key1: keeps hard/retroflex distinctions
//! - key2: keeps gemination and vowel signs as well

mod encoder;
pub mod exception;
pub mod glyphs;
pub mod keys;
pub mod matcher;
pub mod normalize;
pub mod settings;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use encoder::{compute, compute_with, encode, encode_with};
pub use matcher::explain::{explain, explain_with, ExplainResult};
