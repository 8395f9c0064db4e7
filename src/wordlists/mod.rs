//! Word lists for Hangman solving
//!
//! Loads dictionary and stumper files and caches dictionary words by length.

mod cache;
pub mod loader;

pub use cache::{DictionaryCache, LengthEntry};
