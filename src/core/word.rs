//! Dictionary word representation
//!
//! A Word stores a lowercase ASCII word of any length along with the set of
//! distinct letters it contains, so presence checks are a single bit test.

use super::letters::{LetterSet, is_letter};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A lowercase dictionary word
///
/// Cloning is cheap: the text is shared behind an `Arc`, so a game's working
/// candidate set can be copied out of the dictionary cache without
/// reallocating every word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Arc<str>,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("Banana").unwrap();
    /// assert_eq!(word.text(), "banana");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("don't").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(is_letter) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = LetterSet::from_word(&text);

        Ok(Self {
            text: Arc::from(text),
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words are validated to be non-empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// Total number of occurrences of `letter`
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.bytes().iter().filter(|&&b| b == letter).count()
    }

    /// The word in uppercase, as shown to the player
    #[must_use]
    pub fn to_uppercase(&self) -> String {
        self.text.to_ascii_uppercase()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
