//! A single Hangman guess

use std::fmt;

/// A guess produced by the strategy and applied by the game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    /// Guess one lowercase letter
    Letter(u8),
    /// Guess the whole word (stored uppercase, as shown to the player)
    Word(String),
}

impl Guess {
    /// Build a whole-word guess; the word is uppercased
    #[must_use]
    pub fn word(word: &str) -> Self {
        Self::Word(word.to_ascii_uppercase())
    }

    /// Build a letter guess; the letter is lowercased
    #[must_use]
    pub const fn letter(letter: u8) -> Self {
        Self::Letter(letter.to_ascii_lowercase())
    }

    #[must_use]
    pub const fn is_letter(&self) -> bool {
        matches!(self, Self::Letter(_))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "GuessLetter[{}]", letter.to_ascii_uppercase() as char),
            Self::Word(word) => write!(f, "GuessWord[{word}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_guess_is_uppercase() {
        assert_eq!(Guess::word("cat"), Guess::Word("CAT".to_string()));
        assert!(!Guess::word("cat").is_letter());
    }

    #[test]
    fn letter_guess_is_lowercase() {
        assert_eq!(Guess::letter(b'E'), Guess::Letter(b'e'));
        assert!(Guess::letter(b'e').is_letter());
    }

    #[test]
    fn display() {
        assert_eq!(Guess::letter(b'e').to_string(), "GuessLetter[E]");
        assert_eq!(Guess::word("cat").to_string(), "GuessWord[CAT]");
    }
}
