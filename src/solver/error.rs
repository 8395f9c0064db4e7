//! Strategy errors
//!
//! Every error here is local to one game. None of them can leave the shared
//! dictionary cache in a partially written state.

use thiserror::Error;

/// Failures raised while pruning candidates or choosing a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// Evidence pattern length differs from the candidate word length
    #[error("pattern length {found} does not match word length {expected}")]
    LengthMismatch { expected: usize, found: usize },

    /// A byte outside `a..=z` was passed as a letter
    #[error("invalid letter {0:?}")]
    InvalidLetter(char),

    /// A guess was reported correct but the pattern does not reveal it
    #[error("letter '{0}' was reported correct but is not revealed in the pattern")]
    LetterNotRevealed(char),

    /// Every candidate word has been eliminated
    #[error("no candidate words remain; is the secret in the dictionary?")]
    NoCandidates,

    /// The frequency queue ran dry while several candidates remain
    #[error(
        "no more letters in the frequency queue with {candidates} candidates left; \
         are the dictionary and the secret in the same language?"
    )]
    LetterQueueExhausted { candidates: usize },
}

impl StrategyError {
    /// True for errors caused by a broken caller contract rather than by
    /// the dictionary or the game
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. } | Self::InvalidLetter(_) | Self::LetterNotRevealed(_)
        )
    }
}

/// Validate a letter byte
pub(crate) fn check_letter(letter: u8) -> Result<u8, StrategyError> {
    if letter.is_ascii_lowercase() {
        Ok(letter)
    } else {
        Err(StrategyError::InvalidLetter(letter as char))
    }
}
