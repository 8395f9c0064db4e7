//! Hangman game state
//!
//! `HangmanGame` tracks the secret, the revealed pattern and the wrong-guess
//! budget. Strategies only see it through the read-only `GameView` trait.
//!
//! Scoring: a won game scores one point per letter guessed plus one per
//! wrong word guess; a lost game scores `LOST_SCORE`.

use super::letters::LetterSet;
use super::{Guess, Pattern, Word};
use std::fmt;

/// Score assigned to a lost game
pub const LOST_SCORE: i32 = 25;

/// Default number of wrong guesses allowed before the game is lost
pub const DEFAULT_MAX_WRONG_GUESSES: usize = 5;

/// Status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Secret fully revealed
    Won,
    /// Wrong-guess budget exceeded
    Lost,
    /// Game still in progress
    KeepGuessing,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "GAME_WON"),
            Self::Lost => write!(f, "GAME_LOST"),
            Self::KeepGuessing => write!(f, "KEEP_GUESSING"),
        }
    }
}

/// Read-only view of a game, as consumed by guessing strategies
pub trait GameView {
    /// Length of the secret word
    fn secret_length(&self) -> usize;

    /// Wrong guesses still allowed before the game is lost
    fn wrong_guesses_remaining(&self) -> usize;

    /// The secret as revealed so far
    fn guessed_so_far(&self) -> Pattern;

    /// Every letter guessed so far, right or wrong
    fn all_guessed_letters(&self) -> LetterSet;

    /// Current score
    fn current_score(&self) -> i32;

    /// Current status
    fn status(&self) -> GameStatus;
}

/// A game of Hangman over a known secret word
#[derive(Debug, Clone)]
pub struct HangmanGame {
    secret: Word,
    max_wrong_guesses: usize,
    revealed: Pattern,
    correct_letters: LetterSet,
    wrong_letters: LetterSet,
    wrong_words: Vec<String>,
}

impl HangmanGame {
    /// Start a new game
    #[must_use]
    pub fn new(secret: Word, max_wrong_guesses: usize) -> Self {
        let revealed = Pattern::hidden(secret.len());
        Self {
            secret,
            max_wrong_guesses,
            revealed,
            correct_letters: LetterSet::new(),
            wrong_letters: LetterSet::new(),
            wrong_words: Vec::new(),
        }
    }

    /// The secret word
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    /// Wrong letters plus wrong word guesses
    #[must_use]
    pub fn wrong_guesses_made(&self) -> usize {
        self.wrong_letters.len() + self.wrong_words.len()
    }

    /// Letters guessed that are not in the secret
    #[must_use]
    pub const fn wrong_letters(&self) -> LetterSet {
        self.wrong_letters
    }

    /// Incorrect whole-word guesses, uppercase
    #[must_use]
    pub fn wrong_words(&self) -> &[String] {
        &self.wrong_words
    }

    /// Guess a letter
    ///
    /// Repeated letters and guesses made after the game ended are ignored.
    pub fn guess_letter(&mut self, letter: u8) {
        if self.status() != GameStatus::KeepGuessing {
            return;
        }

        let letter = letter.to_ascii_lowercase();
        if self.correct_letters.contains(letter) || self.wrong_letters.contains(letter) {
            return;
        }

        if self.secret.has_letter(letter) {
            self.correct_letters.insert(letter);
            self.revealed.reveal(self.secret.bytes(), letter);
        } else {
            self.wrong_letters.insert(letter);
        }
    }

    /// Guess the whole word (case-insensitive)
    pub fn guess_word(&mut self, word: &str) {
        if self.status() != GameStatus::KeepGuessing {
            return;
        }

        if word.eq_ignore_ascii_case(self.secret.text()) {
            self.revealed.reveal_all(self.secret.bytes());
        } else {
            self.wrong_words.push(word.to_ascii_uppercase());
        }
    }

    /// Apply a strategy's guess
    pub fn apply(&mut self, guess: &Guess) {
        match guess {
            Guess::Letter(letter) => self.guess_letter(*letter),
            Guess::Word(word) => self.guess_word(word),
        }
    }
}

impl GameView for HangmanGame {
    fn secret_length(&self) -> usize {
        self.secret.len()
    }

    fn wrong_guesses_remaining(&self) -> usize {
        self.max_wrong_guesses
            .saturating_sub(self.wrong_guesses_made())
    }

    fn guessed_so_far(&self) -> Pattern {
        self.revealed.clone()
    }

    fn all_guessed_letters(&self) -> LetterSet {
        self.correct_letters.union(self.wrong_letters)
    }

    fn current_score(&self) -> i32 {
        if self.status() == GameStatus::Lost {
            LOST_SCORE
        } else {
            (self.wrong_guesses_made() + self.correct_letters.len()) as i32
        }
    }

    fn status(&self) -> GameStatus {
        if self.revealed.is_complete() {
            GameStatus::Won
        } else if self.wrong_guesses_made() > self.max_wrong_guesses {
            GameStatus::Lost
        } else {
            GameStatus::KeepGuessing
        }
    }
}

impl fmt::Display for HangmanGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; score={}; status={}",
            self.revealed,
            self.current_score(),
            self.status()
        )
    }
}
