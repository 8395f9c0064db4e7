//! Core domain types for Hangman
//!
//! Words, letter sets, evidence patterns, guesses and the game itself.
//! These types know nothing about guessing strategy.

pub mod game;
mod guess;
pub mod letters;
mod pattern;
mod word;

pub use game::{GameStatus, GameView, HangmanGame};
pub use guess::Guess;
pub use letters::LetterSet;
pub use pattern::{MYSTERY_LETTER, Pattern};
pub use word::{Word, WordError};
