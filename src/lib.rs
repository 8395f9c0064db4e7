//! Hangman Solver
//!
//! Plays Hangman by keeping every dictionary word that still fits the
//! evidence and guessing letters with a tiered frequency heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{GameStatus, GameView, HangmanGame, Word};
//! use hangman_solver::solver::{StrategyState, StumperIndex, TierThresholds};
//! use hangman_solver::wordlists::{DictionaryCache, loader::words_from_slice};
//! use std::sync::Arc;
//!
//! let cache = DictionaryCache::new(words_from_slice(&["cat", "car", "can", "cap"]));
//! let mut game = HangmanGame::new(Word::new("cap").unwrap(), 5);
//! let mut strategy = StrategyState::new(
//!     &game,
//!     &cache,
//!     Arc::new(StumperIndex::empty()),
//!     TierThresholds::default(),
//! );
//!
//! while game.status() == GameStatus::KeepGuessing {
//!     let guess = strategy.next_guess(&game).unwrap();
//!     game.apply(&guess);
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Guessing strategy
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
