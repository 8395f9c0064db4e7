//! Hangman guessing strategy
//!
//! Candidate pruning, letter statistics and the tiered letter selector,
//! tied together per game by `StrategyState`.

mod candidates;
mod error;
pub mod filter;
mod frequency;
pub mod outlier;
mod ranking;
mod selector;
mod state;
mod stumpers;

pub use candidates::CandidateSet;
pub use error::StrategyError;
pub use frequency::FrequencyTable;
pub use ranking::{LetterRanking, RankedLetter, rank_letters};
pub use selector::{ChoiceReason, Decision, GuessSelector, LetterChoice, Tier, TierThresholds};
pub use state::{PreviousGuess, StrategyState};
pub use stumpers::StumperIndex;
