//! Play games against known secrets
//!
//! The runner drives one `HangmanGame` with one `StrategyState` until the
//! game is won or lost. A strategy error ends the game early with
//! `ERROR_SCORE`, which no real game can produce.

use crate::core::game::DEFAULT_MAX_WRONG_GUESSES;
use crate::core::{GameStatus, GameView, Guess, HangmanGame, Pattern, Word};
use crate::solver::{LetterChoice, StrategyError, StrategyState, StumperIndex, TierThresholds};
use crate::wordlists::DictionaryCache;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Score reported for a game the strategy could not finish
pub const ERROR_SCORE: i32 = -1;

/// Settings shared by every game in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_wrong_guesses: usize,
    pub thresholds: TierThresholds,
}

impl GameConfig {
    #[must_use]
    pub fn new(max_wrong_guesses: usize) -> Self {
        Self {
            max_wrong_guesses,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
            thresholds: TierThresholds::default(),
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    /// The strategy failed before the game ended
    Aborted(StrategyError),
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
            Self::Aborted(err) => write!(f, "aborted: {err}"),
        }
    }
}

/// A single guess in a played game
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub guess: Guess,
    /// Tier and reason for letter guesses
    pub choice: Option<LetterChoice>,
    /// Candidates left when the guess was chosen
    pub candidates: usize,
    /// Pattern after the guess
    pub pattern: Pattern,
    pub correct: bool,
}

/// Result of one game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub secret: Word,
    pub outcome: GameOutcome,
    pub score: i32,
    pub wrong_guesses: usize,
    pub turns: Vec<TurnRecord>,
    pub duration: Duration,
}

impl GameReport {
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.outcome, GameOutcome::Won)
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        matches!(self.outcome, GameOutcome::Lost)
    }

    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self.outcome, GameOutcome::Aborted(_))
    }

    /// Short outcome name without the error detail
    #[must_use]
    pub const fn outcome_label(&self) -> &'static str {
        match self.outcome {
            GameOutcome::Won => "won",
            GameOutcome::Lost => "lost",
            GameOutcome::Aborted(_) => "aborted",
        }
    }
}

/// Play one game to the end
///
/// # Examples
/// ```
/// use hangman_solver::commands::{GameConfig, GameOutcome, play_game};
/// use hangman_solver::core::Word;
/// use hangman_solver::solver::StumperIndex;
/// use hangman_solver::wordlists::{DictionaryCache, loader::words_from_slice};
/// use std::sync::Arc;
///
/// let cache = DictionaryCache::new(words_from_slice(&["cat", "car", "can", "cap"]));
/// let stumpers = Arc::new(StumperIndex::empty());
/// let secret = Word::new("cat").unwrap();
///
/// let report = play_game(&secret, &cache, &stumpers, &GameConfig::default());
/// assert_eq!(report.outcome, GameOutcome::Won);
/// ```
#[must_use]
pub fn play_game(
    secret: &Word,
    cache: &DictionaryCache,
    stumpers: &Arc<StumperIndex>,
    config: &GameConfig,
) -> GameReport {
    let start = Instant::now();
    let mut game = HangmanGame::new(secret.clone(), config.max_wrong_guesses);
    let mut state = StrategyState::new(&game, cache, Arc::clone(stumpers), config.thresholds);
    let mut turns = Vec::new();

    let outcome = loop {
        match game.status() {
            GameStatus::Won => break GameOutcome::Won,
            GameStatus::Lost => break GameOutcome::Lost,
            GameStatus::KeepGuessing => {}
        }

        let guess = match state.next_guess(&game) {
            Ok(guess) => guess,
            Err(err) => {
                warn!(secret = %secret, error = %err, "aborting game");
                break GameOutcome::Aborted(err);
            }
        };

        let wrong_before = game.wrong_guesses_made();
        game.apply(&guess);

        turns.push(TurnRecord {
            choice: state.last_choice().copied(),
            candidates: state.candidates().len(),
            pattern: game.guessed_so_far(),
            correct: game.wrong_guesses_made() == wrong_before,
            guess,
        });
    };

    let score = match outcome {
        GameOutcome::Aborted(_) => ERROR_SCORE,
        _ => game.current_score(),
    };

    info!(secret = %secret, %outcome, score, guesses = turns.len(), "game finished");

    GameReport {
        secret: secret.clone(),
        outcome,
        score,
        wrong_guesses: game.wrong_guesses_made(),
        turns,
        duration: start.elapsed(),
    }
}

/// Play several games one after the other
#[must_use]
pub fn play_many(
    secrets: &[Word],
    cache: &DictionaryCache,
    stumpers: &Arc<StumperIndex>,
    config: &GameConfig,
) -> Vec<GameReport> {
    secrets
        .iter()
        .map(|secret| play_game(secret, cache, stumpers, config))
        .collect()
}
