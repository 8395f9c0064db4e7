//! Per-game strategy state
//!
//! `StrategyState` owns one game's working candidate set. Each turn it reads
//! the game's evidence, works out whether its previous guess hit or missed,
//! prunes the candidates to match, and asks the selector for the next guess.

use super::StrategyError;
use super::candidates::CandidateSet;
use super::filter;
use super::frequency::FrequencyTable;
use super::selector::{Decision, GuessSelector, LetterChoice, TierThresholds};
use super::stumpers::StumperIndex;
use crate::core::{GameView, Guess, LetterSet};
use crate::wordlists::DictionaryCache;
use std::sync::Arc;
use tracing::{debug, trace};

/// Outcome of the previous guess, inferred from the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousGuess {
    /// Nothing guessed yet
    NoPriorGuess,
    /// Wrong-guess budget unchanged since the guess
    Correct,
    /// Wrong-guess budget went down
    Wrong,
}

/// Guessing strategy for a single game
#[derive(Debug, Clone)]
pub struct StrategyState {
    word_length: usize,
    candidates: CandidateSet,
    frequencies: FrequencyTable,
    guessed: LetterSet,
    selector: GuessSelector,
    wrong_remaining: usize,
    last_guess: Option<Guess>,
    last_choice: Option<LetterChoice>,
}

impl StrategyState {
    /// Start a strategy for `game`
    ///
    /// The candidates are a private copy of the cached words of the secret's
    /// length. Cached letter counts are reused when nothing has been guessed
    /// yet; otherwise the counts are rebuilt without the guessed letters.
    #[must_use]
    pub fn new(
        game: &impl GameView,
        cache: &DictionaryCache,
        stumpers: Arc<StumperIndex>,
        thresholds: TierThresholds,
    ) -> Self {
        let word_length = game.secret_length();
        let guessed = game.all_guessed_letters();
        let entry = cache.words_of_length(word_length);
        let candidates = entry.candidates().clone();

        let frequencies = if guessed.is_empty() {
            entry.frequencies().clone()
        } else {
            FrequencyTable::tally(&candidates, guessed)
        };

        debug!(
            word_length,
            candidates = candidates.len(),
            "new strategy state"
        );

        Self {
            word_length,
            candidates,
            frequencies,
            guessed,
            selector: GuessSelector::new(thresholds, stumpers),
            wrong_remaining: game.wrong_guesses_remaining(),
            last_guess: None,
            last_choice: None,
        }
    }

    /// Length of the secret word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words still consistent with every guess so far
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Letter counts over the candidates, guessed letters excluded
    #[inline]
    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Letters guessed so far
    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// How the most recent letter was chosen (`None` after a word guess)
    #[inline]
    #[must_use]
    pub const fn last_choice(&self) -> Option<&LetterChoice> {
        self.last_choice.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn last_guess(&self) -> Option<&Guess> {
        self.last_guess.as_ref()
    }

    /// Classify the previous guess from the game's current state
    #[must_use]
    pub fn previous_guess(&self, game: &impl GameView) -> PreviousGuess {
        if self.last_guess.is_none() || game.current_score() == 0 {
            PreviousGuess::NoPriorGuess
        } else if game.wrong_guesses_remaining() < self.wrong_remaining {
            PreviousGuess::Wrong
        } else {
            PreviousGuess::Correct
        }
    }

    /// Produce the next guess
    ///
    /// # Errors
    /// Fails when the evidence does not fit the candidates (see
    /// [`StrategyError`]) or when no candidate is left. The state should be
    /// discarded after an error.
    pub fn next_guess(&mut self, game: &impl GameView) -> Result<Guess, StrategyError> {
        let previous = self.previous_guess(game);
        trace!(?previous, "previous guess");

        match previous {
            PreviousGuess::NoPriorGuess => {}
            PreviousGuess::Correct => self.apply_correct(game)?,
            PreviousGuess::Wrong => self.apply_wrong()?,
        }

        self.wrong_remaining = game.wrong_guesses_remaining();
        self.guessed = self.guessed.union(game.all_guessed_letters());

        let decision = self
            .selector
            .choose(&self.candidates, &self.frequencies, self.guessed)?;

        let guess = match decision {
            Decision::Solve(word) => {
                self.last_choice = None;
                Guess::word(word.text())
            }
            Decision::Letter(choice) => {
                self.guessed.insert(choice.letter);
                self.frequencies = self.frequencies.without(self.guessed);
                self.last_choice = Some(choice);
                Guess::Letter(choice.letter)
            }
        };

        self.last_guess = Some(guess.clone());
        Ok(guess)
    }

    fn apply_correct(&mut self, game: &impl GameView) -> Result<(), StrategyError> {
        // A correct word guess ends the game
        if let Some(Guess::Letter(letter)) = self.last_guess {
            filter::apply_correct_guess(letter, &mut self.candidates, &game.guessed_so_far())?;
            self.retally(game.all_guessed_letters());
        }
        Ok(())
    }

    fn apply_wrong(&mut self) -> Result<(), StrategyError> {
        match &self.last_guess {
            Some(Guess::Letter(letter)) => {
                filter::apply_wrong_guess(*letter, &mut self.candidates)?;
            }
            Some(Guess::Word(word)) => {
                let removed = self.candidates.remove(word);
                debug!(word = %word, removed, "removing wrong word guess");
            }
            None => return Ok(()),
        }
        self.retally(LetterSet::EMPTY);
        Ok(())
    }

    fn retally(&mut self, also_excluded: LetterSet) {
        self.guessed = self.guessed.union(also_excluded);
        self.frequencies = FrequencyTable::tally(&self.candidates, self.guessed);
        trace!(frequencies = %self.frequencies, "letter counts");
    }
}
