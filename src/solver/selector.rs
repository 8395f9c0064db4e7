//! Tiered letter selection
//!
//! Picks the next guess from the current candidates and their frequency
//! table. The tactic depends on how many candidates remain:
//!
//! ```text
//! if candidates > medium     → Large:     most frequent letter
//! else if candidates > micro → Medium:    stumper bias, sure hit, else outlier split
//! else if candidates > 1     → Tiny:      first letter in at most half the candidates
//! else                       → Singleton: guess the word
//! ```
//!
//! The `Medium` tier only looks at the top `shortlist` letters. A letter held
//! by every candidate cannot be a wrong guess, so its simulated wrong-guess
//! survivors are meaningless; such a letter is guessed outright.
//!
//! With default thresholds (550, 2, shortlist 3):
//! - **551+ candidates**: `Large`
//! - **3-550 candidates**: `Medium`
//! - **2 candidates**: `Tiny`
//! - **1 candidate**: `Singleton`

use super::StrategyError;
use super::candidates::CandidateSet;
use super::frequency::FrequencyTable;
use super::ranking::{LetterRanking, rank_letters};
use super::stumpers::StumperIndex;
use crate::core::{LetterSet, Word};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Candidate-count thresholds between tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Candidates > this use `Large` (default: 550)
    pub medium: usize,

    /// Candidates > this (and <= `medium`) use `Medium` (default: 2)
    pub micro: usize,

    /// Letters considered by the `Medium` tier (default: 3)
    pub shortlist: usize,
}

impl TierThresholds {
    #[must_use]
    pub const fn new(medium: usize, micro: usize, shortlist: usize) -> Self {
        Self {
            medium,
            micro,
            shortlist,
        }
    }

    /// Get the tier for a candidate count (`None` when no candidates remain)
    #[must_use]
    pub const fn get_tier(&self, num_candidates: usize) -> Option<Tier> {
        if num_candidates == 0 {
            None
        } else if num_candidates == 1 {
            Some(Tier::Singleton)
        } else if num_candidates > self.medium {
            Some(Tier::Large)
        } else if num_candidates > self.micro {
            Some(Tier::Medium)
        } else {
            Some(Tier::Tiny)
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::new(
            550, // medium: 551+ candidates use Large
            2,   // micro: 3-550 use Medium
            3,   // shortlist: top 3 letters
        )
    }
}

/// Selection tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Many candidates: plain frequency
    Large,
    /// Frequency short-list refined by stumpers and outlier scores
    Medium,
    /// A couple of candidates: look for a splitting letter
    Tiny,
    /// One candidate: guess it
    Singleton,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Large => write!(f, "large"),
            Self::Medium => write!(f, "medium"),
            Self::Tiny => write!(f, "tiny"),
            Self::Singleton => write!(f, "singleton"),
        }
    }
}

/// Why a letter was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceReason {
    /// Head of the frequency queue
    MostFrequent,
    /// Most common letter among stumper candidates, and in the short-list
    StumperBias,
    /// Held by every candidate
    SureHit,
    /// Best outlier score after a simulated wrong guess
    OutlierSplit,
    /// In at most half of the candidates
    EvenSplit,
    /// Nothing split the candidates; last letter in the queue
    QueueTail,
}

impl fmt::Display for ChoiceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MostFrequent => write!(f, "most frequent"),
            Self::StumperBias => write!(f, "stumper bias"),
            Self::SureHit => write!(f, "sure hit"),
            Self::OutlierSplit => write!(f, "outlier split"),
            Self::EvenSplit => write!(f, "even split"),
            Self::QueueTail => write!(f, "queue tail"),
        }
    }
}

/// A chosen letter and how it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterChoice {
    pub letter: u8,
    pub tier: Tier,
    pub reason: ChoiceReason,
}

impl fmt::Display for LetterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.letter.to_ascii_uppercase() as char,
            self.tier,
            self.reason
        )
    }
}

/// What to guess next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Letter(LetterChoice),
    Solve(Word),
}

/// The tiered selection policy
#[derive(Debug, Clone)]
pub struct GuessSelector {
    thresholds: TierThresholds,
    stumpers: Arc<StumperIndex>,
}

impl GuessSelector {
    #[must_use]
    pub const fn new(thresholds: TierThresholds, stumpers: Arc<StumperIndex>) -> Self {
        Self {
            thresholds,
            stumpers,
        }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    #[must_use]
    pub fn stumpers(&self) -> &StumperIndex {
        &self.stumpers
    }

    /// Decide the next guess
    ///
    /// `frequencies` must be a tally of `candidates` excluding `guessed`.
    ///
    /// # Errors
    /// [`StrategyError::NoCandidates`] when `candidates` is empty, and
    /// [`StrategyError::LetterQueueExhausted`] when several candidates remain
    /// but no unguessed letter is left to try.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::LetterSet;
    /// use hangman_solver::solver::{
    ///     CandidateSet, Decision, FrequencyTable, GuessSelector, StumperIndex, Tier,
    /// };
    /// use std::sync::Arc;
    ///
    /// let selector = GuessSelector::new(Default::default(), Arc::new(StumperIndex::empty()));
    /// let set = CandidateSet::from_strs(3, &["cat", "car", "can", "cap"]);
    /// let table = FrequencyTable::tally(&set, LetterSet::EMPTY);
    ///
    /// match selector.choose(&set, &table, LetterSet::EMPTY).unwrap() {
    ///     Decision::Letter(choice) => {
    ///         assert_eq!(choice.tier, Tier::Medium);
    ///         assert!(choice.letter == b'a' || choice.letter == b'c');
    ///     }
    ///     Decision::Solve(word) => panic!("unexpected solve {word}"),
    /// }
    /// ```
    pub fn choose(
        &self,
        candidates: &CandidateSet,
        frequencies: &FrequencyTable,
        guessed: LetterSet,
    ) -> Result<Decision, StrategyError> {
        let n = candidates.len();
        let tier = self
            .thresholds
            .get_tier(n)
            .ok_or(StrategyError::NoCandidates)?;

        let choice = match tier {
            Tier::Singleton => {
                let word = candidates.single().ok_or(StrategyError::NoCandidates)?;
                debug!(word = %word, "one candidate left");
                return Ok(Decision::Solve(word.clone()));
            }
            Tier::Large => Self::most_frequent(frequencies, n)?,
            Tier::Medium => self.shortlist_choice(candidates, frequencies, guessed)?,
            Tier::Tiny => Self::splitting_choice(frequencies, n)?,
        };

        debug!(
            candidates = n,
            letter = %(choice.letter as char),
            tier = %choice.tier,
            reason = %choice.reason,
            "letter chosen"
        );

        Ok(Decision::Letter(choice))
    }

    fn most_frequent(frequencies: &FrequencyTable, n: usize) -> Result<LetterChoice, StrategyError> {
        let letter = frequencies
            .most_frequent()
            .ok_or(StrategyError::LetterQueueExhausted { candidates: n })?;

        Ok(LetterChoice {
            letter,
            tier: Tier::Large,
            reason: ChoiceReason::MostFrequent,
        })
    }

    fn shortlist_choice(
        &self,
        candidates: &CandidateSet,
        frequencies: &FrequencyTable,
        guessed: LetterSet,
    ) -> Result<LetterChoice, StrategyError> {
        let shortlist = frequencies.top(self.thresholds.shortlist);
        if shortlist.is_empty() {
            return Err(StrategyError::LetterQueueExhausted {
                candidates: candidates.len(),
            });
        }

        if let Some(letter) = self.stumpers.suggest_letter(candidates, guessed)
            && shortlist.contains(&letter)
        {
            return Ok(LetterChoice {
                letter,
                tier: Tier::Medium,
                reason: ChoiceReason::StumperBias,
            });
        }

        let n = candidates.len();
        if let Some(&letter) = shortlist
            .iter()
            .find(|&&letter| frequencies.count(letter) == Some(n))
        {
            return Ok(LetterChoice {
                letter,
                tier: Tier::Medium,
                reason: ChoiceReason::SureHit,
            });
        }

        let ranked = rank_letters(
            shortlist,
            LetterRanking::ByOutlierAfterWrongGuess,
            candidates,
            frequencies,
        )?;

        let best = ranked
            .first()
            .ok_or(StrategyError::LetterQueueExhausted { candidates: n })?;

        Ok(LetterChoice {
            letter: best.letter,
            tier: Tier::Medium,
            reason: ChoiceReason::OutlierSplit,
        })
    }

    fn splitting_choice(
        frequencies: &FrequencyTable,
        n: usize,
    ) -> Result<LetterChoice, StrategyError> {
        let half = n / 2;

        if let Some((letter, _)) = frequencies.iter().find(|&(_, count)| count <= half) {
            return Ok(LetterChoice {
                letter,
                tier: Tier::Tiny,
                reason: ChoiceReason::EvenSplit,
            });
        }

        let letter = frequencies
            .ranked()
            .last()
            .copied()
            .ok_or(StrategyError::LetterQueueExhausted { candidates: n })?;

        Ok(LetterChoice {
            letter,
            tier: Tier::Tiny,
            reason: ChoiceReason::QueueTail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> GuessSelector {
        GuessSelector::new(TierThresholds::default(), Arc::new(StumperIndex::empty()))
    }

    fn choose(selector: &GuessSelector, set: &CandidateSet, guessed: LetterSet) -> Decision {
        let table = FrequencyTable::tally(set, guessed);
        selector.choose(set, &table, guessed).unwrap()
    }

    fn letter_choice(decision: Decision) -> LetterChoice {
        match decision {
            Decision::Letter(choice) => choice,
            Decision::Solve(word) => panic!("expected a letter, got word {word}"),
        }
    }

    /// `count` distinct three-letter words in dictionary order
    fn generated(count: usize) -> CandidateSet {
        let words = (b'a'..=b'z')
            .flat_map(|a| (b'a'..=b'z').flat_map(move |b| (b'a'..=b'z').map(move |c| [a, b, c])))
            .take(count)
            .map(|bytes| Word::new(std::str::from_utf8(&bytes).unwrap()).unwrap());
        CandidateSet::new(3, words)
    }

    #[test]
    fn tiers_correct() {
        let thresholds = TierThresholds::default();

        assert_eq!(thresholds.get_tier(0), None);
        assert_eq!(thresholds.get_tier(1), Some(Tier::Singleton));
        assert_eq!(thresholds.get_tier(2), Some(Tier::Tiny));
        assert_eq!(thresholds.get_tier(3), Some(Tier::Medium));
        assert_eq!(thresholds.get_tier(550), Some(Tier::Medium));
        assert_eq!(thresholds.get_tier(551), Some(Tier::Large));
        assert_eq!(thresholds.get_tier(10_000), Some(Tier::Large));
    }

    #[test]
    fn custom_thresholds() {
        let thresholds = TierThresholds::new(20, 5, 2);

        assert_eq!(thresholds.get_tier(21), Some(Tier::Large));
        assert_eq!(thresholds.get_tier(20), Some(Tier::Medium));
        assert_eq!(thresholds.get_tier(6), Some(Tier::Medium));
        assert_eq!(thresholds.get_tier(5), Some(Tier::Tiny));
        assert_eq!(thresholds.get_tier(1), Some(Tier::Singleton));
    }

    #[test]
    fn boundary_between_large_and_medium() {
        let selector = selector();

        let large = generated(551);
        assert_eq!(large.len(), 551);
        let choice = letter_choice(choose(&selector, &large, LetterSet::EMPTY));
        assert_eq!(choice.tier, Tier::Large);
        assert_eq!(choice.reason, ChoiceReason::MostFrequent);
        // The first 676 generated words all start with a
        assert_eq!(choice.letter, b'a');

        let medium = generated(550);
        let choice = letter_choice(choose(&selector, &medium, LetterSet::EMPTY));
        assert_eq!(choice.tier, Tier::Medium);
        assert_ne!(choice.reason, ChoiceReason::MostFrequent);
    }

    #[test]
    fn empty_set_is_an_error() {
        let set = CandidateSet::from_strs(3, &[]);
        let table = FrequencyTable::tally(&set, LetterSet::EMPTY);

        assert_eq!(
            selector().choose(&set, &table, LetterSet::EMPTY),
            Err(StrategyError::NoCandidates)
        );
    }

    #[test]
    fn singleton_is_solved() {
        let set = CandidateSet::from_strs(3, &["cat"]);
        match choose(&selector(), &set, LetterSet::from_word("t")) {
            Decision::Solve(word) => assert_eq!(word.text(), "cat"),
            Decision::Letter(choice) => panic!("expected solve, got {choice}"),
        }
    }

    #[test]
    fn medium_guesses_letter_in_every_candidate() {
        let set = CandidateSet::from_strs(3, &["cat", "car", "can", "cap"]);
        let choice = letter_choice(choose(&selector(), &set, LetterSet::EMPTY));

        // Shortlist is a, c, n; a and c are in every word
        assert_eq!(choice.tier, Tier::Medium);
        assert_eq!(choice.reason, ChoiceReason::SureHit);
        assert_eq!(choice.letter, b'a');
    }

    #[test]
    fn medium_ranks_shortlist_by_outlier_score() {
        let set = CandidateSet::from_strs(4, &["must", "bust", "mist", "gust", "jazz"]);
        let table = FrequencyTable::tally(&set, LetterSet::EMPTY);
        let choice = letter_choice(choose(&selector(), &set, LetterSet::EMPTY));

        let expected = rank_letters(
            table.top(3),
            LetterRanking::ByOutlierAfterWrongGuess,
            &set,
            &table,
        )
        .unwrap()[0]
            .letter;
        assert_eq!(choice.reason, ChoiceReason::OutlierSplit);
        assert_eq!(choice.letter, expected);
    }

    #[test]
    fn stumper_letter_in_shortlist_wins() {
        let set = CandidateSet::from_strs(4, &["jazz", "fuzz", "buzz", "fizz", "bust", "must"]);
        let stumpers = StumperIndex::from_words(["jazz", "fuzz"].map(|w| Word::new(w).unwrap()));
        let selector = GuessSelector::new(TierThresholds::default(), Arc::new(stumpers));

        let choice = letter_choice(choose(&selector, &set, LetterSet::EMPTY));
        assert_eq!(choice.letter, b'z');
        assert_eq!(choice.reason, ChoiceReason::StumperBias);
    }

    #[test]
    fn stumper_letter_outside_shortlist_is_ignored() {
        let set = CandidateSet::from_strs(4, &["jazz", "must", "bust", "mist", "gust"]);
        // a is only in jazz, so it is outside the top three (s, t, u)
        let stumpers = StumperIndex::from_words(["jazz"].map(|w| Word::new(w).unwrap()));
        let selector = GuessSelector::new(TierThresholds::default(), Arc::new(stumpers));

        let choice = letter_choice(choose(&selector, &set, LetterSet::from_word("z")));
        assert_eq!(choice.reason, ChoiceReason::OutlierSplit);
        assert!(b"stu".contains(&choice.letter));
    }

    #[test]
    fn tiny_prefers_splitting_letter() {
        let set = CandidateSet::from_strs(3, &["cat", "cot"]);
        let guessed = LetterSet::from_word("ct");
        let choice = letter_choice(choose(&selector(), &set, guessed));

        assert_eq!(choice.tier, Tier::Tiny);
        assert_eq!(choice.reason, ChoiceReason::EvenSplit);
        assert_eq!(choice.letter, b'a');
    }

    #[test]
    fn tiny_skips_letters_in_both_words() {
        let set = CandidateSet::from_strs(3, &["cat", "cot"]);
        let choice = letter_choice(choose(&selector(), &set, LetterSet::EMPTY));

        // c and t are in both, a is the first in only one
        assert_eq!(choice.letter, b'a');
        assert_eq!(choice.reason, ChoiceReason::EvenSplit);
    }

    #[test]
    fn tiny_falls_back_to_queue_tail() {
        // Anagrams share every letter
        let set = CandidateSet::from_strs(3, &["tac", "cat"]);
        let choice = letter_choice(choose(&selector(), &set, LetterSet::EMPTY));

        assert_eq!(choice.reason, ChoiceReason::QueueTail);
        assert_eq!(choice.letter, b't');
    }

    #[test]
    fn exhausted_queue_is_an_error() {
        let set = CandidateSet::from_strs(3, &["tac", "cat"]);
        let guessed = LetterSet::from_word("act");
        let table = FrequencyTable::tally(&set, guessed);

        assert_eq!(
            selector().choose(&set, &table, guessed),
            Err(StrategyError::LetterQueueExhausted { candidates: 2 })
        );
    }

    #[test]
    fn large_tier_exhausted_queue_is_an_error() {
        let selector =
            GuessSelector::new(TierThresholds::new(1, 1, 3), Arc::new(StumperIndex::empty()));
        let set = CandidateSet::from_strs(2, &["ab", "ba"]);
        let guessed = LetterSet::from_word("ab");
        let table = FrequencyTable::tally(&set, guessed);

        assert_eq!(
            selector.choose(&set, &table, guessed),
            Err(StrategyError::LetterQueueExhausted { candidates: 2 })
        );
    }
}
