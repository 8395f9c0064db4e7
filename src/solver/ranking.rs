//! Letter ordering rules
//!
//! A ranking turns a handful of letters into an ordered list, best first.
//! Each rule is a variant of `LetterRanking`, so the selector can pick one
//! per tier without juggling comparator objects.

use super::StrategyError;
use super::candidates::CandidateSet;
use super::filter::simulate_wrong_guess;
use super::frequency::FrequencyTable;
use super::outlier::outlier_score;
use std::fmt;

/// How to order letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterRanking {
    /// More candidates contain the letter
    ByFrequency,

    /// The candidates left after a wrong guess of the letter look less like
    /// English (higher outlier score)
    ByOutlierAfterWrongGuess,
}

impl fmt::Display for LetterRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByFrequency => write!(f, "frequency"),
            Self::ByOutlierAfterWrongGuess => write!(f, "outlier after wrong guess"),
        }
    }
}

/// A letter with the score it was ranked by
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedLetter {
    pub letter: u8,
    pub score: f64,
}

/// Order `letters` best first under `ranking`
///
/// Equal scores keep their input order, except that `ByFrequency` breaks
/// ties alphabetically. Callers pass letters in frequency order, so an
/// outlier tie goes to the more frequent letter.
///
/// # Errors
/// Returns [`StrategyError::InvalidLetter`] if a letter is not `a..=z`.
///
/// # Examples
/// ```
/// use hangman_solver::core::LetterSet;
/// use hangman_solver::solver::{CandidateSet, FrequencyTable, LetterRanking, rank_letters};
///
/// let set = CandidateSet::from_strs(3, &["cat", "car", "cap", "dog"]);
/// let table = FrequencyTable::tally(&set, LetterSet::EMPTY);
///
/// let ranked = rank_letters(b"oac", LetterRanking::ByFrequency, &set, &table).unwrap();
/// let letters: Vec<u8> = ranked.iter().map(|r| r.letter).collect();
/// assert_eq!(letters, b"aco");
/// ```
pub fn rank_letters(
    letters: &[u8],
    ranking: LetterRanking,
    candidates: &CandidateSet,
    frequencies: &FrequencyTable,
) -> Result<Vec<RankedLetter>, StrategyError> {
    let mut ranked = match ranking {
        LetterRanking::ByFrequency => letters
            .iter()
            .map(|&letter| {
                super::error::check_letter(letter).map(|letter| RankedLetter {
                    letter,
                    score: frequencies.count(letter).unwrap_or(0) as f64,
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        LetterRanking::ByOutlierAfterWrongGuess => letters
            .iter()
            .map(|&letter| {
                let remaining = simulate_wrong_guess(letter, candidates)?;
                Ok(RankedLetter {
                    letter,
                    score: outlier_score(&remaining),
                })
            })
            .collect::<Result<Vec<_>, StrategyError>>()?,
    };

    match ranking {
        LetterRanking::ByFrequency => ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.letter.cmp(&b.letter))
        }),
        // Stable: ties stay in evaluation order
        LetterRanking::ByOutlierAfterWrongGuess => {
            ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
    }

    Ok(ranked)
}
