//! Candidate pruning after a guess
//!
//! Two outcomes, two pairs of entry points:
//! - `apply_*` commits the filter in place and returns the number of words removed
//! - `simulate_*` leaves the set alone and returns the filtered copy
//!
//! A correct guess keeps a word only if it contains the letter, matches every
//! revealed position, and holds exactly as many copies of the letter as the
//! pattern reveals. The count check rejects e.g. `banana` against `-A-A--`
//! after guessing `a`: positions 1 and 3 match, but the third `a` is unrevealed.

use super::candidates::CandidateSet;
use super::error::{StrategyError, check_letter};
use crate::core::{Pattern, Word};
use tracing::{debug, trace};

/// Is `word` consistent with a correct guess of `letter` that produced `pattern`?
///
/// `pattern` must have the same length as `word`.
#[must_use]
pub fn is_consistent_with_correct_guess(word: &Word, letter: u8, pattern: &Pattern) -> bool {
    if !word.has_letter(letter) {
        return false;
    }

    if word.count_of(letter) != pattern.revealed_count(letter) {
        return false;
    }

    word.bytes()
        .iter()
        .zip(pattern.slots())
        .all(|(&actual, slot)| slot.is_none_or(|revealed| revealed == actual))
}

/// Validate the inputs of a correct-guess filter
fn check_correct_guess(
    letter: u8,
    candidates: &CandidateSet,
    pattern: &Pattern,
) -> Result<u8, StrategyError> {
    let letter = check_letter(letter)?;

    if pattern.len() != candidates.word_length() {
        return Err(StrategyError::LengthMismatch {
            expected: candidates.word_length(),
            found: pattern.len(),
        });
    }

    if pattern.revealed_count(letter) == 0 {
        return Err(StrategyError::LetterNotRevealed(letter as char));
    }

    Ok(letter)
}

/// Remove every candidate inconsistent with a correct guess of `letter`
///
/// Returns the number of words removed.
///
/// # Errors
/// Fails without touching `candidates` if `letter` is not `a..=z`, if the
/// pattern length differs from the word length, or if the pattern does not
/// reveal `letter` anywhere.
///
/// # Examples
/// ```
/// use hangman_solver::core::Pattern;
/// use hangman_solver::solver::{CandidateSet, filter};
///
/// let mut set = CandidateSet::from_strs(6, &["banana", "bandit", "cabana"]);
/// let pattern = Pattern::from_str("-A-A-A").unwrap();
///
/// let removed = filter::apply_correct_guess(b'a', &mut set, &pattern).unwrap();
/// assert_eq!(removed, 1);
/// assert!(set.contains("banana"));
/// assert!(set.contains("cabana"));
/// assert!(!set.contains("bandit"));
/// ```
pub fn apply_correct_guess(
    letter: u8,
    candidates: &mut CandidateSet,
    pattern: &Pattern,
) -> Result<usize, StrategyError> {
    let letter = check_correct_guess(letter, candidates, pattern)?;

    let removed =
        candidates.retain(|word| is_consistent_with_correct_guess(word, letter, pattern));

    debug!(
        letter = %(letter as char),
        removed,
        remaining = candidates.len(),
        "removing words (correct guess)"
    );
    trace!("possible words set is {candidates}");

    Ok(removed)
}

/// The candidates that would survive a correct guess of `letter`
///
/// # Errors
/// Same conditions as [`apply_correct_guess`].
pub fn simulate_correct_guess(
    letter: u8,
    candidates: &CandidateSet,
    pattern: &Pattern,
) -> Result<CandidateSet, StrategyError> {
    let letter = check_correct_guess(letter, candidates, pattern)?;
    Ok(candidates.filtered(|word| is_consistent_with_correct_guess(word, letter, pattern)))
}

/// Remove every candidate containing `letter`
///
/// Returns the number of words removed.
///
/// # Errors
/// Fails if `letter` is not `a..=z`.
pub fn apply_wrong_guess(letter: u8, candidates: &mut CandidateSet) -> Result<usize, StrategyError> {
    let letter = check_letter(letter)?;

    let removed = candidates.retain(|word| !word.has_letter(letter));

    debug!(
        letter = %(letter as char),
        removed,
        remaining = candidates.len(),
        "removing words (wrong guess)"
    );
    trace!("possible words set is {candidates}");

    Ok(removed)
}

/// The candidates that would survive a wrong guess of `letter`
///
/// # Errors
/// Fails if `letter` is not `a..=z`.
pub fn simulate_wrong_guess(
    letter: u8,
    candidates: &CandidateSet,
) -> Result<CandidateSet, StrategyError> {
    let letter = check_letter(letter)?;
    Ok(candidates.filtered(|word| !word.has_letter(letter)))
}
