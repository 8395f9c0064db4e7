//! Outlier score of a word set
//!
//! Measures how far a set's letter distribution strays from ordinary
//! English text. For every letter present in the set, the fraction of words
//! containing it is compared with the reference percentage below; the score
//! is the standard deviation of those differences. Higher means stranger.
//!
//! Smaller sets tend to score higher because fewer letters occur in them.

use super::frequency::FrequencyTable;
use crate::core::letters::{ALPHABET_SIZE, LetterSet, letter_index};
use crate::core::Word;

/// Relative frequency of letters in English text, in percent (`a` first)
pub const ENGLISH_LETTER_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Standard deviation of a word set's letter frequencies from English
///
/// Returns 0.0 for an empty set.
///
/// # Examples
/// ```
/// use hangman_solver::core::Word;
/// use hangman_solver::solver::outlier::outlier_score;
///
/// let odd: Vec<Word> = ["eee"].iter().map(|w| Word::new(w).unwrap()).collect();
/// assert!((outlier_score(&odd) - (12.702 - 1.0)).abs() < 1e-9);
///
/// assert_eq!(outlier_score(&Vec::<Word>::new()), 0.0);
/// ```
#[must_use]
pub fn outlier_score<'a, I>(words: I) -> f64
where
    I: IntoIterator<Item = &'a Word>,
    I::IntoIter: Clone,
{
    let words = words.into_iter();
    let size = words.clone().count();
    if size == 0 {
        return 0.0;
    }

    let table = FrequencyTable::tally(words, LetterSet::EMPTY);
    score_table(&table, size)
}

/// Outlier score from an existing unexcluded tally over `size` words
#[must_use]
pub fn score_table(table: &FrequencyTable, size: usize) -> f64 {
    if size == 0 || table.is_empty() {
        return 0.0;
    }

    let (sum_sq_diff, letters) = table
        .iter()
        .fold((0.0, 0usize), |(sum, n), (letter, count)| {
            let observed = count as f64 / size as f64;
            let reference = ENGLISH_LETTER_FREQUENCIES[letter_index(letter)];
            let diff = (reference - observed).abs();
            (diff.mul_add(diff, sum), n + 1)
        });

    (sum_sq_diff / letters as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn reference_table_is_complete() {
        assert_eq!(ENGLISH_LETTER_FREQUENCIES.len(), 26);
        let total: f64 = ENGLISH_LETTER_FREQUENCIES.iter().sum();
        assert!((total - 100.0).abs() < 0.1);

        let e = ENGLISH_LETTER_FREQUENCIES[letter_index(b'e')];
        assert!(ENGLISH_LETTER_FREQUENCIES.iter().all(|&f| f <= e));
    }

    #[test]
    fn empty_set_scores_zero() {
        assert!(outlier_score(&words(&[])).abs() < f64::EPSILON);
        assert!(score_table(&FrequencyTable::default(), 10).abs() < f64::EPSILON);
    }

    #[test]
    fn single_letter_set_has_defined_score() {
        let score = outlier_score(&words(&["eee", "ee", "eeee"]));
        assert!(score.is_finite());
        assert!((score - 11.702).abs() < 1e-9);
    }

    #[test]
    fn eee_set_is_more_of_an_outlier_than_english_like_set() {
        let odd = words(&["eee", "eeee", "ee"]);
        let english = words(&[
            "the", "of", "and", "to", "in", "is", "you", "that", "it", "he", "was", "for", "on",
            "are", "as", "with", "his", "they", "at", "be", "this", "have", "from", "or", "one",
            "had", "by", "word", "but", "not", "what", "all", "were", "we", "when", "your",
            "can", "said", "there", "use", "an", "each", "which", "she", "do", "how", "their",
        ]);

        assert!(outlier_score(&odd) > outlier_score(&english));
    }

    #[test]
    fn rare_letters_score_differently_from_common_ones() {
        let rare = outlier_score(&words(&["zzz"]));
        let common = outlier_score(&words(&["eee"]));
        // z: |0.074 - 1.0|, e: |12.702 - 1.0|
        assert!((rare - 0.926).abs() < 1e-9);
        assert!(common > rare);
    }

    #[test]
    fn score_is_order_independent() {
        let list = words(&["crane", "slate", "irate"]);
        let forward = outlier_score(&list);
        let backward = outlier_score(list.iter().rev());
        assert!((forward - backward).abs() < 1e-12);
    }
}
