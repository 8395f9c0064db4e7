//! Letter presence counts over a word set
//!
//! Each word contributes at most one to a letter's count: `banana` adds one
//! `a`, not three. Letters excluded at tally time (already guessed) never
//! get an entry. The ranking orders letters by count, highest first, with
//! ties broken alphabetically.

use crate::core::Word;
use crate::core::letters::{ALPHABET_SIZE, LetterSet, letter_at, letter_index};
use std::fmt;

/// Letter presence counts plus the ranked frequency queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_SIZE],
    ranked: Vec<u8>,
}

impl FrequencyTable {
    /// Count, for each letter, how many words contain it
    ///
    /// Letters in `excluded` are skipped entirely.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{LetterSet, Word};
    /// use hangman_solver::solver::FrequencyTable;
    ///
    /// let words: Vec<Word> = ["banana", "bandit"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// let table = FrequencyTable::tally(&words, LetterSet::from_word("b"));
    ///
    /// assert_eq!(table.count(b'a'), Some(2));
    /// assert_eq!(table.count(b't'), Some(1));
    /// assert_eq!(table.count(b'b'), None);
    /// assert_eq!(table.ranked()[..2], [b'a', b'n']);
    /// ```
    #[must_use]
    pub fn tally<'a>(words: impl IntoIterator<Item = &'a Word>, excluded: LetterSet) -> Self {
        let mut counts = [0; ALPHABET_SIZE];

        for word in words {
            for letter in word.letters().difference(excluded).iter() {
                counts[letter_index(letter)] += 1;
            }
        }

        Self::from_counts(counts)
    }

    fn from_counts(counts: [usize; ALPHABET_SIZE]) -> Self {
        let mut ranked: Vec<u8> = (0..ALPHABET_SIZE)
            .filter(|&i| counts[i] > 0)
            .map(letter_at)
            .collect();

        // Stable sort over alphabetical input keeps ties alphabetical
        ranked.sort_by(|&a, &b| counts[letter_index(b)].cmp(&counts[letter_index(a)]));

        Self { counts, ranked }
    }

    /// Number of words containing `letter`, or `None` if it has no entry
    #[must_use]
    pub fn count(&self, letter: u8) -> Option<usize> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        match self.counts[letter_index(letter)] {
            0 => None,
            n => Some(n),
        }
    }

    /// Letters from most to least frequent
    #[inline]
    #[must_use]
    pub fn ranked(&self) -> &[u8] {
        &self.ranked
    }

    /// The most frequent letter
    #[must_use]
    pub fn most_frequent(&self) -> Option<u8> {
        self.ranked.first().copied()
    }

    /// The `n` most frequent letters (fewer if the table is smaller)
    #[must_use]
    pub fn top(&self, n: usize) -> &[u8] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Letters that have an entry
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.ranked.iter().copied().collect()
    }

    /// Iterate over `(letter, count)` in rank order
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.ranked
            .iter()
            .map(|&letter| (letter, self.counts[letter_index(letter)]))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// The same counts without the letters in `excluded`
    #[must_use]
    pub fn without(&self, excluded: LetterSet) -> Self {
        let mut counts = self.counts;
        for letter in excluded.iter() {
            counts[letter_index(letter)] = 0;
        }
        Self::from_counts(counts)
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (letter, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={count}", letter.to_ascii_uppercase() as char)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn counts_presence_not_occurrences() {
        let table = FrequencyTable::tally(&words(&["banana", "apple"]), LetterSet::EMPTY);

        assert_eq!(table.count(b'a'), Some(2));
        assert_eq!(table.count(b'n'), Some(1));
        assert_eq!(table.count(b'p'), Some(1));
        assert_eq!(table.count(b'z'), None);
    }

    #[test]
    fn excluded_letters_have_no_entry() {
        let list = words(&["cat", "car", "can", "cap"]);
        let excluded = LetterSet::from_word("ca");
        let table = FrequencyTable::tally(&list, excluded);

        for letter in excluded.iter() {
            assert_eq!(table.count(letter), None);
            assert!(!table.ranked().contains(&letter));
        }
        assert_eq!(table.ranked(), b"nprt");
    }

    #[test]
    fn ranking_is_by_count_then_alphabetical() {
        let table = FrequencyTable::tally(&words(&["cat", "car", "can", "cap"]), LetterSet::EMPTY);

        assert_eq!(table.ranked(), b"acnprt");
        assert_eq!(table.most_frequent(), Some(b'a'));
        assert_eq!(table.top(2), b"ac");
        assert_eq!(table.top(10).len(), 6);
    }

    #[test]
    fn ranking_is_deterministic() {
        let list = words(&["stone", "store", "shore", "spore", "snore"]);
        let first = FrequencyTable::tally(&list, LetterSet::EMPTY);
        let second = FrequencyTable::tally(list.iter().rev(), LetterSet::EMPTY);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_is_empty_table() {
        let table = FrequencyTable::tally(&Vec::<Word>::new(), LetterSet::EMPTY);
        assert!(table.is_empty());
        assert_eq!(table.most_frequent(), None);
        assert!(table.letters().is_empty());
    }

    #[test]
    fn without_matches_retally() {
        let list = words(&["stone", "store", "shore"]);
        let excluded = LetterSet::from_word("so");
        let full = FrequencyTable::tally(&list, LetterSet::EMPTY);

        assert_eq!(full.without(excluded), FrequencyTable::tally(&list, excluded));
    }

    #[test]
    fn display_lists_ranked_counts() {
        let table = FrequencyTable::tally(&words(&["ab", "ac"]), LetterSet::EMPTY);
        assert_eq!(table.to_string(), "{A=2, B=1, C=1}");
    }
}
