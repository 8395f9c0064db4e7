//! The working set of candidate words for one game

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Words of a single length that are still consistent with the evidence
///
/// Words keep their dictionary order, which makes iteration (and therefore
/// every heuristic built on top of it) deterministic. The set only ever
/// shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    word_length: usize,
    words: Vec<Word>,
}

impl CandidateSet {
    /// Build a candidate set, keeping only words of `word_length`
    ///
    /// Repeated words keep their first position only.
    #[must_use]
    pub fn new(word_length: usize, words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| w.len() == word_length && seen.insert(w.text().to_owned()))
            .collect();
        Self { word_length, words }
    }

    /// Parse a list of strings into a candidate set, skipping invalid words
    ///
    /// Mostly useful for tests and examples.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::CandidateSet;
    ///
    /// let set = CandidateSet::from_strs(3, &["cat", "car", "Cape", "c4t"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn from_strs(word_length: usize, words: &[&str]) -> Self {
        Self::new(word_length, words.iter().filter_map(|&w| Word::new(w).ok()))
    }

    /// Length of every word in the set
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The only remaining word, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }

    /// Remove one word by text, returning true if it was present
    pub fn remove(&mut self, text: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|w| !w.text().eq_ignore_ascii_case(text));
        self.words.len() != before
    }

    /// Keep only words matching `keep`, returning the number removed
    pub fn retain(&mut self, keep: impl FnMut(&Word) -> bool) -> usize {
        let before = self.words.len();
        self.words.retain(keep);
        before - self.words.len()
    }

    /// A new set holding the words that match `keep`
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(&Word) -> bool) -> Self {
        Self {
            word_length: self.word_length,
            words: self.words.iter().filter(|&w| keep(w)).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", word.to_uppercase())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_only_matching_length() {
        let set = CandidateSet::from_strs(3, &["cat", "cart", "dog"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.word_length(), 3);
        assert!(set.contains("cat"));
        assert!(!set.contains("cart"));
    }

    #[test]
    fn repeated_words_are_kept_once() {
        let set = CandidateSet::from_strs(3, &["cat", "dog", "cat", "CAT", "Dog"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "[CAT, DOG]");
    }

    #[test]
    fn repeated_word_is_still_single() {
        let set = CandidateSet::from_strs(3, &["cat", "Cat"]);
        assert_eq!(set.single().map(Word::text), Some("cat"));
    }

    #[test]
    fn remove_single_word() {
        let mut set = CandidateSet::from_strs(3, &["cat", "dog"]);
        assert!(set.remove("CAT"));
        assert!(!set.remove("cat"));
        assert_eq!(set.single().map(Word::text), Some("dog"));
    }

    #[test]
    fn retain_reports_removed() {
        let mut set = CandidateSet::from_strs(3, &["cat", "cap", "dog"]);
        let removed = set.retain(|w| w.has_letter(b'c'));
        assert_eq!(removed, 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn filtered_leaves_original_untouched() {
        let set = CandidateSet::from_strs(3, &["cat", "cap", "dog"]);
        let subset = set.filtered(|w| w.has_letter(b'o'));
        assert_eq!(subset.len(), 1);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn display_uppercase() {
        let set = CandidateSet::from_strs(3, &["cat", "dog"]);
        assert_eq!(set.to_string(), "[CAT, DOG]");
    }
}
