//! Historically hard words
//!
//! A stumper is a word the solver has lost on before. When some of the
//! remaining candidates are stumpers, the selector leans toward the letter
//! that is most common among them. The index never removes candidates.

use super::candidates::CandidateSet;
use super::frequency::FrequencyTable;
use crate::core::{LetterSet, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Stumper words grouped by length
///
/// Built once per process and shared read-only between games.
#[derive(Debug, Clone, Default)]
pub struct StumperIndex {
    by_length: FxHashMap<usize, FxHashSet<Word>>,
    total: usize,
}

impl StumperIndex {
    /// An index with no stumpers; it never suggests a letter
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from a list of words (duplicates collapse)
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::solver::StumperIndex;
    ///
    /// let index = StumperIndex::from_words(
    ///     ["jazz", "fuzz", "jazz", "ox"].iter().filter_map(|w| Word::new(w).ok()),
    /// );
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.count_of_length(4), 2);
    /// ```
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut by_length: FxHashMap<usize, FxHashSet<Word>> = FxHashMap::default();
        for word in words {
            by_length.entry(word.len()).or_default().insert(word);
        }
        let total = by_length.values().map(FxHashSet::len).sum();

        Self { by_length, total }
    }

    /// Number of distinct stumper words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, FxHashSet::len)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.by_length
            .get(&word.len())
            .is_some_and(|set| set.contains(word))
    }

    /// The candidates that are also stumpers, in candidate order
    #[must_use]
    pub fn candidate_stumpers(&self, candidates: &CandidateSet) -> CandidateSet {
        match self.by_length.get(&candidates.word_length()) {
            Some(stumpers) => candidates.filtered(|word| stumpers.contains(word)),
            None => CandidateSet::new(candidates.word_length(), std::iter::empty()),
        }
    }

    /// Most frequent unguessed letter among the stumper candidates
    ///
    /// Returns `None` when no candidate is a stumper or every letter they
    /// hold is already in `excluded`.
    #[must_use]
    pub fn suggest_letter(&self, candidates: &CandidateSet, excluded: LetterSet) -> Option<u8> {
        let stumpers = self.candidate_stumpers(candidates);
        if stumpers.is_empty() {
            return None;
        }

        let suggestion = FrequencyTable::tally(&stumpers, excluded).most_frequent();
        debug!(
            stumpers = stumpers.len(),
            suggestion = ?suggestion.map(char::from),
            "stumper letter"
        );
        suggestion
    }
}
