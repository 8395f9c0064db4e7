//! Per-length dictionary cache
//!
//! Games with secrets of the same length start from the same candidate
//! words and the same letter counts. The cache builds that starting point
//! once per length, on first request, and hands out shared references after
//! that. Entries are never invalidated.

use crate::core::{LetterSet, Word};
use crate::solver::{CandidateSet, FrequencyTable};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::info;

/// Dictionary words of one length with their letter counts
#[derive(Debug)]
pub struct LengthEntry {
    candidates: CandidateSet,
    frequencies: FrequencyTable,
}

impl LengthEntry {
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Letter counts with nothing excluded
    #[inline]
    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }
}

type Slot = Arc<OnceLock<Arc<LengthEntry>>>;

/// Process-wide dictionary with lazily built per-length entries
///
/// Safe to share between threads: each length is built by exactly one
/// caller while the others wait on that length's slot.
#[derive(Debug, Default)]
pub struct DictionaryCache {
    dictionary: Vec<Word>,
    slots: Mutex<FxHashMap<usize, Slot>>,
}

impl DictionaryCache {
    /// Wrap a dictionary; nothing is computed until a length is requested
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        Self {
            dictionary,
            slots: Mutex::new(FxHashMap::default()),
        }
    }

    /// Every dictionary word, in file order
    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Candidate words of `length` and their letter counts
    ///
    /// The first call for a length scans the dictionary; later calls return
    /// the same shared entry.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::wordlists::{DictionaryCache, loader::words_from_slice};
    /// use std::sync::Arc;
    ///
    /// let cache = DictionaryCache::new(words_from_slice(&["cat", "dog", "bird"]));
    /// let three = cache.words_of_length(3);
    ///
    /// assert_eq!(three.candidates().len(), 2);
    /// assert!(Arc::ptr_eq(&three, &cache.words_of_length(3)));
    /// ```
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Arc<LengthEntry> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(length).or_default())
        };

        Arc::clone(slot.get_or_init(|| Arc::new(self.build(length))))
    }

    /// Lengths built so far, ascending
    #[must_use]
    pub fn cached_lengths(&self) -> Vec<usize> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let mut lengths: Vec<usize> = slots
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(&length, _)| length)
            .collect();
        lengths.sort_unstable();
        lengths
    }

    fn build(&self, length: usize) -> LengthEntry {
        let candidates = CandidateSet::new(length, self.dictionary.iter().cloned());
        let frequencies = FrequencyTable::tally(&candidates, LetterSet::EMPTY);

        info!(
            length,
            words = candidates.len(),
            "cached dictionary words by length"
        );

        LengthEntry {
            candidates,
            frequencies,
        }
    }
}
