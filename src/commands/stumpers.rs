//! Stumper discovery
//!
//! Plays every dictionary word without stumper bias and keeps the words the
//! strategy loses on. The result feeds the `StumperIndex` of later runs.

use super::batch::{BatchOptions, BatchStatistics, run_batch};
use super::play::GameConfig;
use crate::core::Word;
use crate::solver::StumperIndex;
use crate::wordlists::DictionaryCache;
use crate::wordlists::loader::save_words;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Words lost during discovery, plus the batch they came from
#[derive(Debug, Clone)]
pub struct StumperReport {
    pub stumpers: Vec<Word>,
    pub statistics: BatchStatistics,
}

/// Play every dictionary word and collect the lost ones
///
/// Games run with an empty stumper index so earlier discoveries do not
/// change which words count as hard.
#[must_use]
pub fn find_stumpers(
    cache: &DictionaryCache,
    config: &GameConfig,
    options: BatchOptions,
) -> StumperReport {
    let no_stumpers = Arc::new(StumperIndex::empty());
    let dictionary = cache.dictionary();
    let statistics = run_batch(dictionary, cache, &no_stumpers, config, options);

    // Each lost word once, even if the dictionary repeats it
    let mut lost: FxHashSet<&str> = statistics.lost_words.iter().map(String::as_str).collect();
    let stumpers: Vec<Word> = dictionary
        .iter()
        .filter(|word| lost.remove(word.text()))
        .cloned()
        .collect();

    info!(stumpers = stumpers.len(), "stumper discovery finished");
    StumperReport {
        stumpers,
        statistics,
    }
}

/// Write stumpers one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn save_stumpers<P: AsRef<Path>>(path: P, report: &StumperReport) -> io::Result<usize> {
    save_words(path, &report.stumpers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::{load_from_file, words_from_slice};

    #[test]
    fn nothing_lost_with_generous_budget() {
        let cache = DictionaryCache::new(words_from_slice(&["cat", "car", "dog"]));
        let report = find_stumpers(&cache, &GameConfig::new(26), BatchOptions::default());

        assert!(report.stumpers.is_empty());
        assert_eq!(report.statistics.total_games, 3);
    }

    #[test]
    fn lost_words_become_stumpers() {
        // Disjoint letters with no wrong guesses allowed: some games are lost
        let words = ["ab", "cd", "ef", "gh", "ij", "kl"];
        let cache = DictionaryCache::new(words_from_slice(&words));
        let report = find_stumpers(&cache, &GameConfig::new(0), BatchOptions::default());

        assert!(!report.stumpers.is_empty());
        assert_eq!(report.stumpers.len(), report.statistics.lost);
        for stumper in &report.stumpers {
            assert!(report.statistics.lost_words.contains(&stumper.text().to_string()));
        }
    }

    #[test]
    fn stumpers_keep_dictionary_order() {
        let words = ["kl", "ij", "gh", "ef", "cd", "ab"];
        let cache = DictionaryCache::new(words_from_slice(&words));
        let report = find_stumpers(&cache, &GameConfig::new(0), BatchOptions::default());

        let positions: Vec<usize> = report
            .stumpers
            .iter()
            .filter_map(|s| words.iter().position(|w| *w == s.text()))
            .collect();
        assert_eq!(positions.len(), report.stumpers.len());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn saved_stumpers_load_back() {
        let words = ["ab", "cd", "ef", "gh", "ij", "kl"];
        let cache = DictionaryCache::new(words_from_slice(&words));
        let report = find_stumpers(&cache, &GameConfig::new(0), BatchOptions::default());

        let path = std::env::temp_dir().join(format!(
            "hangman_solver_stumpers_{}.txt",
            std::process::id()
        ));
        let written = save_stumpers(&path, &report).unwrap();
        let loaded = load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, report.stumpers.len());
        assert_eq!(loaded, report.stumpers);
    }
}
