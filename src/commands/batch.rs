//! Batch play - strategy evaluation over many secrets
//!
//! Plays every word in a list (or a random sample of the dictionary) and
//! aggregates scores, outcomes and timing.

use super::play::{GameConfig, GameReport, play_game};
use crate::core::Word;
use crate::solver::StumperIndex;
use crate::wordlists::DictionaryCache;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// How a batch is run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Play games on the rayon thread pool
    pub parallel: bool,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

/// Statistics from a batch of games
#[derive(Debug, Clone)]
pub struct BatchStatistics {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub aborted: usize,
    /// Mean over every game, aborted ones included
    pub average_score: f64,
    pub total_time: Duration,
    pub score_distribution: BTreeMap<i32, usize>,
    /// Highest-scoring finished games, worst first
    pub worst_words: Vec<(String, i32)>,
    pub lost_words: Vec<String>,
    pub aborted_words: Vec<String>,
}

/// Pick `count` distinct dictionary words at random
///
/// The same seed always yields the same sample.
///
/// # Examples
/// ```
/// use hangman_solver::commands::sample_words;
/// use hangman_solver::wordlists::loader::words_from_slice;
///
/// let dictionary = words_from_slice(&["cat", "dog", "bird", "fish", "frog"]);
/// let sample = sample_words(&dictionary, 3, Some(7));
///
/// assert_eq!(sample.len(), 3);
/// assert_eq!(sample, sample_words(&dictionary, 3, Some(7)));
/// ```
#[must_use]
pub fn sample_words(dictionary: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    dictionary
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Play every word in `secrets`
#[must_use]
pub fn run_batch(
    secrets: &[Word],
    cache: &DictionaryCache,
    stumpers: &Arc<StumperIndex>,
    config: &GameConfig,
    options: BatchOptions,
) -> BatchStatistics {
    info!(
        games = secrets.len(),
        parallel = options.parallel,
        "starting batch"
    );

    let pb = if options.show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let play = |secret: &Word| {
        let report = play_game(secret, cache, stumpers, config);
        pb.inc(1);
        report
    };

    let reports: Vec<GameReport> = if options.parallel {
        secrets.par_iter().map(play).collect()
    } else {
        secrets.iter().map(play).collect()
    };

    pb.finish_with_message("Complete!");

    let stats = summarize(&reports, start.elapsed());
    info!(
        games = stats.total_games,
        won = stats.won,
        lost = stats.lost,
        aborted = stats.aborted,
        average_score = stats.average_score,
        "batch finished"
    );
    stats
}

/// Aggregate game reports
#[must_use]
pub fn summarize(reports: &[GameReport], total_time: Duration) -> BatchStatistics {
    let won = reports.iter().filter(|r| r.is_won()).count();
    let lost = reports.iter().filter(|r| r.is_lost()).count();
    let aborted = reports.iter().filter(|r| r.is_aborted()).count();

    let total_score: i64 = reports.iter().map(|r| i64::from(r.score)).sum();
    let average_score = if reports.is_empty() {
        0.0
    } else {
        total_score as f64 / reports.len() as f64
    };

    let mut score_distribution = BTreeMap::new();
    for report in reports {
        *score_distribution.entry(report.score).or_insert(0) += 1;
    }

    let mut worst_words: Vec<(String, i32)> = reports
        .iter()
        .filter(|r| !r.is_aborted())
        .map(|r| (r.secret.to_uppercase(), r.score))
        .collect();
    worst_words.sort_by_key(|(_, score)| std::cmp::Reverse(*score));
    worst_words.truncate(10);

    let words_where = |keep: fn(&GameReport) -> bool| {
        reports
            .iter()
            .filter(|&r| keep(r))
            .map(|r| r.secret.text().to_string())
            .collect::<Vec<_>>()
    };

    BatchStatistics {
        total_games: reports.len(),
        won,
        lost,
        aborted,
        average_score,
        total_time,
        score_distribution,
        worst_words,
        lost_words: words_where(GameReport::is_lost),
        aborted_words: words_where(GameReport::is_aborted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::play::ERROR_SCORE;
    use crate::wordlists::loader::words_from_slice;

    const DICTIONARY: &[&str] = &[
        "cat", "car", "can", "cap", "cot", "cut", "dog", "dot", "dig", "bird", "bard", "bead",
    ];

    fn setup() -> (DictionaryCache, Arc<StumperIndex>) {
        (
            DictionaryCache::new(words_from_slice(DICTIONARY)),
            Arc::new(StumperIndex::empty()),
        )
    }

    #[test]
    fn batch_counts_every_game() {
        let (cache, stumpers) = setup();
        let secrets = words_from_slice(&["cat", "dog", "bird", "zebra"]);

        let stats = run_batch(
            &secrets,
            &cache,
            &stumpers,
            &GameConfig::default(),
            BatchOptions::default(),
        );

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.won + stats.lost + stats.aborted, 4);
        assert_eq!(stats.aborted, 1);
        assert_eq!(stats.aborted_words, ["zebra"]);
        assert_eq!(stats.score_distribution.get(&ERROR_SCORE), Some(&1));
        assert!(stats.worst_words.iter().all(|(word, _)| word != "ZEBRA"));
    }

    #[test]
    fn parallel_matches_sequential() {
        let (cache, stumpers) = setup();
        let secrets = words_from_slice(DICTIONARY);
        let config = GameConfig::default();

        let sequential = run_batch(&secrets, &cache, &stumpers, &config, BatchOptions::default());
        let parallel = run_batch(
            &secrets,
            &cache,
            &stumpers,
            &config,
            BatchOptions {
                parallel: true,
                show_progress: false,
            },
        );

        assert_eq!(sequential.score_distribution, parallel.score_distribution);
        assert_eq!(sequential.lost_words, parallel.lost_words);
        assert!((sequential.average_score - parallel.average_score).abs() < f64::EPSILON);
    }

    #[test]
    fn average_includes_every_game() {
        let (cache, stumpers) = setup();
        let secrets = words_from_slice(&["cat", "zebra"]);
        let stats = run_batch(
            &secrets,
            &cache,
            &stumpers,
            &GameConfig::default(),
            BatchOptions::default(),
        );

        let cat_score = *stats
            .score_distribution
            .keys()
            .find(|&&s| s != ERROR_SCORE)
            .unwrap();
        let expected = f64::from(cat_score + ERROR_SCORE) / 2.0;
        assert!((stats.average_score - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_batch() {
        let stats = summarize(&[], Duration::ZERO);
        assert_eq!(stats.total_games, 0);
        assert!(stats.average_score.abs() < f64::EPSILON);
        assert!(stats.worst_words.is_empty());
    }

    #[test]
    fn sample_is_seeded_and_distinct() {
        let dictionary = words_from_slice(DICTIONARY);

        let first = sample_words(&dictionary, 5, Some(42));
        let second = sample_words(&dictionary, 5, Some(42));
        assert_eq!(first, second);

        let mut texts: Vec<&str> = first.iter().map(Word::text).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 5);

        assert_eq!(sample_words(&dictionary, 100, None).len(), DICTIONARY.len());
    }
}
