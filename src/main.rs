//! Hangman Solver - CLI
//!
//! Plays Hangman against known secrets using candidate pruning, letter
//! frequencies and tiered guess heuristics.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        BatchOptions, GameConfig, find_stumpers, play_game, play_many, run_batch, sample_words,
        save_stumpers,
    },
    core::Word,
    output::{print_batch_statistics, print_game_report, print_score_table, print_stumper_report},
    solver::StumperIndex,
    wordlists::{DictionaryCache, loader::load_from_file},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver using candidate pruning, letter frequencies and tiered guess heuristics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line
    #[arg(short = 'f', long, global = true, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Stumper file, one word per line (ignored if missing)
    #[arg(short, long, global = true, default_value = "stumpers.txt")]
    stumpers: PathBuf,

    /// Wrong guesses allowed before a game is lost
    #[arg(long, global = true, default_value_t = 5)]
    max_wrong: usize,

    /// Verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one or more secret words
    Play {
        /// Secret words; a single word prints a turn-by-turn trace
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Play every word in a file, or a random dictionary sample
    Batch {
        /// Word file, one word per line
        file: Option<PathBuf>,

        /// Play this many random dictionary words instead of a file
        #[arg(short = 'n', long, conflicts_with = "file")]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, requires = "sample")]
        seed: Option<u64>,

        /// Play games in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Play every dictionary word and save the ones lost
    FindStumpers {
        /// Output file (default: the --stumpers path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Play games in parallel
        #[arg(short, long)]
        parallel: bool,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_dictionary(path: &Path) -> Result<DictionaryCache> {
    let words = load_from_file(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;
    if words.is_empty() {
        bail!("dictionary {} has no usable words", path.display());
    }

    info!(path = %path.display(), words = words.len(), "dictionary loaded");
    Ok(DictionaryCache::new(words))
}

fn load_stumpers(path: &Path) -> Result<StumperIndex> {
    if !path.exists() {
        warn!(path = %path.display(), "no stumper file, continuing without stumpers");
        return Ok(StumperIndex::empty());
    }

    let words = load_from_file(path)
        .with_context(|| format!("failed to read stumpers {}", path.display()))?;
    info!(path = %path.display(), words = words.len(), "stumpers loaded");
    Ok(StumperIndex::from_words(words))
}

fn parse_secrets(words: &[String]) -> Result<Vec<Word>> {
    words
        .iter()
        .map(|w| Word::new(w).with_context(|| format!("invalid secret word {w:?}")))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cache = load_dictionary(&cli.dictionary)?;
    let config = GameConfig::new(cli.max_wrong);

    match cli.command {
        Commands::Play { words } => {
            let stumpers = Arc::new(load_stumpers(&cli.stumpers)?);
            let secrets = parse_secrets(&words)?;
            run_play_command(&secrets, &cache, &stumpers, &config, cli.verbose > 0);
        }
        Commands::Batch {
            file,
            sample,
            seed,
            parallel,
        } => {
            let stumpers = Arc::new(load_stumpers(&cli.stumpers)?);
            let secrets = match (file, sample) {
                (Some(path), _) => load_from_file(&path)
                    .with_context(|| format!("failed to read word file {}", path.display()))?,
                (None, Some(count)) => sample_words(cache.dictionary(), count, seed),
                (None, None) => cache.dictionary().to_vec(),
            };
            let options = BatchOptions {
                parallel,
                show_progress: true,
            };

            println!("🎯 Playing {} words...", secrets.len());
            let stats = run_batch(&secrets, &cache, &stumpers, &config, options);
            print_batch_statistics(&stats, config.max_wrong_guesses);
        }
        Commands::FindStumpers { output, parallel } => {
            let output = output.unwrap_or(cli.stumpers);
            let options = BatchOptions {
                parallel,
                show_progress: true,
            };

            println!("🔎 Playing all {} dictionary words...", cache.len());
            let report = find_stumpers(&cache, &config, options);
            save_stumpers(&output, &report)
                .with_context(|| format!("failed to write stumpers {}", output.display()))?;
            let saved_to = output.display().to_string();
            print_stumper_report(&report, Some(saved_to.as_str()));
        }
    }

    Ok(())
}

fn run_play_command(
    secrets: &[Word],
    cache: &DictionaryCache,
    stumpers: &Arc<StumperIndex>,
    config: &GameConfig,
    verbose: bool,
) {
    if let [secret] = secrets {
        let report = play_game(secret, cache, stumpers, config);
        print_game_report(&report, config.max_wrong_guesses, verbose);
    } else {
        let reports = play_many(secrets, cache, stumpers, config);
        print_score_table(&reports, config.max_wrong_guesses);
    }
}
