//! Command implementations

pub mod batch;
pub mod play;
pub mod stumpers;

pub use batch::{BatchOptions, BatchStatistics, run_batch, sample_words, summarize};
pub use play::{
    ERROR_SCORE, GameConfig, GameOutcome, GameReport, TurnRecord, play_game, play_many,
};
pub use stumpers::{StumperReport, find_stumpers, save_stumpers};
