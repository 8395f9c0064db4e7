//! Formatting utilities for terminal output

use crate::core::Pattern;
use colored::{ColoredString, Colorize};

/// Render a pattern with spaced letters: `C - T`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .to_string()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Color a score: green for low, yellow for middling, red for lost or aborted
#[must_use]
pub fn colored_score(score: i32, max_wrong_guesses: usize) -> ColoredString {
    let text = score.to_string();
    let budget = i32::try_from(max_wrong_guesses).unwrap_or(i32::MAX);

    if score < 0 {
        text.bright_black()
    } else if score <= budget + 3 {
        text.green()
    } else if score < crate::core::game::LOST_SCORE {
        text.yellow()
    } else {
        text.red()
    }
}
