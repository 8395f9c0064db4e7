//! Display functions for command results

use super::formatters::{colored_score, create_progress_bar, spaced_pattern};
use crate::commands::{BatchStatistics, GameOutcome, GameReport, StumperReport};
use crate::core::Guess;
use colored::Colorize;

/// Print one game turn by turn
pub fn print_game_report(report: &GameReport, max_wrong_guesses: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        report.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in report.turns.iter().enumerate() {
        let guess = match &turn.guess {
            Guess::Letter(letter) => (letter.to_ascii_uppercase() as char).to_string(),
            Guess::Word(word) => word.clone(),
        };
        let mark = if turn.correct {
            "✓".green()
        } else {
            "✗".red()
        };

        println!(
            "\nTurn {:2}: {} {}  {}",
            i + 1,
            guess.bold(),
            mark,
            spaced_pattern(&turn.pattern)
        );

        if verbose {
            println!("  Candidates: {}", turn.candidates);
            if let Some(choice) = &turn.choice {
                println!("  Tier:       {}", choice.tier);
                println!("  Reason:     {}", choice.reason);
            }
        }
    }

    println!();
    match &report.outcome {
        GameOutcome::Won => println!(
            "{} score {} ({} wrong)",
            format!("✅ Won in {} guesses,", report.turns.len())
                .green()
                .bold(),
            colored_score(report.score, max_wrong_guesses),
            report.wrong_guesses
        ),
        GameOutcome::Lost => println!(
            "{} score {}",
            format!("❌ Lost after {} guesses,", report.turns.len())
                .red()
                .bold(),
            colored_score(report.score, max_wrong_guesses)
        ),
        GameOutcome::Aborted(err) => println!(
            "{} {}",
            "⚠️  Aborted:".yellow().bold(),
            err.to_string().yellow()
        ),
    }
}

/// Print a compact score table for several games
pub fn print_score_table(reports: &[GameReport], max_wrong_guesses: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAMES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for report in reports {
        println!(
            "  {:<20} {:>5}  {:<8} {}",
            report.secret.to_uppercase(),
            colored_score(report.score, max_wrong_guesses),
            report.outcome_label(),
            report
                .turns
                .last()
                .map(|t| spaced_pattern(&t.pattern))
                .unwrap_or_default()
        );
    }

    let total: i64 = reports.iter().map(|r| i64::from(r.score)).sum();
    if !reports.is_empty() {
        println!(
            "\n  Average score: {}",
            format!("{:.3}", total as f64 / reports.len() as f64)
                .bright_yellow()
                .bold()
        );
    }
}

/// Print batch statistics with formatting
pub fn print_batch_statistics(stats: &BatchStatistics, max_wrong_guesses: usize) {
    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:   {}", stats.total_games);
    let percent = |n: usize| {
        if stats.total_games == 0 {
            0.0
        } else {
            n as f64 / stats.total_games as f64 * 100.0
        }
    };
    println!(
        "  Won:            {} {}",
        stats.won,
        format!("({:.1}%)", percent(stats.won)).green()
    );
    if stats.lost > 0 {
        println!(
            "  Lost:           {} {}",
            stats.lost,
            format!("({:.1}%)", percent(stats.lost)).red()
        );
    }
    if stats.aborted > 0 {
        println!(
            "  Aborted:        {} {}",
            stats.aborted,
            format!("({:.1}%)", percent(stats.aborted)).yellow()
        );
    }
    println!(
        "  Average score:  {}",
        format!("{:.3}", stats.average_score).bright_yellow().bold()
    );
    println!(
        "  Total time:     {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.total_games > 0 {
        println!(
            "  Time per game:  {:.2}ms",
            stats.total_time.as_secs_f64() * 1000.0 / stats.total_games as f64
        );
    }

    println!("\n📈 {}", "Score Distribution".bright_cyan().bold());
    let max_count = stats.score_distribution.values().copied().max().unwrap_or(1);
    for (&score, &count) in &stats.score_distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {:>4}: {} {count:5}",
            colored_score(score, max_wrong_guesses),
            bar.green()
        );
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, score) in stats.worst_words.iter().take(5) {
            println!(
                "  {} (score {})",
                word.yellow(),
                colored_score(*score, max_wrong_guesses)
            );
        }
    }

    if !stats.aborted_words.is_empty() {
        println!("\n⚠️  {}", "Aborted Words".yellow().bold());
        for word in stats.aborted_words.iter().take(10) {
            println!("  {}", word.to_uppercase());
        }
    }
}

/// Print the outcome of stumper discovery
pub fn print_stumper_report(report: &StumperReport, saved_to: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STUMPER DISCOVERY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Words played:   {}", report.statistics.total_games);
    println!(
        "  Stumpers found: {}",
        report.stumpers.len().to_string().red().bold()
    );
    for word in report.stumpers.iter().take(20) {
        println!("    {}", word.to_uppercase());
    }
    if report.stumpers.len() > 20 {
        println!("    … and {} more", report.stumpers.len() - 20);
    }
    if let Some(path) = saved_to {
        println!("\n  Saved to {}", path.bright_green());
    }
}
