//! Word list loading utilities
//!
//! Dictionary and stumper files hold one word per line. Blank lines and
//! entries with non-letters are skipped; words are lowercased.

use crate::core::Word;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);

    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Parse one-word-per-line text
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Cat", "dog", "x-ray"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "cat");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Write words one per line, replacing the file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_words<'a, P: AsRef<Path>>(
    path: P,
    words: impl IntoIterator<Item = &'a Word>,
) -> io::Result<usize> {
    let path = path.as_ref();
    let mut out = BufWriter::new(fs::File::create(path)?);
    let mut written = 0;

    for word in words {
        writeln!(out, "{word}")?;
        written += 1;
    }
    out.flush()?;

    debug!(path = %path.display(), words = written, "saved word list");
    Ok(written)
}
