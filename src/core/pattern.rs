//! Hangman evidence pattern
//!
//! The partially revealed secret: one slot per position, holding either the
//! revealed letter or the mystery marker `-`. Rendered in uppercase, e.g.
//! `-A--T-A-`.

use super::letters::is_letter;
use std::fmt;

/// Marker used for positions whose letter is not yet revealed
pub const MYSTERY_LETTER: char = '-';

/// A partially revealed secret word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

impl Pattern {
    /// A pattern of `length` unrevealed positions
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Build a pattern from explicit slots
    ///
    /// Letters are normalized to lowercase.
    #[must_use]
    pub fn from_slots(slots: Vec<Option<u8>>) -> Self {
        Self {
            slots: slots
                .into_iter()
                .map(|slot| slot.map(|b| b.to_ascii_lowercase()))
                .collect(),
        }
    }

    /// Parse a pattern string like `"-A--T-A-"` (case-insensitive)
    ///
    /// Accepts `-` or `_` for unknown positions and ASCII letters for
    /// revealed ones.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::from_str("-a--T-A-").unwrap();
    /// assert_eq!(pattern.len(), 8);
    /// assert_eq!(pattern.revealed_count(b'a'), 2);
    /// assert_eq!(pattern.to_string(), "-A--T-A-");
    ///
    /// assert!(Pattern::from_str("c?t").is_none());
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut slots = Vec::with_capacity(s.len());

        for ch in s.chars() {
            let slot = match ch {
                '-' | '_' => None,
                c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase() as u8),
                _ => return None,
            };
            slots.push(slot);
        }

        Some(Self { slots })
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The revealed letter at `position`, if any
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    /// All slots in order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// How many positions reveal `letter`
    #[must_use]
    pub fn revealed_count(&self, letter: u8) -> usize {
        self.slots.iter().filter(|&&slot| slot == Some(letter)).count()
    }

    /// How many positions are still unknown
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// True once every position is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Reveal `letter` at every position where `secret` has it
    ///
    /// Returns the number of newly revealed positions.
    pub fn reveal(&mut self, secret: &[u8], letter: u8) -> usize {
        let mut revealed = 0;
        for (slot, &actual) in self.slots.iter_mut().zip(secret) {
            if actual == letter && slot.is_none() {
                *slot = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }

    /// Reveal every position of `secret`
    pub fn reveal_all(&mut self, secret: &[u8]) {
        for (slot, &actual) in self.slots.iter_mut().zip(secret) {
            if is_letter(actual) {
                *slot = Some(actual);
            }
        }
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{}", letter.to_ascii_uppercase() as char)?,
                None => write!(f, "{MYSTERY_LETTER}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_pattern_has_no_reveals() {
        let pattern = Pattern::hidden(4);
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.unknown_count(), 4);
        assert!(!pattern.is_complete());
        assert_eq!(pattern.to_string(), "----");
    }

    #[test]
    fn from_str_accepts_both_markers() {
        let p1 = Pattern::from_str("C-T").unwrap();
        let p2 = Pattern::from_str("c_t").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.slot(0), Some(b'c'));
        assert_eq!(p1.slot(1), None);
        assert_eq!(p1.slot(9), None);
    }

    #[test]
    fn from_str_rejects_invalid() {
        assert!(Pattern::from_str("c t").is_none());
        assert!(Pattern::from_str("c1t").is_none());
        assert!("c*t".parse::<Pattern>().is_err());
    }

    #[test]
    fn reveal_marks_every_occurrence() {
        let mut pattern = Pattern::hidden(7);
        let revealed = pattern.reveal(b"factual", b'a');
        assert_eq!(revealed, 2);
        assert_eq!(pattern.to_string(), "-A---A-");
        assert_eq!(pattern.revealed_count(b'a'), 2);

        // Revealing again changes nothing
        assert_eq!(pattern.reveal(b"factual", b'a'), 0);
        assert_eq!(pattern.reveal(b"factual", b'z'), 0);
    }

    #[test]
    fn reveal_all_completes_pattern() {
        let mut pattern = Pattern::hidden(3);
        pattern.reveal_all(b"cat");
        assert!(pattern.is_complete());
        assert_eq!(pattern.to_string(), "CAT");
    }

    #[test]
    fn from_slots_lowercases() {
        let pattern = Pattern::from_slots(vec![Some(b'C'), None]);
        assert_eq!(pattern.slot(0), Some(b'c'));
        assert_eq!(pattern.to_string(), "C-");
    }
}
