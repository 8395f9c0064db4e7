//! Letter helpers and a compact set of letters
//!
//! Letters are lowercase ASCII bytes `b'a'..=b'z'`. A `LetterSet` stores
//! up to 26 of them as bits of a single `u32`.

use std::fmt;

/// Number of letters in the supported alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Returns true if `letter` is a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn is_letter(letter: u8) -> bool {
    letter.is_ascii_lowercase()
}

/// Index of a letter in the alphabet (`a` = 0)
///
/// # Panics
/// Panics in debug mode if `letter` is not lowercase ASCII
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(is_letter(letter), "letter must be lowercase ASCII");
    (letter - b'a') as usize
}

/// Letter at an alphabet index (0 = `a`)
#[inline]
#[must_use]
pub const fn letter_at(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_SIZE);
    b'a' + index as u8
}

/// A set of lowercase letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build the set of distinct letters in `word`, ignoring non-letters
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        word.bytes().filter(|&b| is_letter(b)).collect()
    }

    /// Add a letter, returning true if it was not present
    ///
    /// Non-letters are ignored.
    pub fn insert(&mut self, letter: u8) -> bool {
        if !is_letter(letter) {
            return false;
        }
        let bit = 1 << letter_index(letter);
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        is_letter(letter) && self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(letter_at)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", letter.to_ascii_uppercase() as char)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_set_from_word_dedups() {
        let set = LetterSet::from_word("letter");
        assert_eq!(set.len(), 4);
        assert!(set.contains(b'l'));
        assert!(set.contains(b't'));
        assert!(!set.contains(b'a'));
    }

    #[test]
    fn insert_reports_new_letters() {
        let mut set = LetterSet::new();
        assert!(set.insert(b'q'));
        assert!(!set.insert(b'q'));
        assert!(!set.insert(b'Q'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iter_is_alphabetical() {
        let set = LetterSet::from_word("zebra");
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz".to_vec());
    }

    #[test]
    fn difference_removes_letters() {
        let all = LetterSet::from_word("abc");
        let some = LetterSet::from_word("b");
        let diff = all.difference(some);
        assert_eq!(diff.iter().collect::<Vec<_>>(), b"ac".to_vec());
        assert_eq!(diff.union(some), all);
    }

    #[test]
    fn display_uppercase() {
        assert_eq!(LetterSet::from_word("ca").to_string(), "[A, C]");
        assert_eq!(LetterSet::EMPTY.to_string(), "[]");
    }
}
