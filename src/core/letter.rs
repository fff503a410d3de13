//! Board alphabet
//!
//! A `Letter` is one of the 26 lowercase ASCII letters. Anything else is
//! rejected at construction time, so the rest of the crate never has to
//! re-validate characters.

use std::fmt;

/// Number of symbols in the board alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Base point value of each letter, indexed by `Letter::index`
const LETTER_VALUES: [u32; ALPHABET_SIZE] = [
    1, // a
    4, // b
    5, // c
    3, // d
    1, // e
    5, // f
    3, // g
    4, // h
    1, // i
    7, // j
    6, // k
    3, // l
    4, // m
    2, // n
    1, // o
    4, // p
    8, // q
    2, // r
    2, // s
    2, // t
    4, // u
    5, // v
    5, // w
    7, // x
    4, // y
    8, // z
];

/// Error type for characters outside the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterError(pub char);

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "character {:?} is not a board letter (expected a-z)", self.0)
    }
}

impl std::error::Error for LetterError {}

/// A single board letter, stored as a lowercase ASCII byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character
    ///
    /// Uppercase input is folded to lowercase.
    ///
    /// # Errors
    /// Returns `LetterError` if `c` is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('é').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError(c))
        }
    }

    /// Letter for an alphabet index (0 = 'a')
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_SIZE).then(|| Self(b'a' + index as u8))
    }

    /// Position in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Default base point value of this letter
    #[inline]
    #[must_use]
    pub const fn points(self) -> u32 {
        LETTER_VALUES[self.index()]
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_ascii_letter() {
        for c in 'a'..='z' {
            let letter = Letter::new(c).unwrap();
            assert_eq!(letter.as_char(), c);
            assert_eq!(Letter::from_index(letter.index()), Some(letter));
        }
    }

    #[test]
    fn folds_uppercase() {
        assert_eq!(Letter::new('A').unwrap(), Letter::new('a').unwrap());
    }

    #[test]
    fn rejects_non_letters() {
        for c in ['1', ' ', '-', 'ß', '\n'] {
            assert_eq!(Letter::new(c), Err(LetterError(c)));
        }
    }

    #[test]
    fn from_index_out_of_range() {
        assert_eq!(Letter::from_index(26), None);
    }

    #[test]
    fn point_values() {
        let value = |c| Letter::new(c).unwrap().points();
        assert_eq!(value('a'), 1);
        assert_eq!(value('c'), 5);
        assert_eq!(value('j'), 7);
        assert_eq!(value('q'), 8);
        assert_eq!(value('z'), 8);
    }
}
