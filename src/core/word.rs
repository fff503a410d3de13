//! Candidate word representation
//!
//! A Word stores the lowercase text of a dictionary word together with its
//! validated letter sequence, so the search engine can compare letters
//! without touching characters again.

use super::letter::Letter;
use std::fmt;

/// A dictionary word spelled entirely in board letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::Word;
    ///
    /// let word = Word::new("Wizard").unwrap();
    /// assert_eq!(word.text(), "wizard");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sp3ll").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters = text
            .chars()
            .map(Letter::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| WordError::InvalidCharacters)?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the validated letters of the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// First letter, which fixes the search start
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Letter> {
        self.letters.first().copied()
    }

    /// Letter at `index`, if in range
    #[inline]
    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<Letter> {
        self.letters.get(index).copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
        assert_eq!(word.first(), Letter::new('c').ok());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("QUARTZ").unwrap();
        assert_eq!(word.text(), "quartz");

        let word2 = Word::new("QuArTz").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(Word::new("cran3"), Err(WordError::InvalidCharacters)));
        assert!(matches!(Word::new("ice cream"), Err(WordError::InvalidCharacters)));
        assert!(matches!(Word::new("don't"), Err(WordError::InvalidCharacters)));
        assert!(matches!(Word::new("café"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("oxen").unwrap();
        let letters: String = (0..4)
            .filter_map(|i| word.letter_at(i))
            .map(Letter::as_char)
            .collect();
        assert_eq!(letters, "oxen");
        assert_eq!(word.letter_at(4), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("Spell").unwrap();
        assert_eq!(format!("{word}"), "spell");
    }
}
