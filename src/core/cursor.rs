//! Read position inside the target word
//!
//! The cursor's offset is the index of the next letter the search needs.
//! Offset 0 (the first letter) is consumed by the start cell, so a fresh
//! search advances once before its first step. The cursor never retreats
//! below offset 1: the first letter is fixed by the start cell and is never
//! re-attempted, which is what [`WordCursor::can_retreat`] reports.

use super::letter::Letter;
use super::word::Word;
use std::fmt;

/// Error type for moving the cursor outside the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    PastEnd,
    BeforeStart,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PastEnd => write!(f, "cursor cannot move past the last letter"),
            Self::BeforeStart => write!(f, "cursor cannot move before the first letter"),
        }
    }
}

impl std::error::Error for CursorError {}

/// Cursor over the letters of a target word
#[derive(Debug, Clone)]
pub struct WordCursor<'a> {
    word: &'a Word,
    offset: usize,
}

impl<'a> WordCursor<'a> {
    #[must_use]
    pub const fn new(word: &'a Word) -> Self {
        Self { word, offset: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &'a Word {
        self.word
    }

    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Letter at the cursor
    ///
    /// # Panics
    /// Never for a cursor built from a `Word`: the offset is kept in range.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Letter {
        self.word.letters()[self.offset]
    }

    /// True when the cursor sits on the last letter
    #[inline]
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.offset + 1 == self.word.len()
    }

    /// True at offset 0
    #[inline]
    #[must_use]
    pub const fn at_start(&self) -> bool {
        self.offset == 0
    }

    /// False at offset 1 or below: the first letter is never retried
    #[inline]
    #[must_use]
    pub const fn can_retreat(&self) -> bool {
        self.offset > 1
    }

    /// Move to the next letter
    ///
    /// # Errors
    /// Returns `CursorError::PastEnd` if the cursor is on the last letter.
    pub fn advance(&mut self) -> Result<Letter, CursorError> {
        if self.at_end() {
            return Err(CursorError::PastEnd);
        }
        self.offset += 1;
        Ok(self.current())
    }

    /// Move back one letter
    ///
    /// # Errors
    /// Returns `CursorError::BeforeStart` at offset 0.
    pub fn retreat(&mut self) -> Result<Letter, CursorError> {
        if self.at_start() {
            return Err(CursorError::BeforeStart);
        }
        self.offset -= 1;
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn advances_to_end_then_fails() {
        let word = Word::new("ant").unwrap();
        let mut cursor = WordCursor::new(&word);
        assert!(cursor.at_start());
        assert_eq!(cursor.current(), letter('a'));

        assert_eq!(cursor.advance(), Ok(letter('n')));
        assert_eq!(cursor.advance(), Ok(letter('t')));
        assert!(cursor.at_end());
        assert_eq!(cursor.advance(), Err(CursorError::PastEnd));
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn retreat_below_zero_fails() {
        let word = Word::new("ox").unwrap();
        let mut cursor = WordCursor::new(&word);
        assert_eq!(cursor.retreat(), Err(CursorError::BeforeStart));

        cursor.advance().unwrap();
        assert_eq!(cursor.retreat(), Ok(letter('o')));
        assert!(cursor.at_start());
    }

    #[test]
    fn retreat_boundary_is_second_letter() {
        let word = Word::new("wand").unwrap();
        let mut cursor = WordCursor::new(&word);
        assert!(!cursor.can_retreat());
        cursor.advance().unwrap();
        assert!(!cursor.can_retreat());
        cursor.advance().unwrap();
        assert!(cursor.can_retreat());
    }

    #[test]
    fn single_letter_word_is_already_at_end() {
        let word = Word::new("a").unwrap();
        let mut cursor = WordCursor::new(&word);
        assert!(cursor.at_end());
        assert_eq!(cursor.advance(), Err(CursorError::PastEnd));
    }
}
