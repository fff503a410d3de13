//! Board cells

use super::letter::{Letter, LetterError};
use super::position::Position;

/// One grid location: letter, point value, letter multiplier and double-word flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    position: Position,
    letter: Letter,
    value: u32,
    multiplier: f64,
    double_word: bool,
}

impl Cell {
    /// Cell with the letter's default point value and no bonuses
    #[must_use]
    pub const fn new(position: Position, letter: Letter) -> Self {
        Self::with_value(position, letter, letter.points())
    }

    /// Cell with an explicit base value
    #[must_use]
    pub const fn with_value(position: Position, letter: Letter, value: u32) -> Self {
        Self {
            position,
            letter,
            value,
            multiplier: 1.0,
            double_word: false,
        }
    }

    /// Build a cell straight from a character
    ///
    /// # Errors
    /// Returns `LetterError` if `c` is outside the board alphabet.
    pub fn from_char(position: Position, c: char) -> Result<Self, LetterError> {
        Letter::new(c).map(|letter| Self::new(position, letter))
    }

    #[must_use]
    pub const fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    #[must_use]
    pub const fn with_double_word(mut self, double_word: bool) -> Self {
        self.double_word = double_word;
        self
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }

    #[inline]
    #[must_use]
    pub const fn is_double_word(&self) -> bool {
        self.double_word
    }

    /// Points this cell contributes: base value times multiplier
    #[inline]
    #[must_use]
    pub fn score(&self) -> f64 {
        f64::from(self.value) * self.multiplier
    }
}
