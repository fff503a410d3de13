//! Candidate word placement on a board
//!
//! A [`Path`] is the ordered list of steps the search engine currently
//! believes spells its target word. Depth is 1-based: depth 1 is the start
//! cell, and `len()` is the current depth.
//!
//! Besides the steps themselves the path keeps:
//! - a reverse index `Position → depth`, so "is this cell already used" is O(1);
//! - per-depth elimination sets: positions known to fail as the next step
//!   when the path has exactly that depth. Retracting from depth D discards
//!   the set recorded for D, so a later visit to D starts fresh.

use super::cell::Cell;
use super::letter::Letter;
use super::position::Position;
use super::word::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Paths at least this long earn [`LONG_WORD_BONUS`]
pub const LONG_WORD_LENGTH: usize = 6;

/// Flat bonus for long words, added after double-word doubling
pub const LONG_WORD_BONUS: f64 = 10.0;

/// Error type for path bookkeeping misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Retract or current step on an empty path
    Empty,
    /// Append of a position the path already uses
    PositionInUse(Position),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path is empty"),
            Self::PositionInUse(p) => write!(f, "position {p} is already on the path"),
        }
    }
}

impl std::error::Error for PathError {}

/// One step of a path
///
/// A swapped step occupies a real board cell but contributes a different
/// letter to the spelled word. Scoring always uses the real cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathStep {
    Direct(Cell),
    Swapped { cell: Cell, letter: Letter },
}

impl PathStep {
    #[must_use]
    pub const fn swapped(cell: Cell, letter: Letter) -> Self {
        Self::Swapped { cell, letter }
    }

    /// The board cell this step stands on
    #[inline]
    #[must_use]
    pub const fn cell(&self) -> &Cell {
        match self {
            Self::Direct(cell) | Self::Swapped { cell, .. } => cell,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.cell().position()
    }

    /// Letter contributed to the word
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Letter {
        match self {
            Self::Direct(cell) => cell.letter(),
            Self::Swapped { letter, .. } => *letter,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_swapped(&self) -> bool {
        matches!(self, Self::Swapped { .. })
    }

    /// The real cell a swap replaced, if this step is a swap
    #[inline]
    #[must_use]
    pub const fn swapped_from(&self) -> Option<&Cell> {
        match self {
            Self::Direct(_) => None,
            Self::Swapped { cell, .. } => Some(cell),
        }
    }
}

/// Ordered, appendable and retractable sequence of steps
#[derive(Debug, Clone, Default)]
pub struct Path {
    steps: Vec<PathStep>,
    depth_of: FxHashMap<Position, usize>,
    eliminated: FxHashMap<usize, FxHashSet<Position>>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Path holding only `start`
    #[must_use]
    pub fn starting_at(start: Cell) -> Self {
        let mut path = Self::new();
        path.steps.push(PathStep::Direct(start));
        path.depth_of.insert(start.position(), 1);
        path
    }

    /// Current depth
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in order, depth 1 first
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Append a step at depth `len() + 1` and return the new depth
    ///
    /// Adjacency is the caller's responsibility.
    ///
    /// # Errors
    /// Returns `PathError::PositionInUse` if the step's position is already on
    /// the path; the path is left unchanged.
    pub fn append(&mut self, step: PathStep) -> Result<usize, PathError> {
        let position = step.position();
        if self.depth_of.contains_key(&position) {
            return Err(PathError::PositionInUse(position));
        }
        self.steps.push(step);
        let depth = self.steps.len();
        self.depth_of.insert(position, depth);
        Ok(depth)
    }

    /// Remove the deepest step and forget the elimination set of its depth
    ///
    /// # Errors
    /// Returns `PathError::Empty` if there is nothing to retract.
    pub fn retract(&mut self) -> Result<PathStep, PathError> {
        let depth = self.steps.len();
        let step = self.steps.pop().ok_or(PathError::Empty)?;
        self.depth_of.remove(&step.position());
        self.eliminated.remove(&depth);
        Ok(step)
    }

    /// Deepest step
    ///
    /// # Errors
    /// Returns `PathError::Empty` on an empty path.
    pub fn current(&self) -> Result<&PathStep, PathError> {
        self.steps.last().ok_or(PathError::Empty)
    }

    /// True if any step stands on `position`
    #[inline]
    #[must_use]
    pub fn contains_position(&self, position: Position) -> bool {
        self.depth_of.contains_key(&position)
    }

    /// True if a step stands on this exact board cell (position and real letter)
    #[must_use]
    pub fn contains_exact(&self, cell: &Cell) -> bool {
        self.depth_of
            .get(&cell.position())
            .and_then(|&depth| self.steps.get(depth - 1))
            .is_some_and(|step| step.cell().letter() == cell.letter())
    }

    /// Depth at which `position` was stepped on
    #[must_use]
    pub fn depth_of(&self, position: Position) -> Option<usize> {
        self.depth_of.get(&position).copied()
    }

    /// Mark `position` as a failed next step at `depth`
    pub fn eliminate(&mut self, depth: usize, position: Position) {
        self.eliminated.entry(depth).or_default().insert(position);
    }

    /// True if `position` was eliminated at `depth`
    #[must_use]
    pub fn is_eliminated_at(&self, position: Position, depth: usize) -> bool {
        self.eliminated
            .get(&depth)
            .is_some_and(|set| set.contains(&position))
    }

    /// True if `position` was eliminated at the current depth
    #[must_use]
    pub fn is_eliminated(&self, position: Position) -> bool {
        self.is_eliminated_at(position, self.len())
    }

    /// Letters contributed by each step, swaps included
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.steps.iter().map(PathStep::letter)
    }

    /// The word this path spells
    #[must_use]
    pub fn effective_text(&self) -> String {
        self.letters().map(Letter::as_char).collect()
    }

    /// True if the path spells exactly `word`
    #[must_use]
    pub fn spells(&self, word: &Word) -> bool {
        self.len() == word.len() && self.letters().eq(word.letters().iter().copied())
    }

    /// Step positions in order
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.steps.iter().map(PathStep::position).collect()
    }

    /// True if any step stands on a double-word cell
    #[must_use]
    pub fn has_double_word(&self) -> bool {
        self.steps.iter().any(|step| step.cell().is_double_word())
    }

    /// Score of the path
    ///
    /// Sum of the underlying cells' scores, doubled if any cell carries the
    /// double-word flag, then plus [`LONG_WORD_BONUS`] for paths of
    /// [`LONG_WORD_LENGTH`] or more steps.
    #[must_use]
    pub fn total_score(&self) -> f64 {
        let mut score: f64 = self.steps.iter().map(|step| step.cell().score()).sum();

        if self.has_double_word() {
            score *= 2.0;
        }

        if self.len() >= LONG_WORD_LENGTH {
            score += LONG_WORD_BONUS;
        }

        score
    }

    /// Steps that substitute a letter
    #[must_use]
    pub fn swapped_steps(&self) -> Vec<&PathStep> {
        self.steps.iter().filter(|step| step.is_swapped()).collect()
    }
}
