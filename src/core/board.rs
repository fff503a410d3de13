//! The letter grid
//!
//! A `Board` is a fixed N×N grid of [`Cell`]s with O(1) lookup. Two derived
//! structures speed up the search:
//!
//! - a neighbour cache: per position, the in-bounds populated Moore
//!   neighbours. Slots are filled lazily (or all at once by
//!   [`Board::warm_neighbors`]) and every slot is cleared by [`Board::set`].
//!   Each slot is a `OnceLock`, so concurrent readers may race to fill the
//!   same slot and always agree on its value.
//! - a letter index: letter → positions holding it, built once by
//!   [`Board::index_by_letter`] after the grid is populated. `set` drops the
//!   index; search must not start until it has been rebuilt.

use super::cell::Cell;
use super::letter::{ALPHABET_SIZE, Letter, LetterError};
use super::position::Position;
use std::fmt;
use std::sync::OnceLock;

/// Board edge length used by the game
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Error type for board construction and queries
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// A cell letter outside the alphabet
    InvalidLetter(LetterError),
    /// A multiplier that is not a positive finite number
    InvalidMultiplier(String),
    /// A cell token that could not be parsed
    InvalidCell(String),
    /// A position outside the N×N grid
    OutOfBounds { position: Position, size: usize },
    /// A row of the wrong width
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Input contained no rows
    Empty,
    /// A row or column query found more than N cells
    IndexCorrupted { line: String, found: usize, size: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(e) => write!(f, "{e}"),
            Self::InvalidMultiplier(raw) => {
                write!(f, "multiplier {raw:?} must be a positive number")
            }
            Self::InvalidCell(raw) => write!(f, "cannot parse cell {raw:?}"),
            Self::OutOfBounds { position, size } => {
                write!(f, "position {position} is outside the {size}x{size} board")
            }
            Self::RowLength {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::Empty => write!(f, "board has no rows"),
            Self::IndexCorrupted { line, found, size } => write!(
                f,
                "{line} holds {found} cells but the board is only {size} wide (index corrupted)"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<LetterError> for BoardError {
    fn from(e: LetterError) -> Self {
        Self::InvalidLetter(e)
    }
}

/// Fixed-size grid of letter cells
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Cell>>,
    neighbor_cache: Vec<OnceLock<Vec<Position>>>,
    letter_index: Option<Vec<Vec<Position>>>,
}

impl Board {
    /// Create an empty `size`×`size` board
    #[must_use]
    pub fn new(size: usize) -> Self {
        let area = size * size;
        Self {
            size,
            cells: vec![None; area],
            neighbor_cache: (0..area).map(|_| OnceLock::new()).collect(),
            letter_index: None,
        }
    }

    /// Build a ready-to-search board: cells set, letter index built, neighbours warmed
    ///
    /// # Errors
    /// Returns `BoardError::OutOfBounds` if any cell lies outside the grid.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::{Board, Cell, Letter, Position};
    ///
    /// let cells = "abcd".chars().enumerate().map(|(i, c)| {
    ///     Cell::from_char(Position::new(i as i32 % 2, i as i32 / 2), c).unwrap()
    /// });
    /// let board = Board::from_cells(2, cells).unwrap();
    /// assert_eq!(board.find(Letter::new('c').unwrap()).unwrap().len(), 1);
    /// assert_eq!(board.neighbors(Position::new(0, 0)).count(), 3);
    /// ```
    pub fn from_cells(
        size: usize,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(size);
        for cell in cells {
            board.set(cell)?;
        }
        board.index_by_letter();
        board.warm_neighbors();
        Ok(board)
    }

    /// Edge length N
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of grid slots (N²), the longest possible path
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// True once every grid slot holds a cell
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// True once the letter index reflects the current cells
    #[must_use]
    pub const fn is_indexed(&self) -> bool {
        self.letter_index.is_some()
    }

    fn slot(&self, position: Position) -> Option<usize> {
        let size = i32::try_from(self.size).ok()?;
        let in_bounds = (0..size).contains(&position.x) && (0..size).contains(&position.y);
        in_bounds.then(|| position.y as usize * self.size + position.x as usize)
    }

    /// Insert or overwrite the cell at its position
    ///
    /// Clears the whole neighbour cache and drops the letter index.
    ///
    /// # Errors
    /// Returns `BoardError::OutOfBounds` if the cell lies outside the grid.
    pub fn set(&mut self, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .slot(cell.position())
            .ok_or(BoardError::OutOfBounds {
                position: cell.position(),
                size: self.size,
            })?;
        self.cells[slot] = Some(cell);
        for cached in &mut self.neighbor_cache {
            cached.take();
        }
        self.letter_index = None;
        Ok(())
    }

    /// Cell at `position`, or `None` outside the grid or for an unset slot
    #[inline]
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.slot(position).and_then(|slot| self.cells[slot].as_ref())
    }

    /// All populated cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Populated Moore neighbours of `position`
    ///
    /// Iteration order is fixed per board: orthogonal sides first, then diagonals.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = &Cell> {
        self.slot(position)
            .map(|slot| {
                self.neighbor_cache[slot]
                    .get_or_init(|| self.compute_neighbors(position))
                    .iter()
                    .filter_map(|&p| self.get(p))
            })
            .into_iter()
            .flatten()
    }

    fn compute_neighbors(&self, position: Position) -> Vec<Position> {
        position
            .neighbors()
            .into_iter()
            .filter(|&p| self.get(p).is_some())
            .collect()
    }

    /// Fill every neighbour-cache slot up front
    ///
    /// Call before handing the board to parallel workers so they only read.
    pub fn warm_neighbors(&self) {
        for cell in self.cells() {
            let position = cell.position();
            if let Some(slot) = self.slot(position) {
                self.neighbor_cache[slot].get_or_init(|| self.compute_neighbors(position));
            }
        }
    }

    /// Build the letter → positions index from the current cells
    pub fn index_by_letter(&mut self) {
        let mut index = vec![Vec::new(); ALPHABET_SIZE];
        for cell in self.cells.iter().flatten() {
            index[cell.letter().index()].push(cell.position());
        }
        self.letter_index = Some(index);
    }

    /// All cells holding `letter`, or `None` if there are none (or no index yet)
    #[must_use]
    pub fn find(&self, letter: Letter) -> Option<Vec<&Cell>> {
        let positions = self.letter_index.as_ref()?.get(letter.index())?;
        if positions.is_empty() {
            return None;
        }
        Some(positions.iter().filter_map(|&p| self.get(p)).collect())
    }

    /// Positions in row `y`
    ///
    /// # Errors
    /// Returns `BoardError::IndexCorrupted` if more than N cells are found.
    pub fn row(&self, y: i32) -> Result<Vec<Position>, BoardError> {
        self.line(format!("row {y}"), |p| p.y == y)
    }

    /// Positions in column `x`
    ///
    /// # Errors
    /// Returns `BoardError::IndexCorrupted` if more than N cells are found.
    pub fn column(&self, x: i32) -> Result<Vec<Position>, BoardError> {
        self.line(format!("column {x}"), |p| p.x == x)
    }

    fn line(
        &self,
        name: String,
        keep: impl Fn(Position) -> bool,
    ) -> Result<Vec<Position>, BoardError> {
        let positions: Vec<Position> = self
            .cells()
            .map(Cell::position)
            .filter(|&p| keep(p))
            .collect();

        if positions.len() > self.size {
            return Err(BoardError::IndexCorrupted {
                line: name,
                found: positions.len(),
                size: self.size,
            });
        }
        Ok(positions)
    }
}
