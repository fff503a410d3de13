//! Grid coordinates
//!
//! A `Position` is a plain `(x, y)` pair: `x` is the column, `y` the row.

use std::fmt;

/// Offsets to the eight surrounding cells: orthogonal sides first, then diagonals
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Integer coordinate on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by `(dx, dy)`
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// All eight Moore neighbours, unfiltered by any board bounds
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::Position;
    ///
    /// let neighbors = Position::new(0, 0).neighbors();
    /// assert_eq!(neighbors.len(), 8);
    /// assert!(neighbors.contains(&Position::new(-1, -1)));
    /// ```
    #[must_use]
    pub fn neighbors(self) -> [Self; 8] {
        MOORE_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// True when `other` is one king-move away (never true for `self`)
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx + dy) > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
