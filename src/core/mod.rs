//! Core domain types for board word search
//!
//! This module contains the board, its cells and the path abstraction.
//! Nothing here prints or performs I/O.

mod board;
mod cell;
mod cursor;
mod letter;
mod path;
mod position;
mod word;

pub use board::{Board, BoardError, DEFAULT_BOARD_SIZE};
pub use cell::Cell;
pub use cursor::{CursorError, WordCursor};
pub use letter::{ALPHABET_SIZE, Letter, LetterError};
pub use path::{LONG_WORD_BONUS, LONG_WORD_LENGTH, Path, PathError, PathStep};
pub use position::Position;
pub use word::{Word, WordError};
