//! Board sources: text files, interactive entry and random deals

mod parser;
mod random;

pub use parser::{CellSpec, parse_board, parse_cell_entry, parse_cell_token};
pub use random::{board_rng, random_board};

use crate::core::Board;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Read and parse a board file
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read board {}: {e}", path.display()))?;
    parse_board(&text).map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_board_file() {
        let path = std::env::temp_dir().join(format!("board-{}.txt", std::process::id()));
        fs::write(&path, "# corner bonus\nax3 b\nc d+\n").unwrap();

        let board = load_board(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(board.size(), 2);
        assert!(board.cells().any(|c| c.is_double_word()));
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_board("/nonexistent/board.txt").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/board.txt"));
    }
}
