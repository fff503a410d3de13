//! Formatting utilities for terminal output

use crate::core::{Board, BoardError, Cell, Path, PathStep};
use colored::{ColoredString, Colorize};

/// Cell positions of a path, e.g. `(0, 0)(1, 0)(2, 1)`
#[must_use]
pub fn positions_text(path: &Path) -> String {
    path.steps().iter().map(|s| s.position().to_string()).collect()
}

/// Swaps a path needs, e.g. `c -> z, a -> e`, or `None` for a direct path
#[must_use]
pub fn swap_summary(path: &Path) -> Option<String> {
    let swaps: Vec<String> = path
        .swapped_steps()
        .iter()
        .map(|step| format!("{} -> {}", step.cell().letter(), step.letter()))
        .collect();

    if swaps.is_empty() {
        None
    } else {
        Some(swaps.join(", "))
    }
}

/// One step's letter, colored by what makes it special
#[must_use]
pub fn colored_step(step: &PathStep) -> ColoredString {
    let text = step.letter().as_char().to_ascii_uppercase().to_string();
    let cell = step.cell();

    if step.is_swapped() {
        text.red().bold()
    } else if cell.is_double_word() {
        text.magenta()
    } else if cell.multiplier() > 1.0 {
        text.yellow()
    } else {
        text.cyan()
    }
}

/// The word a path spells, one colored letter per step
#[must_use]
pub fn colored_word(path: &Path) -> String {
    path.steps().iter().map(|s| colored_step(s).to_string()).collect()
}

/// A cell in board text form: `e`, `qx3`, `ax2+`
#[must_use]
pub fn cell_token(cell: &Cell) -> String {
    let mut token = cell.letter().to_string();
    if cell.multiplier() > 1.0 {
        token.push('x');
        token.push_str(&cell.multiplier().to_string());
    }
    if cell.is_double_word() {
        token.push('+');
    }
    token
}

/// The whole board in the text format `parse_board` reads
///
/// # Errors
/// Returns `BoardError::IndexCorrupted` if a row holds more than N cells.
///
/// # Examples
/// ```
/// use spellcast_solver::boards::parse_board;
/// use spellcast_solver::output::formatters::board_text;
///
/// let board = parse_board("ab/cx2 d+").unwrap();
/// assert_eq!(board_text(&board).unwrap(), "a b\ncx2 d+\n");
/// ```
pub fn board_text(board: &Board) -> Result<String, BoardError> {
    let mut text = String::new();

    for y in 0..board.size() {
        let row = board.row(y as i32)?;
        let tokens: Vec<String> = row
            .iter()
            .filter_map(|&p| board.get(p))
            .map(cell_token)
            .collect();
        text.push_str(&tokens.join(" "));
        text.push('\n');
    }

    Ok(text)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
