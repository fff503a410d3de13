//! Interactive board entry
//!
//! Prompts for every cell in row-major order, then solves the board and
//! prints the best placements. Each answer is `<letter> [multiplier] [true]`.

use super::solve::{SolveConfig, solve_board};
use crate::boards::parse_cell_entry;
use crate::core::{Board, Position, Word};
use crate::output::{formatters::board_text, print_solve_report};
use std::io::{self, BufRead, Write};

/// Run interactive entry on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails, input ends before the board is
/// complete, or the search fails.
pub fn run_enter(
    size: usize,
    words: &[Word],
    config: &SolveConfig,
    limit: usize,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Spellcast Solver - Board Entry              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each cell as: <letter> [multiplier] [true if double word]");
    println!("  e        plain letter");
    println!("  q 3      triple letter");
    println!("  a 1 true double word");
    println!("The board is {size}x{size}; cells are asked row by row.\n");

    let stdin = io::stdin();
    let board = read_board(size, &mut stdin.lock(), &mut io::stdout())?;

    let report = solve_board(&board, words, config).map_err(|e| e.to_string())?;
    print_solve_report(&board, &report, limit);
    Ok(())
}

/// Read a `size`×`size` board one cell at a time
///
/// Invalid answers are reported and the same cell is asked again. The
/// finished board is echoed in board-file form.
///
/// # Errors
///
/// Returns an error on an I/O failure or if input ends early.
pub fn read_board<R, W>(size: usize, input: &mut R, output: &mut W) -> Result<Board, String>
where
    R: BufRead,
    W: Write,
{
    let mut cells = Vec::with_capacity(size * size);

    for y in 0..size {
        for x in 0..size {
            let position = Position::new(x as i32, y as i32);
            loop {
                let line = prompt(&format!("{position}"), input, output)?;
                match parse_cell_entry(&line) {
                    Ok(spec) => {
                        cells.push(spec.at(position));
                        break;
                    }
                    Err(e) => {
                        writeln!(output, "Invalid entry: {e}").map_err(|e| e.to_string())?;
                    }
                }
            }
        }
    }

    let board = Board::from_cells(size, cells).map_err(|e| e.to_string())?;
    let text = board_text(&board).map_err(|e| e.to_string())?;
    write!(output, "\nSave this as a board file to load it with --board:\n{text}")
        .map_err(|e| e.to_string())?;

    Ok(board)
}

/// Get user input with a prompt
fn prompt<R, W>(label: &str, input: &mut R, output: &mut W) -> Result<String, String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}: ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("input ended before the board was complete".to_string());
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_cells_in_row_major_order() {
        let mut input = Cursor::new("a\nb 2\nc 1 true\nd\n");
        let mut output = Vec::new();

        let board = read_board(2, &mut input, &mut output).unwrap();
        assert!(board.is_complete());
        assert!(board.is_indexed());

        let b = board.get(Position::new(1, 0)).unwrap();
        assert_eq!(b.letter().as_char(), 'b');
        assert!((b.multiplier() - 2.0).abs() < f64::EPSILON);
        assert!(board.get(Position::new(0, 1)).unwrap().is_double_word());

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.starts_with("(0, 0): (1, 0): (0, 1): "));
        assert!(prompts.ends_with("a bx2\nc+ d\n"));
    }

    #[test]
    fn reprompts_after_bad_entry() {
        let mut input = Cursor::new("\nxy\na\n");
        let mut output = Vec::new();

        let board = read_board(1, &mut input, &mut output).unwrap();
        assert_eq!(board.get(Position::new(0, 0)).unwrap().letter().as_char(), 'a');

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("(0, 0): ").count(), 3);
        assert_eq!(text.matches("Invalid entry").count(), 2);
    }

    #[test]
    fn early_end_of_input_fails() {
        let mut input = Cursor::new("a\nb\n");
        let mut output = Vec::new();
        assert!(read_board(2, &mut input, &mut output).is_err());
    }
}
