//! Board text formats
//!
//! Grid format, one row per line or `/`-separated:
//!
//! ```text
//! # comments start with '#'
//! r a e s t
//! l ix3+ n o s
//! t e d+ a c
//! o n e s t
//! m a p l ex2
//! ```
//!
//! Cells are separated by whitespace. A cell token is `<letter>`, optionally
//! followed by `x<multiplier>` and/or a trailing `+` for the double-word
//! flag (`ex2`, `q+`, `zx3+`). A row with no whitespace that consists only of
//! letters is read one cell per letter, so `aba/cdc/aba` is a 3×3 board.
//!
//! The interactive entry format is the one typed at a per-cell prompt:
//! `<letter> [multiplier] [true|false]`.

use crate::core::{Board, BoardError, Cell, Letter, Position};

/// Letter and bonuses for one cell, before it is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSpec {
    pub letter: Letter,
    pub multiplier: f64,
    pub double_word: bool,
}

impl CellSpec {
    #[must_use]
    pub const fn plain(letter: Letter) -> Self {
        Self {
            letter,
            multiplier: 1.0,
            double_word: false,
        }
    }

    /// The cell this describes, placed at `position`
    #[must_use]
    pub const fn at(self, position: Position) -> Cell {
        Cell::new(position, self.letter)
            .with_multiplier(self.multiplier)
            .with_double_word(self.double_word)
    }
}

/// Parse a square board from grid text
///
/// # Errors
/// Returns `BoardError` for an empty grid, a row of the wrong width, or a
/// cell token that is not a letter with valid modifiers.
///
/// # Examples
/// ```
/// use spellcast_solver::boards::parse_board;
/// use spellcast_solver::core::Position;
///
/// let board = parse_board("ab+\ncx2 d").unwrap();
/// assert_eq!(board.size(), 2);
/// assert!(board.get(Position::new(1, 0)).unwrap().is_double_word());
/// ```
pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let rows: Vec<&str> = text
        .split(['\n', '/'])
        .map(str::trim)
        .filter(|row| !row.is_empty() && !row.starts_with('#'))
        .collect();

    if rows.is_empty() {
        return Err(BoardError::Empty);
    }

    let size = rows.len();
    let mut cells = Vec::with_capacity(size * size);

    for (y, row) in rows.iter().enumerate() {
        let tokens = row_tokens(row);
        if tokens.len() != size {
            return Err(BoardError::RowLength {
                row: y + 1,
                expected: size,
                found: tokens.len(),
            });
        }

        for (x, token) in tokens.iter().enumerate() {
            let spec = parse_cell_token(token)?;
            cells.push(spec.at(Position::new(x as i32, y as i32)));
        }
    }

    Board::from_cells(size, cells)
}

fn row_tokens(row: &str) -> Vec<String> {
    if row.contains(char::is_whitespace) {
        row.split_whitespace().map(str::to_string).collect()
    } else if row.chars().all(|c| c.is_ascii_alphabetic()) {
        row.chars().map(String::from).collect()
    } else {
        vec![row.to_string()]
    }
}

/// Parse one grid cell token such as `e`, `qx3` or `ax2+`
///
/// # Errors
/// Returns `BoardError::InvalidLetter`, `InvalidMultiplier` or `InvalidCell`.
pub fn parse_cell_token(token: &str) -> Result<CellSpec, BoardError> {
    let mut chars = token.chars();
    let first = chars
        .next()
        .ok_or_else(|| BoardError::InvalidCell(token.to_string()))?;
    let mut spec = CellSpec::plain(Letter::new(first)?);

    let mut rest = chars.as_str();
    if let Some(stripped) = rest.strip_suffix('+') {
        spec.double_word = true;
        rest = stripped;
    }

    if !rest.is_empty() {
        let raw = rest
            .strip_prefix(['x', 'X'])
            .ok_or_else(|| BoardError::InvalidCell(token.to_string()))?;
        spec.multiplier = parse_multiplier(raw)?;
    }

    Ok(spec)
}

/// Parse an interactive entry: `<letter> [multiplier] [true|false]`
///
/// # Errors
/// Returns `BoardError` if the first field is not a single letter, the
/// multiplier is not a positive number, or there are extra fields.
pub fn parse_cell_entry(line: &str) -> Result<CellSpec, BoardError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let (letter, options) = match fields.split_first() {
        Some((letter, options)) if options.len() <= 2 => (letter, options),
        _ => return Err(BoardError::InvalidCell(line.trim().to_string())),
    };

    let mut chars = letter.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(BoardError::InvalidCell((*letter).to_string()));
    };
    let mut spec = CellSpec::plain(Letter::new(c)?);

    if let Some(raw) = options.first() {
        spec.multiplier = parse_multiplier(raw)?;
    }
    if let Some(flag) = options.get(1) {
        spec.double_word = flag.eq_ignore_ascii_case("true");
    }

    Ok(spec)
}

fn parse_multiplier(raw: &str) -> Result<f64, BoardError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(BoardError::InvalidMultiplier(raw.to_string())),
    }
}
