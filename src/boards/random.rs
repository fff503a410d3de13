//! Random board generation
//!
//! Letters are drawn from a weighted bag close to English letter frequency.
//! One cell gets a 2x or 3x letter multiplier and one cell is a double-word
//! cell, as on a freshly dealt game board.

use crate::core::{Board, BoardError, Cell, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const LETTER_BAG: &[u8] = b"eeeeeeeeeeeeaaaaaaaaaiiiiiiiiioooooooonnnnnnrrrrrrttttttllllssssuuuuddddgggbbccmmppffhhvvwwyykjxqz";

/// Seeded generator, or one seeded from the thread RNG when `seed` is `None`
#[must_use]
pub fn board_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::rng().random::<u64>()),
    }
}

/// Deal a complete, indexed `size`×`size` board
///
/// # Panics
/// Never in practice: every generated position lies inside the grid.
///
/// # Examples
/// ```
/// use spellcast_solver::boards::{board_rng, random_board};
///
/// let a = random_board(5, &mut board_rng(Some(3)));
/// let b = random_board(5, &mut board_rng(Some(3)));
/// assert!(a.is_complete());
/// assert_eq!(a.cells().collect::<Vec<_>>(), b.cells().collect::<Vec<_>>());
/// ```
pub fn random_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Board {
    deal(size, rng).expect("bag letters and grid positions are always valid")
}

fn deal<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Board, BoardError> {
    let count = size * size;
    let (bonus_cell, double_cell) = if count == 0 {
        (0, 0)
    } else {
        (rng.random_range(0..count), rng.random_range(0..count))
    };

    let mut cells = Vec::with_capacity(count);
    for i in 0..count {
        let c = LETTER_BAG.choose(rng).copied().unwrap_or(b'e');
        let position = Position::new((i % size) as i32, (i / size) as i32);

        let mut cell = Cell::from_char(position, char::from(c))?.with_double_word(i == double_cell);
        if i == bonus_cell {
            let multiplier = if rng.random_bool(0.5) { 2.0 } else { 3.0 };
            cell = cell.with_multiplier(multiplier);
        }
        cells.push(cell);
    }

    Board::from_cells(size, cells)
}
