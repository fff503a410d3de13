//! Narrowing a dictionary to the words a board can hold

use crate::core::{Board, Word};
use rustc_hash::FxHashSet;

/// Shortest word scored by default
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Words worth searching on `board`
///
/// Keeps words of at least `min_len` letters that fit in the board's cell
/// count, dropping repeats. Input order is preserved.
///
/// # Examples
/// ```
/// use spellcast_solver::boards::parse_board;
/// use spellcast_solver::wordlists::{loader::words_from_slice, playable};
///
/// let board = parse_board("ab/cd").unwrap();
/// let words = words_from_slice(&["cab", "dabs", "dabs", "abcde"]);
///
/// let kept = playable(&words, &board, 4);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].text(), "dabs");
/// ```
#[must_use]
pub fn playable(words: &[Word], board: &Board, min_len: usize) -> Vec<Word> {
    let max_len = board.cell_count();
    let mut seen = FxHashSet::default();

    words
        .iter()
        .filter(|w| w.len() >= min_len && w.len() <= max_len)
        .filter(|w| seen.insert(w.text()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::parse_board;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn drops_short_and_long_words() {
        let board = parse_board("abc/def/ghi").unwrap();
        let words = words_from_slice(&["bed", "face", "abcdefghi", "abcdefghij"]);

        let kept: Vec<String> = playable(&words, &board, 4)
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(kept, ["face", "abcdefghi"]);
    }

    #[test]
    fn min_length_is_configurable() {
        let board = parse_board("abc/def/ghi").unwrap();
        let words = words_from_slice(&["a", "be", "bed"]);
        assert_eq!(playable(&words, &board, 1).len(), 3);
        assert_eq!(playable(&words, &board, 3).len(), 1);
    }

    #[test]
    fn keeps_first_of_duplicates() {
        let board = parse_board("abc/def/ghi").unwrap();
        let words = words_from_slice(&["fade", "cafe", "Fade", "fade"]);

        let kept: Vec<String> = playable(&words, &board, 4)
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(kept, ["fade", "cafe"]);
    }
}
