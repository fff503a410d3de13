//! Backtracking search for one word from one start cell
//!
//! A [`Wizard`] grows a [`Path`] from a fixed start cell, one neighbour at a
//! time, until the path spells the target word or every option is exhausted.
//!
//! # Transition rules
//! Each iteration looks at the letter under the word cursor and the cell at
//! the end of the path:
//! 1. A neighbour with the required letter that is neither eliminated at the
//!    current depth nor already on the path is appended (first in neighbour
//!    order). Success if the word is complete, otherwise the cursor advances.
//! 2. With no such neighbour: success if the word is already complete; failure
//!    if the cursor cannot retreat (it sits on the second letter).
//! 3. Otherwise, if swaps remain and the previous iteration was not a swap
//!    attempt, any free neighbour is appended as a swapped step carrying the
//!    required letter. Finding no free neighbour counts as an attempt, so the
//!    next iteration backtracks instead of retrying.
//! 4. Otherwise backtrack: the cursor retreats, the deepest step is retracted
//!    and its position is eliminated at the new depth.
//!
//! The cursor offset always equals the path depth between iterations, so the
//! backtrack in rule 4 only runs with at least two steps on the path.

use crate::core::{Board, Cell, Letter, Path, PathStep, Position, Word, WordCursor};

use super::SearchError;

/// Where a search attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Searching,
    Succeeded,
    Failed,
}

/// One bounded backtracking search for a (word, start cell) pair
#[derive(Debug, Clone)]
pub struct Wizard<'a> {
    board: &'a Board,
    cursor: WordCursor<'a>,
    path: Path,
    swaps_remaining: usize,
    last_attempt_was_swap: bool,
    state: WizardState,
    iterations: usize,
}

impl<'a> Wizard<'a> {
    /// Prepare a search for `word` starting on `start`
    ///
    /// # Errors
    /// Returns `SearchError::StartMismatch` if `start` does not hold the
    /// word's first letter.
    pub fn new(
        board: &'a Board,
        start: &Cell,
        word: &'a Word,
        swap_budget: usize,
    ) -> Result<Self, SearchError> {
        if word.first() != Some(start.letter()) {
            return Err(SearchError::StartMismatch {
                word: word.text().to_string(),
                position: start.position(),
            });
        }

        let mut cursor = WordCursor::new(word);
        let state = if word.len() == 1 {
            WizardState::Succeeded
        } else {
            cursor.advance()?;
            WizardState::Searching
        };

        Ok(Self {
            board,
            cursor,
            path: Path::starting_at(*start),
            swaps_remaining: swap_budget,
            last_attempt_was_swap: false,
            state,
            iterations: 0,
        })
    }

    #[must_use]
    pub const fn state(&self) -> WizardState {
        self.state
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.state == WizardState::Succeeded
    }

    /// Path as it stands (complete after success)
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the wizard, keeping the path only on success
    #[must_use]
    pub fn into_path(self) -> Option<Path> {
        self.succeeded().then_some(self.path)
    }

    #[must_use]
    pub const fn swaps_remaining(&self) -> usize {
        self.swaps_remaining
    }

    /// Loop iterations executed so far
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    #[must_use]
    pub const fn word(&self) -> &'a Word {
        self.cursor.word()
    }

    /// Run to completion and report success
    ///
    /// # Errors
    /// Returns a `SearchError` only if the path or cursor bookkeeping is
    /// violated, which the transition rules never do.
    pub fn run(&mut self) -> Result<bool, SearchError> {
        while self.state == WizardState::Searching {
            self.iterations += 1;
            self.step()?;
        }
        Ok(self.succeeded())
    }

    fn step(&mut self) -> Result<(), SearchError> {
        let required = self.cursor.current();
        let here = self.path.current()?.position();

        if let Some(next) = self.direct_candidate(here, required) {
            self.path.append(PathStep::Direct(next))?;
            self.last_attempt_was_swap = false;
            if self.word_complete() {
                self.state = WizardState::Succeeded;
            } else {
                self.cursor.advance()?;
            }
            return Ok(());
        }

        if self.word_complete() {
            self.state = WizardState::Succeeded;
            return Ok(());
        }

        if !self.cursor.can_retreat() {
            self.state = WizardState::Failed;
            return Ok(());
        }

        if self.swaps_remaining > 0 && !self.last_attempt_was_swap {
            match self.free_neighbor(here) {
                Some(cell) => {
                    self.path.append(PathStep::swapped(cell, required))?;
                    self.swaps_remaining -= 1;
                    if !self.cursor.at_end() {
                        self.cursor.advance()?;
                    }
                    if self.word_complete() {
                        self.state = WizardState::Succeeded;
                    }
                }
                None => self.last_attempt_was_swap = true,
            }
            return Ok(());
        }

        self.backtrack()
    }

    fn backtrack(&mut self) -> Result<(), SearchError> {
        self.cursor.retreat()?;
        let retired = if self.path.len() > 1 {
            self.path.retract()?.position()
        } else {
            self.path.current()?.position()
        };
        self.path.eliminate(self.path.len(), retired);
        self.last_attempt_was_swap = false;
        Ok(())
    }

    fn word_complete(&self) -> bool {
        self.path.spells(self.cursor.word())
    }

    fn is_free(&self, cell: &Cell) -> bool {
        !self.path.is_eliminated(cell.position()) && !self.path.contains_exact(cell)
    }

    fn direct_candidate(&self, here: Position, required: Letter) -> Option<Cell> {
        self.board
            .neighbors(here)
            .find(|cell| cell.letter() == required && self.is_free(cell))
            .copied()
    }

    fn free_neighbor(&self, here: Position) -> Option<Cell> {
        self.board
            .neighbors(here)
            .find(|cell| self.is_free(cell))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::parse_board;

    fn sample_board() -> Board {
        parse_board("aba/cdc/aba").unwrap()
    }

    fn start<'b>(board: &'b Board, x: i32, y: i32) -> &'b Cell {
        board.get(Position::new(x, y)).unwrap()
    }

    fn assert_valid(path: &Path, word: &Word) {
        assert_eq!(path.effective_text(), word.text());
        let positions = path.positions();
        for pair in positions.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
        for (i, p) in positions.iter().enumerate() {
            assert!(!positions[i + 1..].contains(p), "{p} used twice");
        }
    }

    #[test]
    fn finds_direct_word() {
        let board = sample_board();
        let word = Word::new("aba").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 0).unwrap();

        assert!(wizard.run().unwrap());
        let path = wizard.path();
        assert_valid(path, &word);
        assert_eq!(
            path.positions(),
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
        assert!((path.total_score() - 6.0).abs() < f64::EPSILON);
        assert!(path.swapped_steps().is_empty());
    }

    #[test]
    fn rejects_mismatched_start() {
        let board = sample_board();
        let word = Word::new("dab").unwrap();
        let result = Wizard::new(&board, start(&board, 0, 0), &word, 0);
        assert!(matches!(result, Err(SearchError::StartMismatch { .. })));
    }

    #[test]
    fn single_letter_word_succeeds_immediately() {
        let board = sample_board();
        let word = Word::new("d").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 1, 1), &word, 0).unwrap();
        assert!(wizard.run().unwrap());
        assert_eq!(wizard.iterations(), 0);
        assert_eq!(wizard.into_path().unwrap().len(), 1);
    }

    #[test]
    fn fails_without_needed_letter_and_no_swaps() {
        let board = sample_board();
        let word = Word::new("adza").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 0).unwrap();

        assert!(!wizard.run().unwrap());
        assert_eq!(wizard.state(), WizardState::Failed);
        assert!(wizard.into_path().is_none());
    }

    #[test]
    fn swap_completes_word() {
        let board = sample_board();
        let word = Word::new("adza").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 1).unwrap();

        assert!(wizard.run().unwrap());
        assert_eq!(wizard.swaps_remaining(), 0);

        let path = wizard.into_path().unwrap();
        assert_valid(&path, &word);
        let swapped = path.swapped_steps();
        assert_eq!(swapped.len(), 1);
        assert_eq!(swapped[0].letter(), Letter::new('z').unwrap());
        assert_eq!(swapped[0].position(), Position::new(2, 1));
        assert_eq!(
            swapped[0].swapped_from().unwrap().letter(),
            Letter::new('c').unwrap()
        );
        // a + d + c (real cell under the swap) + a
        assert!((path.total_score() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn direct_match_is_preferred_over_swap() {
        let board = sample_board();
        let word = Word::new("abda").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 1).unwrap();

        assert!(wizard.run().unwrap());
        assert_eq!(wizard.swaps_remaining(), 1);
        assert!(wizard.path().swapped_steps().is_empty());
        assert_valid(wizard.path(), &word);
    }

    #[test]
    fn swap_on_last_letter() {
        let board = sample_board();
        let word = Word::new("abq").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 1).unwrap();

        assert!(wizard.run().unwrap());
        let path = wizard.path();
        assert_valid(path, &word);
        assert_eq!(path.swapped_steps().len(), 1);
        assert!(path.current().unwrap().is_swapped());
    }

    #[test]
    fn backtracks_out_of_dead_end() {
        // From the top-left `a`, the first `b` neighbour in order is (1, 0),
        // which has no `e` next to it; the search must back up and try (0, 1).
        let board = parse_board("abx/bxx/exx").unwrap();
        let word = Word::new("abe").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 0).unwrap();

        assert!(wizard.run().unwrap());
        assert_eq!(
            wizard.path().positions(),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
        assert!(wizard.path().is_eliminated_at(Position::new(1, 0), 1));
    }

    #[test]
    fn never_reuses_a_cell() {
        let board = parse_board("ab/xx").unwrap();
        let word = Word::new("aba").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 0).unwrap();
        assert!(!wizard.run().unwrap());
    }

    #[test]
    fn swap_budget_is_not_replenished_by_backtracking() {
        // The only swap is spent on a branch that dead-ends; after backing
        // out of it the search may not swap again.
        let board = parse_board("aba/cdc/aba").unwrap();
        let word = Word::new("abza").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 1).unwrap();

        assert!(!wizard.run().unwrap());
        assert_eq!(wizard.swaps_remaining(), 0);
    }

    #[test]
    fn halts_on_uniform_board() {
        // Exact counts: the search explores every simple path of `a`s from
        // the corner, so any change in pruning shows up here.
        let board = parse_board("aaaa/aaaa/aaaa/aaaa").unwrap();
        for (text, swaps, expected) in [
            ("aaab", 0, 37),
            ("aaaab", 0, 187),
            ("aabb", 1, 9),
            ("aaaaaaab", 0, 10_827),
        ] {
            let word = Word::new(text).unwrap();
            let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, swaps).unwrap();

            assert!(!wizard.run().unwrap(), "{text} should not be found");
            assert_eq!(wizard.iterations(), expected, "{text}");
            assert_eq!(wizard.path().len(), 1);
        }
    }

    #[test]
    fn uniform_board_cost_grows_with_word_length() {
        let board = parse_board("aaaaa/aaaaa/aaaaa/aaaaa/aaaaa").unwrap();
        for (text, expected) in [("aaab", 37), ("aaaaab", 969), ("aaaaaab", 4717)] {
            let word = Word::new(text).unwrap();
            let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 0).unwrap();

            assert!(!wizard.run().unwrap());
            assert_eq!(wizard.iterations(), expected, "{text}");
        }
    }

    #[test]
    fn swap_with_no_free_neighbour_is_followed_by_backtrack() {
        let board = parse_board("ab/dc").unwrap();
        let word = Word::new("abcdx").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 0, 0), &word, 1).unwrap();

        for _ in 0..3 {
            wizard.step().unwrap();
        }
        assert_eq!(wizard.path().effective_text(), "abcd");

        // Every neighbour of `d` is on the path: the swap attempt is spent
        // without a step and the budget is untouched.
        wizard.step().unwrap();
        assert_eq!(wizard.path().len(), 4);
        assert!(wizard.last_attempt_was_swap);
        assert_eq!(wizard.swaps_remaining(), 1);

        // The next iteration backs up instead of trying to swap again.
        wizard.step().unwrap();
        assert_eq!(wizard.path().effective_text(), "abc");
        assert!(wizard.path().is_eliminated_at(Position::new(0, 1), 3));
        assert!(!wizard.last_attempt_was_swap);
        assert_eq!(wizard.swaps_remaining(), 1);

        // Five steps taken by hand, six more in `run`
        assert!(!wizard.run().unwrap());
        assert_eq!(wizard.iterations(), 6);
        assert_eq!(wizard.path().len(), 1);
        assert_eq!(wizard.swaps_remaining(), 0);
    }

    #[test]
    fn uniform_board_with_swaps_succeeds() {
        let board = parse_board("aaa/aaa/aaa").unwrap();
        let word = Word::new("aab").unwrap();
        let mut wizard = Wizard::new(&board, start(&board, 1, 1), &word, 1).unwrap();
        assert!(wizard.run().unwrap());
        assert_valid(wizard.path(), &word);
    }

    #[test]
    fn successful_paths_are_valid_from_every_start() {
        let board = parse_board("tesla/ranch/ideal/onset/maple").unwrap();
        for text in ["tran", "ideal", "reds", "leach", "onset", "plane"] {
            let word = Word::new(text).unwrap();
            let Some(starts) = board.find(word.first().unwrap()) else {
                continue;
            };
            for s in starts {
                for swaps in 0..=2 {
                    let mut wizard = Wizard::new(&board, s, &word, swaps).unwrap();
                    if wizard.run().unwrap() {
                        assert_valid(wizard.path(), &word);
                        assert!(wizard.path().swapped_steps().len() <= swaps);
                    }
                }
            }
        }
    }
}
