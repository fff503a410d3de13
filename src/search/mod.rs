//! Word search over a board
//!
//! [`Wizard`] runs one backtracking attempt for a (word, start cell) pair;
//! the batch functions fan that out over word lists, optionally in parallel.

mod batch;
mod wizard;

pub use batch::{DEFAULT_BATCH_SIZE, rank, search, search_parallel, search_parallel_with};
pub use wizard::{Wizard, WizardState};

use crate::core::{CursorError, PathError, Position};
use std::fmt;

/// Default number of letter swaps per search attempt
pub const DEFAULT_SWAP_BUDGET: usize = 1;

/// Error type for the search engine
///
/// Only `StartMismatch` is reachable through the public API; the other
/// variants mean the engine's own bookkeeping went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start cell does not hold the word's first letter
    StartMismatch { word: String, position: Position },
    Path(PathError),
    Cursor(CursorError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartMismatch { word, position } => write!(
                f,
                "cell {position} does not hold the first letter of {word:?}"
            ),
            Self::Path(e) => write!(f, "path bookkeeping failed: {e}"),
            Self::Cursor(e) => write!(f, "word cursor failed: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::StartMismatch { .. } => None,
            Self::Path(e) => Some(e),
            Self::Cursor(e) => Some(e),
        }
    }
}

impl From<PathError> for SearchError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<CursorError> for SearchError {
    fn from(e: CursorError) -> Self {
        Self::Cursor(e)
    }
}
