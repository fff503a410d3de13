//! Board solving command
//!
//! Filters the dictionary down to playable words, searches them all on one
//! board and returns the paths ranked by score.

use crate::core::{Board, Path, Word};
use crate::search::{
    DEFAULT_BATCH_SIZE, DEFAULT_SWAP_BUDGET, SearchError, rank, search, search_parallel_with,
};
use crate::wordlists::{DEFAULT_MIN_WORD_LENGTH, playable};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for solving a board
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub swap_budget: usize,
    pub min_word_len: usize,
    pub parallel: bool,
    pub batch_size: usize,
    pub show_progress: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            swap_budget: DEFAULT_SWAP_BUDGET,
            min_word_len: DEFAULT_MIN_WORD_LENGTH,
            parallel: true,
            batch_size: DEFAULT_BATCH_SIZE,
            show_progress: false,
        }
    }
}

/// Result of solving a board
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Every successful path, highest score first
    pub paths: Vec<Path>,
    pub words_searched: usize,
    pub duration: Duration,
}

impl SolveReport {
    /// The `limit` best paths
    #[must_use]
    pub fn top(&self, limit: usize) -> &[Path] {
        &self.paths[..limit.min(self.paths.len())]
    }

    /// Paths that needed at least one swap
    #[must_use]
    pub fn swapped_count(&self) -> usize {
        self.paths
            .iter()
            .filter(|p| !p.swapped_steps().is_empty())
            .count()
    }
}

/// Search every playable word on `board`
///
/// # Errors
///
/// Returns a `SearchError` if a search attempt's internal bookkeeping fails.
///
/// # Examples
/// ```
/// use spellcast_solver::boards::parse_board;
/// use spellcast_solver::commands::{SolveConfig, solve_board};
/// use spellcast_solver::wordlists::loader::words_from_slice;
///
/// let board = parse_board("tesla/ranch/ideal/onset/maple").unwrap();
/// let words = words_from_slice(&["ranch", "lane", "tea"]);
///
/// let report = solve_board(&board, &words, &SolveConfig::default()).unwrap();
/// assert_eq!(report.words_searched, 2);
/// assert!(report.paths.iter().any(|p| p.effective_text() == "ranch"));
/// ```
pub fn solve_board(
    board: &Board,
    words: &[Word],
    config: &SolveConfig,
) -> Result<SolveReport, SearchError> {
    let candidates = playable(words, board, config.min_word_len);
    let pb = progress_bar(candidates.len(), config.show_progress);
    let start = Instant::now();

    let mut paths = if config.parallel {
        search_parallel_with(
            board,
            &candidates,
            config.swap_budget,
            config.batch_size,
            |n| pb.inc(n as u64),
        )?
    } else {
        let mut found = Vec::new();
        for chunk in candidates.chunks(config.batch_size.max(1)) {
            found.extend(search(board, chunk, config.swap_budget)?);
            pb.inc(chunk.len() as u64);
        }
        found
    };

    rank(&mut paths);
    pb.finish_with_message(format!("{} paths", paths.len()));

    Ok(SolveReport {
        paths,
        words_searched: candidates.len(),
        duration: start.elapsed(),
    })
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );
    pb
}
