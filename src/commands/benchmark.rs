//! Benchmark command
//!
//! Deals random boards and times the sequential and parallel search drivers
//! on each, checking that both find the same number of paths.

use crate::boards::{board_rng, random_board};
use crate::core::Word;
use crate::search::{SearchError, rank, search, search_parallel};
use crate::wordlists::playable;
use std::time::{Duration, Instant};

use super::solve::SolveConfig;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub boards: usize,
    pub words_searched: usize,
    pub paths_found: usize,
    pub sequential: Duration,
    pub parallel: Duration,
    /// Boards where the two drivers disagreed on the path count
    pub mismatches: usize,
    /// Best word over all boards and its score
    pub best: Option<(String, f64)>,
}

impl BenchmarkResult {
    /// Sequential time over parallel time
    #[must_use]
    pub fn speedup(&self) -> f64 {
        let parallel = self.parallel.as_secs_f64();
        if parallel > 0.0 {
            self.sequential.as_secs_f64() / parallel
        } else {
            0.0
        }
    }

    /// Boards solved per second by the parallel driver
    #[must_use]
    pub fn boards_per_second(&self) -> f64 {
        let parallel = self.parallel.as_secs_f64();
        if parallel > 0.0 {
            self.boards as f64 / parallel
        } else {
            0.0
        }
    }
}

/// Run the search drivers on `boards` random boards of edge `size`
///
/// The same `seed` always deals the same boards.
///
/// # Errors
///
/// Returns a `SearchError` if a search attempt's internal bookkeeping fails.
pub fn run_benchmark(
    words: &[Word],
    boards: usize,
    size: usize,
    seed: Option<u64>,
    config: &SolveConfig,
) -> Result<BenchmarkResult, SearchError> {
    let mut rng = board_rng(seed);
    let mut result = BenchmarkResult {
        boards,
        words_searched: 0,
        paths_found: 0,
        sequential: Duration::ZERO,
        parallel: Duration::ZERO,
        mismatches: 0,
        best: None,
    };

    for _ in 0..boards {
        let board = random_board(size, &mut rng);
        let candidates = playable(words, &board, config.min_word_len);
        result.words_searched += candidates.len();

        let start = Instant::now();
        let sequential = search(&board, &candidates, config.swap_budget)?;
        result.sequential += start.elapsed();

        let start = Instant::now();
        let mut parallel = search_parallel(
            &board,
            &candidates,
            config.swap_budget,
            config.batch_size,
        )?;
        result.parallel += start.elapsed();

        if sequential.len() != parallel.len() {
            result.mismatches += 1;
        }
        result.paths_found += parallel.len();

        rank(&mut parallel);
        if let Some(top) = parallel.first() {
            let score = top.total_score();
            if result.best.as_ref().is_none_or(|(_, best)| score > *best) {
                result.best = Some((top.effective_text(), score));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_words;

    #[test]
    fn benchmark_runs() {
        let words = embedded_words();
        let result = run_benchmark(&words, 2, 5, Some(11), &SolveConfig::default()).unwrap();

        assert_eq!(result.boards, 2);
        assert!(result.words_searched > 0);
        assert_eq!(result.mismatches, 0);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let words = embedded_words();
        let config = SolveConfig::default();

        let a = run_benchmark(&words, 2, 4, Some(5), &config).unwrap();
        let b = run_benchmark(&words, 2, 4, Some(5), &config).unwrap();
        assert_eq!(a.paths_found, b.paths_found);
        assert_eq!(a.words_searched, b.words_searched);
        assert_eq!(a.best.map(|(w, _)| w), b.best.map(|(w, _)| w));
    }

    #[test]
    fn benchmark_no_boards() {
        let words = embedded_words();
        let result = run_benchmark(&words, 0, 5, Some(1), &SolveConfig::default()).unwrap();

        assert_eq!(result.boards, 0);
        assert_eq!(result.paths_found, 0);
        assert!(result.best.is_none());
        assert!(result.boards_per_second().abs() < f64::EPSILON);
    }

    #[test]
    fn best_matches_top_score() {
        let words = embedded_words();
        let result = run_benchmark(&words, 1, 5, Some(3), &SolveConfig::default()).unwrap();

        if let Some((word, score)) = result.best {
            assert!(score > 0.0);
            assert!(word.len() >= 4);
        } else {
            assert_eq!(result.paths_found, 0);
        }
    }
}
