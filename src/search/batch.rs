//! Batch driver: many words, every start cell
//!
//! For each word, every board cell holding the word's first letter launches
//! one [`Wizard`]. Successful paths are collected in word order, then start
//! order. No de-duplication is done: two starts that end up on the same
//! cells both contribute a path.

use super::SearchError;
use super::wizard::Wizard;
use crate::core::{Board, Path, Word};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Words handed to each parallel worker
pub const DEFAULT_BATCH_SIZE: usize = 256;

/// Search every word from every matching start cell
///
/// Words whose first letter is not on the board contribute nothing.
///
/// # Errors
/// Propagates a `SearchError` from a wizard, which only happens if its
/// internal bookkeeping is violated.
///
/// # Examples
/// ```
/// use spellcast_solver::boards::parse_board;
/// use spellcast_solver::core::Word;
/// use spellcast_solver::search::search;
///
/// let board = parse_board("aba/cdc/aba").unwrap();
/// let words = vec![Word::new("aba").unwrap(), Word::new("zoo").unwrap()];
///
/// let paths = search(&board, &words, 0).unwrap();
/// assert!(!paths.is_empty());
/// assert!(paths.iter().all(|p| p.effective_text() == "aba"));
/// ```
pub fn search<'w>(
    board: &Board,
    words: impl IntoIterator<Item = &'w Word>,
    swap_budget: usize,
) -> Result<Vec<Path>, SearchError> {
    let mut found = Vec::new();

    for word in words {
        let Some(first) = word.first() else {
            continue;
        };
        let Some(starts) = board.find(first) else {
            continue;
        };

        for start in starts {
            let mut wizard = Wizard::new(board, start, word, swap_budget)?;
            if wizard.run()? {
                found.extend(wizard.into_path());
            }
        }
    }

    Ok(found)
}

/// Parallel [`search`] over slices of `batch_size` words
///
/// Results are concatenated; order is only guaranteed within one slice.
///
/// # Errors
/// Same as [`search`].
pub fn search_parallel(
    board: &Board,
    words: &[Word],
    swap_budget: usize,
    batch_size: usize,
) -> Result<Vec<Path>, SearchError> {
    search_parallel_with(board, words, swap_budget, batch_size, |_| {})
}

/// [`search_parallel`] that reports each finished slice's word count
///
/// `on_batch` is called from worker threads.
///
/// # Errors
/// Same as [`search`].
pub fn search_parallel_with<F>(
    board: &Board,
    words: &[Word],
    swap_budget: usize,
    batch_size: usize,
    on_batch: F,
) -> Result<Vec<Path>, SearchError>
where
    F: Fn(usize) + Sync,
{
    // Workers only read the board from here on
    board.warm_neighbors();

    let batches = words
        .par_chunks(batch_size.max(1))
        .map(|chunk| {
            let paths = search(board, chunk, swap_budget);
            on_batch(chunk.len());
            paths
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(batches.into_iter().flatten().collect())
}

/// Sort paths by total score, highest first (stable for equal scores)
pub fn rank(paths: &mut [Path]) {
    paths.sort_by(|a, b| compare_scores(b, a));
}

fn compare_scores(a: &Path, b: &Path) -> Ordering {
    a.total_score().total_cmp(&b.total_score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::{parse_board, random_board};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn finds_word_from_every_start() {
        let board = parse_board("aba/cdc/aba").unwrap();
        let paths = search(&board, &words(&["aba"]), 0).unwrap();

        // Every corner `a` reaches a `b` and a different `a`
        assert_eq!(paths.len(), 4);
        for path in &paths {
            assert_eq!(path.len(), 3);
            assert!((path.total_score() - 6.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn missing_first_letter_yields_nothing() {
        let board = parse_board("aba/cdc/aba").unwrap();
        let paths = search(&board, &words(&["zebra", "quiz"]), 2).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn results_follow_word_order() {
        let board = parse_board("aba/cdc/aba").unwrap();
        let paths = search(&board, &words(&["dab", "aba", "cab"]), 0).unwrap();
        let texts: Vec<String> = paths.iter().map(Path::effective_text).collect();

        let first_aba = texts.iter().position(|t| t == "aba").unwrap();
        let last_dab = texts.iter().rposition(|t| t == "dab").unwrap();
        let first_cab = texts.iter().position(|t| t == "cab").unwrap();
        assert!(last_dab < first_aba);
        assert!(first_aba < first_cab);
    }

    #[test]
    fn swap_budget_applies_per_attempt() {
        let board = parse_board("aba/cdc/aba").unwrap();
        let list = words(&["adza"]);

        assert!(search(&board, &list, 0).unwrap().is_empty());
        let paths = search(&board, &list, 1).unwrap();
        assert!(!paths.is_empty());
        for path in &paths {
            assert_eq!(path.effective_text(), "adza");
            assert_eq!(path.swapped_steps().len(), 1);
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = random_board(5, &mut rng);
        let list = crate::wordlists::embedded_words();

        let mut sequential = search(&board, &list, 1).unwrap();
        let mut parallel = search_parallel(&board, &list, 1, 16).unwrap();
        rank(&mut sequential);
        rank(&mut parallel);

        let key = |p: &Path| (p.effective_text(), p.positions());
        let mut seq_keys: Vec<_> = sequential.iter().map(key).collect();
        let mut par_keys: Vec<_> = parallel.iter().map(key).collect();
        seq_keys.sort();
        par_keys.sort();
        assert_eq!(seq_keys, par_keys);
    }

    #[test]
    fn parallel_reports_every_word() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let board = parse_board("tesla/ranch/ideal/onset/maple").unwrap();
        let list = words(&["ten", "ranch", "deal", "set", "map", "lane", "tea"]);
        let seen = AtomicUsize::new(0);

        search_parallel_with(&board, &list, 0, 3, |n| {
            seen.fetch_add(n, Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(seen.load(Ordering::Relaxed), list.len());
    }

    #[test]
    fn every_result_is_a_valid_placement() {
        let mut rng = StdRng::seed_from_u64(42);
        let list = crate::wordlists::embedded_words();

        for _ in 0..3 {
            let board = random_board(5, &mut rng);
            for path in search(&board, &list, 1).unwrap() {
                let positions = path.positions();
                for pair in positions.windows(2) {
                    assert!(pair[0].is_adjacent(pair[1]));
                }
                for (i, p) in positions.iter().enumerate() {
                    assert!(!positions[i + 1..].contains(p));
                }
                assert!(list.iter().any(|w| w.text() == path.effective_text()));
                assert!(path.swapped_steps().len() <= 1);
                for step in path.steps() {
                    assert_eq!(board.get(step.position()), Some(step.cell()));
                }
            }
        }
    }

    #[test]
    fn rank_sorts_descending() {
        let board = parse_board("tesla/ranch/ideal/onset/maple").unwrap();
        let mut paths = search(&board, &words(&["ten", "ranch", "deal", "lane"]), 1).unwrap();
        rank(&mut paths);
        for pair in paths.windows(2) {
            assert!(pair[0].total_score() >= pair[1].total_score());
        }
    }
}
