//! The search engine: finds every dictionary word traceable as a connected
//! path of adjacent cells in the grid.
//!
//! # Algorithm
//!
//! The solver runs a backtracking depth-first traversal from every playable
//! cell. At each step it asks the [`Trie`] whether the letters collected so
//! far are still a prefix of any dictionary word; if not, the entire branch
//! is pruned. Exact-word hits are recorded into [`Solutions`] together with
//! the cell path that spelled them. A cell may appear at most once per path,
//! so recursion depth is bounded by the cell count and the search always
//! terminates — "no solutions" is a valid, non-error outcome.
//!
//! Dictionary words are filtered before trie insertion: anything longer
//! than the board, shorter than the minimum word length, or using a letter
//! the board does not have is rejected up front.
//!
//! # Examples
//!
//! ```
//! use squaredle::grid::Grid;
//! use squaredle::solver::Solver;
//!
//! let grid = Grid::new("ABCDEFGHI")?;
//! let mut solver = Solver::new(grid, ["bead", "abed", "opera"]);
//! solver.solve();
//!
//! assert!(solver.words()?.contains(&"BEAD".to_string()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::{debug, info};

use crate::errors::SolverError;
use crate::grid::Grid;
use crate::solutions::{SolutionPath, Solutions};
use crate::trie::Trie;

/// Conventional Squaredle minimum: words under four letters don't count.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Observability hook called once per search step with the letters collected
/// so far, the path under construction, and the running prefix-hit count.
pub type ProgressFn = Box<dyn FnMut(&str, &[usize], usize)>;

/// Solves one puzzle against one dictionary.
///
/// Construction loads and filters the dictionary; [`Solver::solve`] runs the
/// traversal. Solution queries return [`SolverError::NotSolved`] until the
/// solve has completed.
pub struct Solver {
    grid: Grid,
    trie: Trie,
    solutions: Solutions,
    solved: bool,
    min_word_length: usize,
    on_progress: Option<ProgressFn>,
}

impl Solver {
    /// Build a solver over `grid`, feeding `words` through the filter into
    /// the prefix dictionary. Matching is case-insensitive: every candidate
    /// is uppercased before filtering and insertion.
    pub fn new<I, S>(grid: Grid, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_min_word_length(grid, words, DEFAULT_MIN_WORD_LENGTH)
    }

    /// As [`Solver::new`], with a non-standard minimum word length.
    pub fn with_min_word_length<I, S>(grid: Grid, words: I, min_word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique_letters = grid.unique_letters();
        let cell_count = grid.cell_count();
        let mut trie = Trie::new();
        let mut candidates = 0usize;

        for word in words {
            candidates += 1;
            let word = word.as_ref().to_uppercase();
            if is_playable(&word, &unique_letters, min_word_length, cell_count) {
                trie.insert(&word);
            }
        }

        info!(
            "dictionary loaded: {} of {candidates} words usable on this board",
            trie.word_count()
        );

        Self {
            grid,
            trie,
            solutions: Solutions::new(),
            solved: false,
            min_word_length,
            on_progress: None,
        }
    }

    /// Install a progress callback, invoked synchronously at every search
    /// step. A no-op by default; never required for correctness.
    #[must_use]
    pub fn with_progress(mut self, on_progress: ProgressFn) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Run the full traversal, starting one path from every playable cell.
    ///
    /// Idempotent: calling it again after completion does nothing.
    pub fn solve(&mut self) {
        if self.solved {
            return;
        }

        let mut search = Search {
            grid: &self.grid,
            trie: &self.trie,
            solutions: &mut self.solutions,
            on_progress: &mut self.on_progress,
            prefix_hits: 0,
        };

        let mut path = Vec::with_capacity(search.grid.cell_count());
        let mut word = String::with_capacity(search.grid.cell_count());
        for cell in 0..search.grid.cell_count() {
            if !search.grid.is_gap(cell) {
                search.attempt(cell, &mut path, &mut word);
            }
        }

        let prefix_hits = search.prefix_hits;
        debug!(
            "search complete: {} words, {} paths, {prefix_hits} prefix hits",
            self.solutions.word_count(),
            self.solutions.path_count(),
        );
        self.solved = true;
    }

    /// The board this solver was built over. Available before the solve,
    /// since it is construction-time data.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of dictionary words that survived filtering.
    #[must_use]
    pub fn word_list_count(&self) -> usize {
        self.trie.word_count()
    }

    /// Minimum length a word must have to be registered.
    #[must_use]
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// All discovered words, in discovery order.
    ///
    /// # Errors
    ///
    /// [`SolverError::NotSolved`] if called before [`Solver::solve`].
    pub fn words(&self) -> Result<Vec<String>, SolverError> {
        Ok(self.solutions()?.words())
    }

    /// Every path found for `word`; empty if the word was not found.
    ///
    /// # Errors
    ///
    /// [`SolverError::NotSolved`] if called before [`Solver::solve`].
    pub fn paths(&self, word: &str) -> Result<&[SolutionPath], SolverError> {
        Ok(self.solutions()?.paths(word))
    }

    /// Number of distinct words found.
    ///
    /// # Errors
    ///
    /// [`SolverError::NotSolved`] if called before [`Solver::solve`].
    pub fn word_count(&self) -> Result<usize, SolverError> {
        Ok(self.solutions()?.word_count())
    }

    /// Total number of `(word, path)` pairs found.
    ///
    /// # Errors
    ///
    /// [`SolverError::NotSolved`] if called before [`Solver::solve`].
    pub fn path_count(&self) -> Result<usize, SolverError> {
        Ok(self.solutions()?.path_count())
    }

    fn solutions(&self) -> Result<&Solutions, SolverError> {
        if self.solved {
            Ok(&self.solutions)
        } else {
            Err(SolverError::NotSolved)
        }
    }
}

/// Pre-insertion dictionary filter. `word` is already uppercase;
/// `unique_letters` is the board's sorted playable-letter set.
fn is_playable(
    word: &str,
    unique_letters: &[char],
    min_word_length: usize,
    cell_count: usize,
) -> bool {
    let length = word.chars().count();
    length >= min_word_length
        && length <= cell_count
        && word
            .chars()
            .all(|c| unique_letters.binary_search(&c).is_ok())
}

/// Borrowed view of the solver's fields for the duration of one traversal.
/// Grid and trie are read-only; the solutions set is the single writer's.
struct Search<'a> {
    grid: &'a Grid,
    trie: &'a Trie,
    solutions: &'a mut Solutions,
    on_progress: &'a mut Option<ProgressFn>,
    prefix_hits: usize,
}

impl Search<'_> {
    /// Visit `cell`, extending the current path and word, then recurse into
    /// every playable neighbour not already on the path. Backtracks on exit.
    fn attempt(&mut self, cell: usize, path: &mut Vec<usize>, word: &mut String) {
        path.push(cell);
        word.push(self.grid.letter(cell));

        if let Some(callback) = self.on_progress.as_mut() {
            callback(word.as_str(), path.as_slice(), self.prefix_hits);
        }

        let hit = self.trie.query(word);
        if hit.known_prefix {
            self.prefix_hits += 1;

            if hit.exact_word {
                self.solutions.add(word, path.clone());
            }

            for &neighbour in self.grid.neighbours_of(cell) {
                if !self.grid.is_gap(neighbour) && !path.contains(&neighbour) {
                    self.attempt(neighbour, path, word);
                }
            }
        }

        word.pop();
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn three_by_three() -> Grid {
        Grid::new("ABCDEFGHI").unwrap()
    }

    #[test]
    fn finds_word_with_expected_path() {
        // A(0) -> B(1) -> E(4) -> D(3)
        let mut solver = Solver::new(three_by_three(), ["abed"]);
        solver.solve();

        assert_eq!(solver.words().unwrap(), vec!["ABED"]);
        assert_eq!(solver.paths("ABED").unwrap(), [vec![0, 1, 4, 3]]);
    }

    #[test]
    fn lowered_minimum_admits_short_words() {
        // A(0) -> D(3) -> B(1)
        let mut solver = Solver::with_min_word_length(three_by_three(), ["adb"], 3);
        solver.solve();

        assert_eq!(solver.paths("ADB").unwrap(), [vec![0, 3, 1]]);
    }

    #[test]
    fn default_minimum_rejects_short_words() {
        let solver = Solver::new(three_by_three(), ["adb", "abed"]);
        assert_eq!(solver.word_list_count(), 1);
        assert_eq!(solver.min_word_length(), DEFAULT_MIN_WORD_LENGTH);
    }

    #[test]
    fn words_longer_than_the_board_are_never_inserted() {
        let solver = Solver::new(three_by_three(), ["ABCDEFGHIA"]);
        assert_eq!(solver.word_list_count(), 0);
    }

    #[test]
    fn words_with_off_board_letters_are_never_inserted() {
        let solver = Solver::new(three_by_three(), ["face", "bead"]);
        assert_eq!(solver.word_list_count(), 1);
    }

    #[test]
    fn queries_before_solve_fail() {
        let solver = Solver::new(three_by_three(), ["bead"]);

        assert!(matches!(solver.words(), Err(SolverError::NotSolved)));
        assert!(matches!(solver.paths("BEAD"), Err(SolverError::NotSolved)));
        assert!(matches!(solver.word_count(), Err(SolverError::NotSolved)));
        assert!(matches!(solver.path_count(), Err(SolverError::NotSolved)));
    }

    #[test]
    fn solve_is_idempotent() {
        let mut solver = Solver::new(three_by_three(), ["bead", "abed"]);
        solver.solve();
        let first = solver.words().unwrap();
        let first_paths = solver.path_count().unwrap();

        solver.solve();
        assert_eq!(solver.words().unwrap(), first);
        assert_eq!(solver.path_count().unwrap(), first_paths);
    }

    #[test]
    fn repeat_visit_words_are_excluded() {
        // CEDE needs E twice: C(2) -> E(4) -> D(3) -> E(4) again
        let mut solver = Solver::new(three_by_three(), ["cede"]);
        solver.solve();

        assert_eq!(solver.word_count().unwrap(), 0);
    }

    #[test]
    fn paths_never_enter_gap_cells() {
        // Same board with E knocked out: BEAD and ABED need cell 4.
        let mut solver = Solver::new(Grid::new("ABCD_FGHI").unwrap(), ["bead", "abed"]);
        solver.solve();

        assert_eq!(solver.word_count().unwrap(), 0);
        // The gap letter is not playable either.
        assert_eq!(solver.word_list_count(), 0);
    }

    #[test]
    fn search_never_starts_on_a_gap() {
        let mut solver =
            Solver::with_min_word_length(Grid::new("_BCDEFGHI").unwrap(), ["bed"], 3);
        solver.solve();

        // B(1) -> E(4) -> D(3); the gap at cell 0 is never touched
        assert_eq!(solver.paths("BED").unwrap(), [vec![1, 4, 3]]);
    }

    #[test]
    fn progress_callback_is_invoked() {
        let calls = Rc::new(RefCell::new(0usize));
        let calls_seen = Rc::clone(&calls);

        let mut solver = Solver::new(three_by_three(), ["bead"]).with_progress(Box::new(
            move |word, path, _hits| {
                assert_eq!(word.len(), path.len());
                *calls_seen.borrow_mut() += 1;
            },
        ));
        solver.solve();

        // one call per starting cell at minimum
        assert!(*calls.borrow() >= 9);
    }

    #[test]
    fn empty_dictionary_is_a_valid_outcome() {
        let mut solver = Solver::new(three_by_three(), Vec::<String>::new());
        solver.solve();

        assert!(solver.words().unwrap().is_empty());
        assert_eq!(solver.path_count().unwrap(), 0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut solver = Solver::new(Grid::new("abcdefghi").unwrap(), ["BeAd"]);
        solver.solve();

        assert_eq!(solver.words().unwrap(), vec!["BEAD"]);
    }
}
