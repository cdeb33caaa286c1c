//! Accumulator for discovered words and the grid paths that spell them.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// An ordered sequence of distinct cell indices whose letters spell a word.
/// Consecutive entries are mutually adjacent in the grid.
pub type SolutionPath = Vec<usize>;

/// Unique words mapped to every distinct path that builds them.
///
/// Mutated only by the solver's `add` calls during a solve; read-only
/// afterwards. The solver guarantees at-most-once insertion per
/// `(word, path)` pair — this container does not deduplicate.
#[derive(Debug, Default)]
pub struct Solutions {
    paths_by_word: HashMap<String, Vec<SolutionPath>>,
    // words in discovery order, so words() is deterministic
    word_order: Vec<String>,
}

impl Solutions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a path for a word, creating the word's entry on first sight.
    pub fn add(&mut self, word: &str, path: SolutionPath) {
        match self.paths_by_word.entry(word.to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(path),
            Entry::Vacant(entry) => {
                self.word_order.push(word.to_string());
                entry.insert(vec![path]);
            }
        }
    }

    /// All discovered words, in discovery order. Sorting and grouping are
    /// the presentation layer's concern.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.word_order.clone()
    }

    /// Every path found for `word`; empty if the word was never discovered.
    #[must_use]
    pub fn paths(&self, word: &str) -> &[SolutionPath] {
        self.paths_by_word.get(word).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct words discovered.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.paths_by_word.len()
    }

    /// Total number of `(word, path)` pairs across all words.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths_by_word.values().map(Vec::len).sum()
    }
}
