//! Loading and normalizing the dictionary word list.
//!
//! The on-disk format is a plain newline-delimited word list, one word per
//! line. This module is the "word source" collaborator: it reads and
//! normalizes candidates, while puzzle-specific filtering (length bounds,
//! letters present on the board) belongs to the solver.
//!
//! Parsing is split in two, so in-memory sources (embedded lists, tests)
//! skip the filesystem entirely:
//! - [`WordList::parse_from_str`] — pure, works on any `&str`.
//! - [`WordList::load_from_path`] — reads a file and delegates to the above.
//!
//! Normalization: lines are trimmed and uppercased; empty lines and lines
//! containing anything other than ASCII letters are skipped (and counted);
//! the final list is sorted and deduplicated.

use std::path::Path;

use log::debug;

use crate::errors::WordListError;

/// A processed, ready-to-insert word list.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Uppercase words, sorted and deduplicated.
    pub words: Vec<String>,
    /// Lines dropped during normalization (blank or non-alphabetic).
    pub skipped: usize,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// Each line is one candidate word. Lines are trimmed and uppercased;
    /// blank lines and lines with non-letter characters are skipped.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Self {
        let mut skipped = 0;
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if !line.is_empty() && line.chars().all(|c| c.is_ascii_alphabetic()) {
                    Some(line.to_uppercase())
                } else {
                    if !line.is_empty() {
                        debug!("skipping non-alphabetic word-list line: {line:?}");
                    }
                    skipped += 1;
                    None
                }
            })
            .collect();

        // dedup only removes adjacent duplicates, so sort first
        words.sort_unstable();
        words.dedup();

        Self { words, skipped }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Unreadable`] if the file cannot be read.
    /// An unreadable list is never treated as an empty one.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| WordListError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::parse_from_str(&contents))
    }
}
