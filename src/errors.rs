//! Error types for puzzle construction, word-list loading and solving.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - P001: `NotSquare` (Letter count is not a perfect square)
//! - P002: `TooSmall` (Fewer than four cells)
//! - P003: `InvalidCharacter` (Cell is not an uppercase letter or gap marker)
//! - W001: `Unreadable` (Word list could not be read)
//! - S001: `NotSolved` (Solution data requested before solve completed)
//!
//! # Examples
//!
//! ```
//! use squaredle::grid::Grid;
//!
//! match Grid::new("ABCDEFG") {
//!     Err(e) => {
//!         println!("Error: {e}");
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {help}");
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Errors raised while validating puzzle letters into a [`crate::grid::Grid`].
///
/// All variants are fatal to that construction attempt; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("{cell_count} letters cannot form a square grid")]
    NotSquare { cell_count: usize },

    #[error("{cell_count} letters is below the 4-cell (2x2) minimum")]
    TooSmall { cell_count: usize },

    #[error("invalid character '{ch}' at cell {index} (only A-Z or '_' allowed)")]
    InvalidCharacter { ch: char, index: usize },
}

impl PuzzleError {
    /// Returns the error code for this error variant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::NotSquare { .. } => "P001",
            PuzzleError::TooSmall { .. } => "P002",
            PuzzleError::InvalidCharacter { .. } => "P003",
        }
    }

    /// Returns optional help text suggesting how to fix the error.
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::NotSquare { .. } => {
                Some("Provide 4, 9, 16, 25... letters, one per cell, row by row")
            }
            PuzzleError::TooSmall { .. } => Some("The smallest playable grid is 2x2"),
            PuzzleError::InvalidCharacter { .. } => {
                Some("Use letters for playable cells and '_' for gaps")
            }
        }
    }

    /// Formats the error with its code and help text for end users.
    #[must_use]
    pub fn display_detailed(&self) -> String {
        let mut out = format!("[{}] {self}", self.code());
        if let Some(help) = self.help() {
            out.push_str("\nHelp: ");
            out.push_str(help);
        }
        out
    }
}

/// Error raised when the word-list source cannot be read.
///
/// An unreadable word list is a loud configuration failure, never silently
/// treated as an empty list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list from '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordListError {
    /// Returns the error code for this error variant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordListError::Unreadable { .. } => "W001",
        }
    }

    /// Returns optional help text suggesting how to fix the error.
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordListError::Unreadable { .. } => {
                Some("Check the path passed via --word-list (one word per line)")
            }
        }
    }

    /// Formats the error with its code and help text for end users.
    #[must_use]
    pub fn display_detailed(&self) -> String {
        let mut out = format!("[{}] {self}", self.code());
        if let Some(help) = self.help() {
            out.push_str("\nHelp: ");
            out.push_str(help);
        }
        out
    }
}

/// Errors surfaced by the [`crate::solver::Solver`] query API.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Solution data was requested before `solve()` completed. This is a
    /// programming-contract violation, not a recoverable condition.
    #[error("solutions requested before solve() was called")]
    NotSolved,
}

impl SolverError {
    /// Returns the error code for this error variant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::NotSolved => "S001",
        }
    }

    /// Returns optional help text suggesting how to fix the error.
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::NotSolved => Some("Call solve() before querying words or paths"),
        }
    }

    /// Formats the error with its code and help text for end users.
    #[must_use]
    pub fn display_detailed(&self) -> String {
        let mut out = format!("[{}] {self}", self.code());
        if let Some(help) = self.help() {
            out.push_str("\nHelp: ");
            out.push_str(help);
        }
        out
    }
}
