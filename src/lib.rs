//! Solver for Squaredle-style word-search puzzles: given a square grid of
//! letters and a dictionary, find every word traceable as a path of adjacent
//! cells (8-directional, no cell revisited), and every distinct path that
//! spells it.
//!
//! The engine lives in [`grid`], [`trie`], [`solutions`] and [`solver`];
//! [`word_list`] loads dictionaries, [`report`] formats results for display,
//! and [`letters`] helps with setting puzzles rather than solving them.

pub mod errors;
pub mod grid;
pub mod letters;
pub mod log;
pub mod report;
pub mod solutions;
pub mod solver;
pub mod trie;
pub mod word_list;
