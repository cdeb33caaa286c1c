//! End-to-end tests for the Squaredle solver.
//!
//! These run the whole pipeline — word-list loading, filtering, trie
//! population, grid traversal — against a fixture dictionary, and check the
//! invariants every returned path must satisfy.

use std::collections::HashSet;

use squaredle::grid::Grid;
use squaredle::solver::Solver;
use squaredle::word_list::WordList;

/// Load the fixture word list from disk.
fn fixture_words() -> Vec<String> {
    WordList::load_from_path("tests/fixtures/word_list.txt")
        .expect("failed to read fixture word list")
        .words
}

/// A solved 3x3 puzzle:
/// ```text
/// ABC
/// DEF
/// GHI
/// ```
fn solved_three_by_three() -> Solver {
    let mut solver = Solver::new(Grid::new("ABCDEFGHI").unwrap(), fixture_words());
    solver.solve();
    solver
}

/// A solved 4x4 puzzle containing ANTHROPOMORPHIZE:
/// ```text
/// HTEZ
/// RONI
/// OPAH
/// MORP
/// ```
fn solved_four_by_four() -> Solver {
    let mut solver = Solver::new(Grid::new("HTEZRONIOPAHMORP").unwrap(), fixture_words());
    solver.solve();
    solver
}

mod word_list_filtering {
    use super::*;

    #[test]
    fn only_board_compatible_words_survive() {
        // Of the fixture list, only ABED, BEAD and CEDE use nothing but
        // A-I letters, fit in 9 cells and reach the 4-letter minimum.
        let solver = Solver::new(Grid::new("ABCDEFGHI").unwrap(), fixture_words());
        assert_eq!(solver.word_list_count(), 3);
    }

    #[test]
    fn a_bigger_board_admits_more_words() {
        let small = Solver::new(Grid::new("ABCDEFGHI").unwrap(), fixture_words());
        let large = Solver::new(Grid::new("HTEZRONIOPAHMORP").unwrap(), fixture_words());
        assert!(large.word_list_count() > small.word_list_count());
    }

    #[test]
    fn words_longer_than_the_board_never_appear() {
        // ANTHROPOMORPHIZE (16 letters) cannot fit a 9-cell board
        let solver = solved_three_by_three();
        assert!(!solver
            .words()
            .unwrap()
            .contains(&"ANTHROPOMORPHIZE".to_string()));
    }
}

mod small_board {
    use super::*;

    #[test]
    fn finds_abed_and_bead_with_expected_paths() {
        let solver = solved_three_by_three();

        assert_eq!(solver.paths("ABED").unwrap(), [vec![0, 1, 4, 3]]);
        assert_eq!(solver.paths("BEAD").unwrap(), [vec![1, 4, 0, 3]]);
    }

    #[test]
    fn short_word_is_found_when_the_minimum_is_lowered() {
        // A(0) -> D(3) -> B(1)
        let mut solver =
            Solver::with_min_word_length(Grid::new("ABCDEFGHI").unwrap(), fixture_words(), 3);
        solver.solve();

        assert_eq!(solver.paths("ADB").unwrap(), [vec![0, 3, 1]]);
    }

    #[test]
    fn words_needing_a_repeat_visit_are_excluded() {
        // CEDE would need the E cell twice
        let solver = solved_three_by_three();
        assert!(!solver.words().unwrap().contains(&"CEDE".to_string()));
    }

    #[test]
    fn gap_cells_break_paths_through_them() {
        // Knock out the E cell: ABED and BEAD become untraceable
        let mut solver = Solver::new(Grid::new("ABCD_FGHI").unwrap(), fixture_words());
        solver.solve();

        assert_eq!(solver.word_count().unwrap(), 0);
    }
}

mod large_board {
    use super::*;

    #[test]
    fn finds_word_spanning_the_whole_board() {
        let solver = solved_four_by_four();

        let paths = solver.paths("ANTHROPOMORPHIZE").unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 16);
    }

    #[test]
    fn excludes_words_without_an_adjacency_chain() {
        // All letters of OPERA, HORN, TRAIN and ZONE are on the board, but
        // never mutually adjacent in the required order.
        let solver = solved_four_by_four();
        let words = solver.words().unwrap();

        for absent in ["OPERA", "HORN", "TRAIN", "ZONE"] {
            assert!(!words.contains(&absent.to_string()), "{absent} should be absent");
        }
    }

    #[test]
    fn word_with_two_geometries_gets_both_paths() {
        // PORT can route P(9) through either O(8) or O(5)
        let solver = solved_four_by_four();

        let paths: HashSet<Vec<usize>> = solver.paths("PORT").unwrap().iter().cloned().collect();
        let expected: HashSet<Vec<usize>> =
            [vec![9, 8, 4, 1], vec![9, 5, 4, 1]].into_iter().collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn single_geometry_words_get_exactly_one_path() {
        let solver = solved_four_by_four();

        assert_eq!(solver.paths("MOAN").unwrap(), [vec![12, 13, 10, 6]]);
        assert_eq!(solver.paths("INTO").unwrap(), [vec![7, 6, 1, 5]]);
    }
}

mod solution_invariants {
    use super::*;

    #[test]
    fn every_path_is_valid() {
        let solver = solved_four_by_four();
        let grid = solver.grid();

        for word in solver.words().unwrap() {
            for path in solver.paths(&word).unwrap() {
                // length matches the word
                assert_eq!(path.len(), word.chars().count(), "{word}: {path:?}");

                // no repeated cells
                let distinct: HashSet<usize> = path.iter().copied().collect();
                assert_eq!(distinct.len(), path.len(), "{word}: {path:?}");

                // consecutive cells are mutually adjacent
                for pair in path.windows(2) {
                    assert!(
                        grid.neighbours_of(pair[0]).contains(&pair[1]),
                        "{word}: {} and {} not adjacent",
                        pair[0],
                        pair[1]
                    );
                }

                // the path spells the word
                let spelled: String = path.iter().map(|&cell| grid.letter(cell)).collect();
                assert_eq!(spelled, word);
            }
        }
    }

    #[test]
    fn every_found_word_came_from_the_dictionary() {
        let dictionary: HashSet<String> = fixture_words().into_iter().collect();
        let solver = solved_four_by_four();

        for word in solver.words().unwrap() {
            assert!(dictionary.contains(&word), "{word} not in the fixture list");
        }
    }

    #[test]
    fn path_count_is_the_sum_over_words() {
        let solver = solved_four_by_four();

        let total: usize = solver
            .words()
            .unwrap()
            .iter()
            .map(|word| solver.paths(word).unwrap().len())
            .sum();
        assert_eq!(solver.path_count().unwrap(), total);
        assert_eq!(solver.word_count().unwrap(), solver.words().unwrap().len());
    }

    #[test]
    fn read_queries_are_idempotent() {
        let solver = solved_four_by_four();

        assert_eq!(solver.words().unwrap(), solver.words().unwrap());
        assert_eq!(
            solver.paths("PORT").unwrap(),
            solver.paths("PORT").unwrap()
        );
        assert_eq!(solver.path_count().unwrap(), solver.path_count().unwrap());
    }
}
