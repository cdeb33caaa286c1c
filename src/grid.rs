//! The puzzle board: a square grid of letters with precomputed adjacency.
//!
//! A [`Grid`] is built once from a row-major letter string and is immutable
//! afterwards. Neighbour lists (8-directional, edge-clipped) are computed at
//! construction time; they depend only on the side length, never on the
//! letters, so the same geometry serves any puzzle of that size.
//!
//! Boards may contain unplayable "gap" cells, written as [`GAP`]. Gaps keep
//! their place in the geometry (index arithmetic stays uniform) but the
//! solver never lets a path enter one.

use crate::errors::PuzzleError;

/// Marker for an unplayable cell.
pub const GAP: char = '_';

/// The eight compass-direction offsets, row-major order:
/// NW, N, NE, W, E, SW, S, SE.
const DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// An immutable square letter grid with per-cell neighbour lists.
#[derive(Debug, Clone)]
pub struct Grid {
    letters: Vec<char>,
    side_length: usize,
    neighbours: Vec<Vec<usize>>,
}

impl Grid {
    /// Build a grid from a row-major letter string (left to right, top to
    /// bottom). Letters are normalized to uppercase; `'_'` marks a gap.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::TooSmall`] if there are fewer than 4 cells.
    /// - [`PuzzleError::NotSquare`] if the length has no integer square root.
    /// - [`PuzzleError::InvalidCharacter`] if any normalized cell is not
    ///   `A..=Z` or the gap marker.
    pub fn new(letters: &str) -> Result<Self, PuzzleError> {
        let letters: Vec<char> = letters.to_uppercase().chars().collect();
        let cell_count = letters.len();

        if cell_count < 4 {
            return Err(PuzzleError::TooSmall { cell_count });
        }

        let side_length = integer_sqrt(cell_count)
            .ok_or(PuzzleError::NotSquare { cell_count })?;

        if let Some((index, &ch)) = letters
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_uppercase() && **c != GAP)
        {
            return Err(PuzzleError::InvalidCharacter { ch, index });
        }

        let neighbours = calculate_neighbours(side_length);

        Ok(Self {
            letters,
            side_length,
            neighbours,
        })
    }

    /// Number of cells in the grid (side length squared, gaps included).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    /// Number of cells per row (and per column).
    #[must_use]
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// The letter at a cell index.
    #[must_use]
    pub fn letter(&self, cell: usize) -> char {
        self.letters[cell]
    }

    /// Whether the cell is an unplayable gap.
    #[must_use]
    pub fn is_gap(&self, cell: usize) -> bool {
        self.letters[cell] == GAP
    }

    /// All letters in row-major order, gaps included.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The neighbouring cell indices of `cell`, in fixed compass order
    /// (NW, N, NE, W, E, SW, S, SE) with off-board positions skipped.
    ///
    /// # Panics
    ///
    /// Panics if `cell >= cell_count()`.
    #[must_use]
    pub fn neighbours_of(&self, cell: usize) -> &[usize] {
        &self.neighbours[cell]
    }

    /// The distinct playable letters on the board, excluding gaps.
    /// Used to reject dictionary words that cannot possibly appear.
    #[must_use]
    pub fn unique_letters(&self) -> Vec<char> {
        let mut unique: Vec<char> = self
            .letters
            .iter()
            .copied()
            .filter(|&c| c != GAP)
            .collect();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Row-major textual rendering, one row per line with a trailing newline.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.cell_count() + self.side_length);
        for row in self.letters.chunks(self.side_length) {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    /// Every cell's neighbour list as text, one row of cells per line, for
    /// debugging/inspection. Each cell's neighbours are colon-separated;
    /// cells are comma-separated.
    #[must_use]
    pub fn neighbour_text(&self) -> String {
        (0..self.side_length)
            .map(|y| {
                (0..self.side_length)
                    .map(|x| {
                        self.neighbours[y * self.side_length + x]
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(":")
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

/// Exact integer square root, or `None` if `n` is not a perfect square.
fn integer_sqrt(n: usize) -> Option<usize> {
    // f64 sqrt is only a starting guess; verify exactly in integers.
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    (root * root == n).then_some(root)
}

/// Neighbour lists for every cell of a `side_length` x `side_length` board.
/// Purely geometric; independent of the letters.
fn calculate_neighbours(side_length: usize) -> Vec<Vec<usize>> {
    let side = side_length as isize;
    (0..side * side)
        .map(|i| {
            let (x, y) = (i % side, i / side);
            DELTAS
                .iter()
                .filter_map(|&(dx, dy)| {
                    let (nx, ny) = (x + dx, y + dy);
                    ((0..side).contains(&nx) && (0..side).contains(&ny))
                        .then(|| (ny * side + nx) as usize)
                })
                .collect()
        })
        .collect()
}
