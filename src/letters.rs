//! Helpers for setting puzzles rather than solving them: random letter
//! strings, shuffling, and padding a letter string out to a square board.

use rand::seq::SliceRandom;
use rand::Rng;

/// Letter pool weighted roughly like an English tile-game distribution, so
/// generated boards contain solvable words more often than uniform noise.
const DISTRIBUTION: &[u8] = b"EEEEEEEEEEEEEEEEAAAAAAAAAIIIIIIIIIOOOOOOOONNNNNN\
RRRRRRTTTTTTLLLLSSSSUUUDDDDGGGBBCCMMPPFFHHVVWWYYKJXQZ";

/// Generate `count` random letters drawn from the weighted pool.
#[must_use]
pub fn random_letters(count: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| DISTRIBUTION[rng.gen_range(0..DISTRIBUTION.len())] as char)
        .collect()
}

/// Return the letters in a random order.
#[must_use]
pub fn shuffle(letters: &str) -> String {
    let mut chars: Vec<char> = letters.chars().collect();
    chars.shuffle(&mut rand::thread_rng());
    chars.into_iter().collect()
}

/// Pad a letter string with random letters up to the next perfect square,
/// so it can form a board. Already-square input is returned unchanged.
#[must_use]
pub fn pad_to_square(letters: &str) -> String {
    let count = letters.chars().count();
    let mut side = (count as f64).sqrt() as usize;
    if side * side < count {
        side += 1;
    }

    let mut padded = letters.to_string();
    padded.push_str(&random_letters(side * side - count));
    padded
}
