use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::prelude::SliceRandom;
use rand::Rng;

use super::board::Board;
use super::ALPHABET_SIZE;

/// Faces of the sixteen classic dice. A `q` face stands for "qu".
pub const CLASSIC_DICE: [&str; 16] = [
    "aaeegn", "abbjoo", "achops", "affkps", "aoottw", "cimotu", "deilrx", "delrvy", "distty",
    "eeghnw", "eeinsu", "ehrtvw", "eiosst", "elrtty", "himnqu", "hlnnrz",
];

/// Board with every cell drawn uniformly from the alphabet
pub fn random_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Board {
    let size = size.max(1);
    let cells = Array2::random_using((size, size), Uniform::new(0u8, ALPHABET_SIZE as u8), rng);
    Board::from_array_unchecked(cells)
}

/// Rolls a die per cell and shakes them into random places. Boards with more
/// than sixteen cells reuse the dice in order.
pub fn dice_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Board {
    let size = size.max(1);
    let mut dice = (0..size * size)
        .map(|i| CLASSIC_DICE[i % CLASSIC_DICE.len()].as_bytes())
        .collect::<Vec<_>>();
    dice.shuffle(rng);

    let faces = dice
        .iter()
        .map(|die| die[rng.gen_range(0..die.len())] - b'a')
        .collect::<Vec<_>>();

    let cells = Array2::from_shape_fn((size, size), |(row, col)| faces[row * size + col]);
    Board::from_array_unchecked(cells)
}
