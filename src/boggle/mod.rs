// Boards are square grids over the 26 lowercase letters
pub mod batch;
pub mod board;
pub mod config;
pub mod dice;
pub mod dictionary;
pub mod error;
pub mod scoring;
pub mod solver;
pub mod trie;
pub mod util;

pub const ALPHABET_SIZE: usize = 26;
pub const DEFAULT_MIN_LENGTH: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 16;
pub const DEFAULT_BOARD_SIZE: usize = 4;

pub use self::board::Board;
pub use self::dictionary::WordPolicy;
pub use self::error::{BoggleError, Result};
pub use self::solver::{Solution, Solver};
pub use self::trie::Trie;
