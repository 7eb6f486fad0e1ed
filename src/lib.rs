//! Finds every dictionary word that can be traced on a square Boggle board.
//!
//! The dictionary is loaded once into a [`Trie`](boggle::Trie) and shared
//! between any number of [`Solver`](boggle::Solver)s. Each solve walks the
//! board and the trie together, pruning as soon as a path stops being a
//! prefix of some word.
//!
//! ```
//! use std::sync::Arc;
//! use boggle_solver::boggle::{dictionary, Board, Solver, WordPolicy};
//!
//! let trie = dictionary::build_trie(["cat", "cats", "at", "ca"], &WordPolicy::with_length(2, 16));
//! let mut solver = Solver::with_trie(Arc::new(trie));
//! let board: Board = "catdlinemaropets".parse().unwrap();
//!
//! let solution = solver.solve(&board).unwrap();
//! assert_eq!(solution.word_count, 3);
//! let mut words = solver.found_words();
//! words.sort();
//! assert_eq!(words, ["at", "ca", "cat"]);
//! ```

pub mod boggle;
pub mod logging;
pub mod utils;
