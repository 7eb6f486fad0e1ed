use std::fmt;
use std::sync::Arc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::{BoggleError, Result};
use super::scoring::{unit_scorer, Scorer};
use super::trie::{NodeId, Trie};
use super::util::Position;
use super::ALPHABET_SIZE;

/// Outcome of a single solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Distinct words found
    pub word_count: usize,
    /// Sum of the scorer over every distinct word
    pub score: u32,
}

/// Finds every dictionary word that can be traced on a board.
///
/// A solver owns all of its per-solve state: the generation counter, one
/// "last found" stamp per trie node and the visited mask. The trie itself is
/// only ever read, so several solvers (one per thread) can share one
/// `Arc<Trie>`. A single solver is driven through `&mut self` and cannot be
/// used by two solves at once.
pub struct Solver {
    trie: Option<Arc<Trie>>,
    scorer: Scorer,
    /// Bumped once per solve, never reset except on wrap around
    generation: u32,
    /// Generation in which each node's word was last reported
    stamps: Vec<u32>,
    visited: Array2<bool>,
}

impl fmt::Debug for Solver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Solver")
            .field("words", &self.trie.as_ref().map(|t| t.word_count()))
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with no dictionary. [`Solver::solve`] fails with
    /// `DictionaryNotLoaded` until one is loaded.
    pub fn new() -> Self {
        Self {
            trie: None,
            scorer: unit_scorer(),
            generation: 0,
            stamps: Vec::new(),
            visited: Array2::default((0, 0)),
        }
    }

    pub fn with_trie(trie: Arc<Trie>) -> Self {
        let mut solver = Self::new();
        solver.load_dictionary(trie);
        solver
    }

    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Attaches a dictionary, dropping anything found by earlier solves
    pub fn load_dictionary(&mut self, trie: Arc<Trie>) {
        self.stamps = vec![0; trie.node_count()];
        self.generation = 0;
        self.trie = Some(trie);
    }

    pub fn trie(&self) -> Option<&Arc<Trie>> {
        self.trie.as_ref()
    }

    /// Number of solves run against the current dictionary
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Finds every distinct word on the board
    pub fn solve(&mut self, board: &Board) -> Result<Solution> {
        let trie = self.trie.clone().ok_or(BoggleError::DictionaryNotLoaded)?;
        let cells = board.cells();
        let size = cells.nrows();
        if size == 0 || !cells.is_square() {
            return Err(BoggleError::invalid_board(format!(
                "board is {}x{}, expected a non-empty square",
                cells.nrows(),
                cells.ncols()
            )));
        }
        if cells.iter().any(|&c| c as usize >= ALPHABET_SIZE) {
            return Err(BoggleError::invalid_board("board holds a non-letter cell"));
        }

        self.next_generation();
        if self.visited.dim() != (size, size) {
            self.visited = Array2::default((size, size));
        }

        let mut search = Search {
            trie: &trie,
            cells,
            size,
            visited: &mut self.visited,
            stamps: &mut self.stamps,
            generation: self.generation,
            scorer: &*self.scorer,
            solution: Solution::default(),
        };
        for pos in board.positions() {
            if let Some(node) = trie.child(trie.root(), board[pos]) {
                search.visit(node, pos);
            }
        }
        let solution = search.solution;

        log::debug!(
            "Solve #{} on a {}x{} board: {} words, {} points",
            self.generation,
            size,
            size,
            solution.word_count,
            solution.score
        );
        Ok(solution)
    }

    /// Validates raw rows of letter offsets, then solves them
    pub fn solve_rows(&mut self, rows: &[Vec<u8>]) -> Result<Solution> {
        let board = Board::from_rows(rows)?;
        self.solve(&board)
    }

    /// Words found by the most recent solve, without duplicates and in no
    /// particular order
    pub fn found_words(&self) -> Vec<String> {
        let trie = match &self.trie {
            Some(t) if self.generation > 0 => t,
            _ => return Vec::new(),
        };
        let mut words = Vec::new();
        trie.traverse(
            |id, node| node.is_word() && self.stamps[id.index()] == self.generation,
            |id, _| words.push(trie.word_at(id)),
        );
        words
    }

    fn next_generation(&mut self) {
        if self.generation == u32::MAX {
            self.stamps.iter_mut().for_each(|s| *s = 0);
            self.generation = 0;
        }
        self.generation += 1;
    }
}

/// State of one solve, split off the solver so the DFS can borrow the trie
/// and the bookkeeping independently
struct Search<'a> {
    trie: &'a Trie,
    cells: &'a Array2<u8>,
    size: usize,
    visited: &'a mut Array2<bool>,
    stamps: &'a mut [u32],
    generation: u32,
    scorer: &'a (dyn Fn(&str) -> u32 + Send + Sync),
    solution: Solution,
}

impl<'a> Search<'a> {
    /// `node` is the trie node reached by the letters of the path ending at `pos`
    fn visit(&mut self, node: NodeId, pos: Position) {
        let stamp = &mut self.stamps[node.index()];
        if self.trie.is_word(node) && *stamp != self.generation {
            *stamp = self.generation;
            self.solution.word_count += 1;
            self.solution.score += (self.scorer)(&self.trie.word_at(node));
        }

        if !self.trie.has_children(node) {
            return;
        }

        self.visited[[pos.row, pos.col]] = true;
        for next in pos.neighbours(self.size) {
            if self.visited[[next.row, next.col]] {
                continue;
            }
            if let Some(child) = self.trie.child(node, self.cells[[next.row, next.col]]) {
                self.visit(child, next);
            }
        }
        self.visited[[pos.row, pos.col]] = false;
    }
}
