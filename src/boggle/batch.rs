use std::sync::Arc;

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::dictionary::WordPolicy;
use super::error::Result;
use super::scoring::Scorer;
use super::solver::{Solution, Solver};
use super::trie::Trie;

/// Result of solving one board, with the words restored and sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardReport {
    pub board: String,
    pub solution: Solution,
    pub words: Vec<String>,
}

impl BoardReport {
    /// Solves `board` and captures the word list of that solve, spelled as
    /// in the dictionary
    pub fn solve(solver: &mut Solver, board: &Board, policy: &WordPolicy) -> Result<Self> {
        let solution = solver.solve(board)?;
        let mut words = solver
            .found_words()
            .iter()
            .map(|w| policy.restore(w))
            .collect::<Vec<_>>();
        words.sort_unstable();
        Ok(Self {
            board: board.letters(),
            solution,
            words,
        })
    }
}

/// Solves every board in parallel. Each rayon worker gets its own solver over
/// the shared trie, so no solver state is ever shared between threads.
pub fn solve_batch(
    trie: &Arc<Trie>,
    boards: &[Board],
    scorer: &Scorer,
    policy: &WordPolicy,
) -> Result<Vec<BoardReport>> {
    boards
        .par_iter()
        .map_init(
            || Solver::with_trie(trie.clone()).with_scorer(scorer.clone()),
            |solver, board| BoardReport::solve(solver, board, policy),
        )
        .collect()
}

/// Aggregate numbers over a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub boards: usize,
    pub total_words: usize,
    pub total_score: u64,
    pub mean_words: f64,
    pub max_words: usize,
    /// Index of the board with the most words
    pub best_board: usize,
}

impl BatchSummary {
    /// Returns `None` for an empty batch
    pub fn from_reports(reports: &[BoardReport]) -> Option<Self> {
        let counts: Array1<f64> = reports
            .iter()
            .map(|r| r.solution.word_count as f64)
            .collect();
        let best_board = counts.argmax().ok()?;
        let mean_words = counts.mean()?;

        Some(Self {
            boards: reports.len(),
            total_words: reports.iter().map(|r| r.solution.word_count).sum(),
            total_score: reports.iter().map(|r| r.solution.score as u64).sum(),
            mean_words,
            max_words: reports[best_board].solution.word_count,
            best_board,
        })
    }
}
