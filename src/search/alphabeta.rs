//! Depth-limited minimax with alpha-beta pruning
//!
//! Every search call owns a [`TranspositionTable`] of the states it has
//! already expanded. A child found in the table is skipped, whatever window
//! it was first searched with.

use log::debug;

use super::{best_child, cutoff, SearchMetrics, SearchOutcome};
use crate::state::{Score, Side, State};
use crate::transposition_table::TranspositionTable;

struct AlphaBeta {
    first_mover: Side,
    max_depth: usize,
    metrics: SearchMetrics,
    visited: TranspositionTable,
}

impl AlphaBeta {
    fn max_value(&mut self, state: &State, mut alpha: Score, beta: Score, depth: usize) -> Score {
        self.metrics.nodes_explored += 1;
        if let Some(score) = cutoff(state, depth, self.max_depth) {
            return score;
        }

        let mut v = Score::MinusInfinity;
        for child in state.generate_children(self.first_mover) {
            if self.visited.contains(&child) {
                continue;
            }
            v = v.max(self.min_value(&child, alpha, beta, depth + 1));
            self.visited.set(child, alpha);
            // the opponent will never let the game reach this node
            if v >= beta {
                self.metrics.nodes_pruned += 1;
                return v;
            }
            alpha = alpha.max(v);
        }
        // nothing resolved below this node, or every child was already visited
        if v == Score::MinusInfinity {
            return Score::PlusInfinity;
        }
        v
    }

    fn min_value(&mut self, state: &State, alpha: Score, mut beta: Score, depth: usize) -> Score {
        self.metrics.nodes_explored += 1;
        if let Some(score) = cutoff(state, depth, self.max_depth) {
            return score;
        }

        let mut v = Score::PlusInfinity;
        for child in state.generate_children(self.first_mover) {
            if self.visited.contains(&child) {
                continue;
            }
            v = v.min(self.max_value(&child, alpha, beta, depth + 1));
            self.visited.set(child, alpha);
            if v <= alpha {
                self.metrics.nodes_pruned += 1;
                return v;
            }
            beta = beta.min(v);
        }
        if v == Score::PlusInfinity {
            return Score::MinusInfinity;
        }
        v
    }
}

/// Searches `state` to `depth` plies with alpha-beta pruning
///
/// Each root child is searched with a full window
pub fn search(state: &State, first_mover: Side, depth: usize) -> Option<SearchOutcome> {
    let mut alphabeta = AlphaBeta {
        first_mover,
        max_depth: depth,
        metrics: SearchMetrics::default(),
        visited: TranspositionTable::new(),
    };

    let (best, score) = best_child(state, first_mover, |child| {
        alphabeta.min_value(child, Score::MinusInfinity, Score::PlusInfinity, 1)
    })?;
    debug!(
        "alpha-beta depth {}: score {:?}, {} nodes explored, {} pruned, {} states visited",
        depth,
        score,
        alphabeta.metrics.nodes_explored,
        alphabeta.metrics.nodes_pruned,
        alphabeta.visited.len()
    );
    Some(SearchOutcome {
        best,
        score,
        metrics: alphabeta.metrics,
    })
}
