//! Plain depth-limited minimax, every legal child is expanded

use log::debug;

use super::{best_child, cutoff, SearchMetrics, SearchOutcome};
use crate::state::{Score, Side, State};

struct Minimax {
    first_mover: Side,
    max_depth: usize,
    metrics: SearchMetrics,
}

impl Minimax {
    fn max_value(&mut self, state: &State, depth: usize) -> Score {
        self.metrics.nodes_explored += 1;
        if let Some(score) = cutoff(state, depth, self.max_depth) {
            return score;
        }

        let mut v = Score::MinusInfinity;
        for child in state.generate_children(self.first_mover) {
            v = v.max(self.min_value(&child, depth + 1));
        }
        // nothing resolved below this node
        if v == Score::MinusInfinity {
            return Score::PlusInfinity;
        }
        v
    }

    fn min_value(&mut self, state: &State, depth: usize) -> Score {
        self.metrics.nodes_explored += 1;
        if let Some(score) = cutoff(state, depth, self.max_depth) {
            return score;
        }

        let mut v = Score::PlusInfinity;
        for child in state.generate_children(self.first_mover) {
            v = v.min(self.max_value(&child, depth + 1));
        }
        if v == Score::PlusInfinity {
            return Score::MinusInfinity;
        }
        v
    }
}

/// Searches `state` to `depth` plies without pruning
///
/// `nodes_pruned` of the returned metrics is always 0
pub fn search(state: &State, first_mover: Side, depth: usize) -> Option<SearchOutcome> {
    let mut minimax = Minimax {
        first_mover,
        max_depth: depth,
        metrics: SearchMetrics::default(),
    };

    let (best, score) = best_child(state, first_mover, |child| minimax.min_value(child, 1))?;
    debug!(
        "minimax depth {}: score {:?}, {} nodes explored",
        depth, score, minimax.metrics.nodes_explored
    );
    Some(SearchOutcome {
        best,
        score,
        metrics: minimax.metrics,
    })
}
