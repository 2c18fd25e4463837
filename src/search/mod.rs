//! Depth-limited game tree searches
//!
//! Both searches walk alternating MAX (ai role) and MIN (opponent) frames
//! down to a fixed depth and return the best successor of the root for the
//! ai role. They share one signature so callers can swap them freely.

use anyhow::{anyhow, Error};

use std::fmt;
use std::str::FromStr;

use crate::state::{Score, Side, State};

pub mod alphabeta;

pub mod minimax;

/// Node counters of a single search call
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
}

impl SearchMetrics {
    pub fn total(&self) -> u64 {
        self.nodes_explored + self.nodes_pruned
    }

    /// Share of pruned nodes among all counted nodes, in percent
    pub fn pruning_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.nodes_pruned as f64 / total as f64 * 100.0,
        }
    }

    pub fn merge(&mut self, other: &SearchMetrics) {
        self.nodes_explored += other.nodes_explored;
        self.nodes_pruned += other.nodes_pruned;
    }
}

/// The successor chosen by a search, its value and the work it took
#[derive(Copy, Clone, Debug)]
pub struct SearchOutcome {
    pub best: State,
    pub score: Score,
    pub metrics: SearchMetrics,
}

/// The available search algorithms
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    AlphaBeta,
    Minimax,
}

impl Algorithm {
    /// Searches `state` to `depth` plies for the ai role
    ///
    /// Returns `None` only if the root has no legal move
    pub fn search(self, state: &State, first_mover: Side, depth: usize) -> Option<SearchOutcome> {
        match self {
            Algorithm::AlphaBeta => alphabeta::search(state, first_mover, depth),
            Algorithm::Minimax => minimax::search(state, first_mover, depth),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::AlphaBeta => write!(f, "AlphaBeta"),
            Algorithm::Minimax => write!(f, "Plain Minimax"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alphabeta" | "alpha-beta" | "ab" => Ok(Algorithm::AlphaBeta),
            "minimax" | "plain" | "plain minimax" => Ok(Algorithm::Minimax),
            other => Err(anyhow!("unknown search algorithm '{}'", other)),
        }
    }
}

/// Stops the recursion once past the depth bound or at a finished game
///
/// Past the bound the state is scored without checking for a result.
fn cutoff(state: &State, depth: usize, max_depth: usize) -> Option<Score> {
    if depth > max_depth {
        return Some(state.heuristic_score(None));
    }
    state
        .evaluate_terminal()
        .map(|status| state.heuristic_score(Some(status)))
}

/// Scores every root child with `value` and keeps the first one with the highest score
fn best_child<F>(state: &State, first_mover: Side, mut value: F) -> Option<(State, Score)>
where
    F: FnMut(&State) -> Score,
{
    let mut best: Option<(State, Score)> = None;
    for child in state.generate_children(first_mover) {
        let score = value(&child);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((child, score)),
        }
    }
    best
}
