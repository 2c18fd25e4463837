use std::collections::HashMap;

use crate::state::{Score, State};

/// Set of states already expanded during one alpha-beta search
///
/// Each entry keeps the alpha bound that was current when the state was
/// visited. The stored bound is not consulted when probing, membership alone
/// stops a state from being expanded twice.
#[derive(Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<State, Score>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
    pub fn set(&mut self, state: State, alpha: Score) {
        self.entries.insert(state, alpha);
    }
    pub fn get(&self, state: &State) -> Option<Score> {
        self.entries.get(state).copied()
    }
    pub fn contains(&self, state: &State) -> bool {
        self.entries.contains_key(state)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
