//! A depth-limited game tree search agent for the board game 'Connect 4'
//!
//! Positions are stored as a pair of bitboards and searched with either a
//! plain minimax walk or minimax with alpha-beta pruning. Both searches pick
//! the best successor of a position for the side that the search plays as
//! (the "ai" role) and report how many nodes were visited on the way.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{search::Algorithm, state::{Side, State}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the ai has three stones stacked in the first column
//! let state = State::from_moves("171617", Side::Ai)?;
//! let outcome = Algorithm::AlphaBeta.search(&state, Side::Ai, 3).unwrap();
//!
//! assert_eq!(state.column_to(&outcome.best), Some(0));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod bitboard;

pub mod moves;

pub mod state;

pub mod transposition_table;

pub mod search;

pub mod match_runner;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that the given dimensions (plus a sentinel row) fit in a u64 for the bitboard representation
const_assert!(WIDTH * (HEIGHT + 1) < 64);
