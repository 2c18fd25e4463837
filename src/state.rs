//! Game states as seen by the search
//!
//! A `State` always tracks the stones of the "ai" role, the side the search
//! plays for, whichever side is actually to move. The other side's stones are
//! derived from the occupancy mask.

use anyhow::{anyhow, Result};

use std::hash::{Hash, Hasher};

use crate::{bitboard, moves::*, HEIGHT, WIDTH};

/// Score of a win on the very first possible move, later wins score less
pub const MAX_SCORE: i32 = (WIDTH * HEIGHT / 2 + 1) as i32;

/// Returns the columns ordered from the middle outwards, left before right,
/// as the middle columns are often better moves
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) - (i % 2) * (i / 2 + 1) + (1 - i % 2) * (i / 2);
        i += 1;
    }
    move_order
}

/// One of the two roles in a game
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The side a search maximises for
    Ai,
    Opponent,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Ai => Side::Opponent,
            Side::Opponent => Side::Ai,
        }
    }
}

/// Outcome of a finished game
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    AiWin,
    PlayerWin,
    Draw,
}

impl Status {
    /// Numeric code of the outcome: -1 for an ai win, 1 for a player win, 0 for a draw
    pub fn code(self) -> i32 {
        match self {
            Status::AiWin => -1,
            Status::PlayerWin => 1,
            Status::Draw => 0,
        }
    }
}

/// A search value from the point of view of the ai role
///
/// The infinite variants mark positions the search did not resolve.
/// Variant order gives `MinusInfinity < Finite(_) < PlusInfinity`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    MinusInfinity,
    Finite(i32),
    PlusInfinity,
}

impl Score {
    pub fn is_finite(self) -> bool {
        matches!(self, Score::Finite(_))
    }
}

/// An immutable game position with its ply count
///
/// Equality and hashing only look at the masks and the parity of the ply,
/// so two states reached at different depths of the same parity are treated
/// as the same node.
#[derive(Copy, Clone, Debug)]
pub struct State {
    ai_stones: u64,
    occupied: u64,
    ply: usize,
}

impl State {
    /// The empty board at ply 0
    pub fn new() -> Self {
        Self::from_masks(0, 0, 0)
    }

    pub fn from_masks(ai_stones: u64, occupied: u64, ply: usize) -> Self {
        Self {
            ai_stones,
            occupied,
            ply,
        }
    }

    /// Builds a state from a string of 1-indexed column numbers, played
    /// alternately starting with `first_mover`
    pub fn from_moves<S: AsRef<str>>(moves: S, first_mover: Side) -> Result<Self> {
        let mut state = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let column = column - 1;
                    if !state.playable(column) {
                        return Err(anyhow!("Invalid move, column {} full", column + 1));
                    }
                    if state.evaluate_terminal().is_some() {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    state = state.play(column, first_mover);
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(state)
    }

    pub fn ai_stones(&self) -> u64 {
        self.ai_stones
    }

    pub fn occupied(&self) -> u64 {
        self.occupied
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    /// The stones of the side opposing the ai role
    pub fn player_stones(&self) -> u64 {
        self.ai_stones ^ self.occupied
    }

    /// The side to move at this ply, given which side made the first move
    pub fn side_to_move(&self, first_mover: Side) -> Side {
        if self.ply % 2 == 0 {
            first_mover
        } else {
            first_mover.opponent()
        }
    }

    pub fn is_ai_turn(&self, first_mover: Side) -> bool {
        self.side_to_move(first_mover) == Side::Ai
    }

    /// The same position with the roles swapped, so that a search plays for the other side
    pub fn flipped(&self) -> Self {
        Self::from_masks(self.player_stones(), self.occupied, self.ply)
    }

    pub fn playable(&self, column: usize) -> bool {
        bitboard::playable(self.occupied, column)
    }

    /// The owner of the cell at `column`, `row`, if any
    pub fn cell(&self, column: usize, row: usize) -> Option<Side> {
        let cell = bitboard::cell_mask(column, row);
        if self.ai_stones & cell != 0 {
            Some(Side::Ai)
        } else if self.occupied & cell != 0 {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Plays `column` for whichever side is to move
    pub fn play(&self, column: usize, first_mover: Side) -> Self {
        let (ai_stones, occupied) = if self.is_ai_turn(first_mover) {
            apply_move(self.ai_stones, self.occupied, column)
        } else {
            apply_move_track_mask_only(self.ai_stones, self.occupied, column)
        };
        Self::from_masks(ai_stones, occupied, self.ply + 1)
    }

    /// The column that was played to get from this state to `next`
    pub fn column_to(&self, next: &State) -> Option<usize> {
        column_from_move(self.occupied, next.occupied)
    }

    /// Checks for an ai win, then a player win, then a draw
    ///
    /// Returns `None` while the game is still undetermined
    pub fn evaluate_terminal(&self) -> Option<Status> {
        if bitboard::is_winning(self.ai_stones) {
            Some(Status::AiWin)
        } else if bitboard::is_winning(self.player_stones()) {
            Some(Status::PlayerWin)
        } else if bitboard::is_draw(self.occupied) {
            Some(Status::Draw)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.evaluate_terminal().is_some()
    }

    /// Scores this state given its terminal status
    ///
    /// Earlier wins score further from 0. An undetermined state scores
    /// `PlusInfinity` on even plies and `MinusInfinity` on odd plies.
    pub fn heuristic_score(&self, status: Option<Status>) -> Score {
        let win = MAX_SCORE - (self.ply / 2) as i32;
        match status {
            Some(Status::AiWin) => Score::Finite(win),
            Some(Status::PlayerWin) => Score::Finite(-win),
            Some(Status::Draw) => Score::Finite(0),
            None if self.ply % 2 == 0 => Score::PlusInfinity,
            None => Score::MinusInfinity,
        }
    }

    /// Lazily generates the successor states, middle columns first
    pub fn generate_children(&self, first_mover: Side) -> Children {
        Children {
            state: *self,
            first_mover,
            index: 0,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.ai_stones == other.ai_stones
            && self.occupied == other.occupied
            && self.ply % 2 == other.ply % 2
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ai_stones.hash(state);
        self.occupied.hash(state);
        (self.ply % 2).hash(state);
    }
}

/// Iterator over the successors of a `State`, see [`State::generate_children`]
pub struct Children {
    state: State,
    first_mover: Side,
    index: usize,
}

impl Iterator for Children {
    type Item = State;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < WIDTH {
            let column = move_order()[self.index];
            self.index += 1;
            if self.state.playable(column) {
                return Some(self.state.play(column, self.first_mover));
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitboard::cell_mask;
    use std::collections::HashSet;

    #[test]
    fn center_out_order() {
        assert_eq!(move_order(), [3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    fn children_of_empty_board() {
        let root = State::new();
        let children: Vec<State> = root.generate_children(Side::Ai).collect();
        assert_eq!(children.len(), WIDTH);
        assert_eq!(root.column_to(&children[0]), Some(3));
        for child in children.iter() {
            assert_eq!(child.ply(), 1);
            // the ai moved, so the new stone is tracked
            assert_eq!(child.ai_stones(), child.occupied());
        }

        let children: Vec<State> = root.generate_children(Side::Opponent).collect();
        assert!(children.iter().all(|c| c.ai_stones() == 0 && c.occupied() != 0));
    }

    #[test]
    fn full_columns_are_skipped() -> Result<()> {
        let state = State::from_moves("444444", Side::Ai)?;
        assert!(!state.playable(3));
        let columns: Vec<usize> = state
            .generate_children(Side::Ai)
            .map(|child| state.column_to(&child).unwrap())
            .collect();
        assert_eq!(columns, vec![2, 4, 1, 5, 0, 6]);
        Ok(())
    }

    #[test]
    fn stone_sets_are_disjoint() -> Result<()> {
        let state = State::from_moves("4453612723", Side::Opponent)?;
        assert_eq!(state.ai_stones() & state.player_stones(), 0);
        assert_eq!(state.ai_stones() | state.player_stones(), state.occupied());
        assert_eq!(state.ai_stones().count_ones(), 5);
        assert_eq!(state.cell(3, 0), Some(Side::Opponent));
        assert_eq!(state.cell(3, 1), Some(Side::Ai));
        assert_eq!(state.cell(3, 2), None);
        Ok(())
    }

    #[test]
    fn terminal_statuses() -> Result<()> {
        let ai_win = State::from_moves("1212121", Side::Ai)?;
        assert_eq!(ai_win.evaluate_terminal(), Some(Status::AiWin));
        assert_eq!(ai_win.heuristic_score(ai_win.evaluate_terminal()), Score::Finite(19));

        let player_win = State::from_moves("1212121", Side::Opponent)?;
        assert_eq!(player_win.evaluate_terminal(), Some(Status::PlayerWin));
        assert_eq!(
            player_win.heuristic_score(player_win.evaluate_terminal()),
            Score::Finite(-19)
        );

        let open = State::from_moves("1212", Side::Ai)?;
        assert_eq!(open.evaluate_terminal(), None);
        assert_eq!(open.heuristic_score(None), Score::PlusInfinity);
        assert_eq!(open.play(3, Side::Ai).heuristic_score(None), Score::MinusInfinity);

        // pairs of rows alternate owners, columns alternate owners
        let mut ai_stones = 0;
        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                if (column + row / 2) % 2 == 0 {
                    ai_stones |= cell_mask(column, row);
                }
            }
        }
        let full = State::from_masks(ai_stones, crate::bitboard::FULL_BOARD_MASK, WIDTH * HEIGHT);
        assert_eq!(full.evaluate_terminal(), Some(Status::Draw));
        assert_eq!(full.heuristic_score(Some(Status::Draw)), Score::Finite(0));
        assert_eq!(full.generate_children(Side::Ai).count(), 0);
        Ok(())
    }

    #[test]
    fn invalid_move_strings() {
        assert!(State::from_moves("8", Side::Ai).is_err());
        assert!(State::from_moves("1a", Side::Ai).is_err());
        assert!(State::from_moves("1111111", Side::Ai).is_err());
        // the game ended on the seventh move
        assert!(State::from_moves("12121213", Side::Ai).is_err());
    }

    #[test]
    fn identity_uses_ply_parity() {
        let a = State::from_masks(cell_mask(3, 0), cell_mask(3, 0) | cell_mask(2, 0), 2);
        let b = State::from_masks(a.ai_stones(), a.occupied(), 4);
        let c = State::from_masks(a.ai_stones(), a.occupied(), 3);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn flipping_swaps_roles() -> Result<()> {
        let state = State::from_moves("4433", Side::Ai)?;
        let flipped = state.flipped();
        assert_eq!(flipped.ai_stones(), state.player_stones());
        assert_eq!(flipped.player_stones(), state.ai_stones());
        assert!(state.is_ai_turn(Side::Ai));
        assert!(!flipped.is_ai_turn(Side::Opponent));
        Ok(())
    }
}
