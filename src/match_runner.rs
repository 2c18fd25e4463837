//! Headless games between two search configurations
//!
//! The "ai" side of a game is always the side a `State` tracks. When the
//! opponent is to move, its search is run on the flipped state so that it
//! also plays as the ai role, and the chosen column is replayed on the real
//! state.

use log::info;
use rayon::prelude::*;

use std::time::{Duration, Instant};

use crate::search::{Algorithm, SearchMetrics};
use crate::state::{Side, State, Status};

/// A search algorithm together with its depth bound
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub algorithm: Algorithm,
    pub depth: usize,
}

impl Player {
    pub fn new(algorithm: Algorithm, depth: usize) -> Self {
        Self { algorithm, depth }
    }
}

/// Settings for a series of headless games
#[derive(Copy, Clone, Debug)]
pub struct MatchConfig {
    pub ai: Player,
    pub opponent: Player,
    pub games: usize,
    /// Games running longer than this many moves are scored as draws
    pub max_moves: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ai: Player::new(Algorithm::AlphaBeta, 5),
            opponent: Player::new(Algorithm::Minimax, 5),
            games: 10,
            max_moves: 1000,
        }
    }
}

/// A move picked by a search on behalf of the side to move
#[derive(Copy, Clone, Debug)]
pub struct ChosenMove {
    /// 0-indexed column
    pub column: usize,
    /// The state after the move
    pub state: State,
    pub metrics: SearchMetrics,
}

/// Picks a move for whichever side is to move in `state`
///
/// Returns `None` if the side to move has no legal move
pub fn choose_move(
    state: &State,
    algorithm: Algorithm,
    first_mover: Side,
    depth: usize,
) -> Option<ChosenMove> {
    let (search_state, search_first_mover) = if state.is_ai_turn(first_mover) {
        (*state, first_mover)
    } else {
        // let the opponent's stones play the ai role
        (state.flipped(), first_mover.opponent())
    };

    let outcome = algorithm.search(&search_state, search_first_mover, depth)?;
    let column = search_state.column_to(&outcome.best)?;
    Some(ChosenMove {
        column,
        state: state.play(column, first_mover),
        metrics: outcome.metrics,
    })
}

/// Result of a single headless game
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub first_mover: Side,
    pub result: Status,
    /// 0-indexed columns in the order they were played
    pub moves: Vec<usize>,
    pub ai_time: Duration,
    pub opponent_time: Duration,
    pub ai_metrics: SearchMetrics,
    pub opponent_metrics: SearchMetrics,
}

impl GameRecord {
    /// The moves as a string of 1-indexed columns, as read by [`State::from_moves`]
    pub fn move_string(&self) -> String {
        self.moves.iter().map(|column| (column + 1).to_string()).collect()
    }

    pub fn total_time(&self) -> Duration {
        self.ai_time + self.opponent_time
    }
}

/// Plays one game from the empty board
pub fn play_game(config: &MatchConfig, first_mover: Side) -> GameRecord {
    let mut state = State::new();
    let mut record = GameRecord {
        first_mover,
        result: Status::Draw,
        moves: Vec::new(),
        ai_time: Duration::default(),
        opponent_time: Duration::default(),
        ai_metrics: SearchMetrics::default(),
        opponent_metrics: SearchMetrics::default(),
    };

    loop {
        if let Some(status) = state.evaluate_terminal() {
            record.result = status;
            break;
        }

        let side = state.side_to_move(first_mover);
        let player = match side {
            Side::Ai => config.ai,
            Side::Opponent => config.opponent,
        };

        let start = Instant::now();
        let chosen = choose_move(&state, player.algorithm, first_mover, player.depth);
        let elapsed = start.elapsed();

        let chosen = match chosen {
            Some(chosen) => chosen,
            // no legal move left
            None => break,
        };
        match side {
            Side::Ai => {
                record.ai_time += elapsed;
                record.ai_metrics.merge(&chosen.metrics);
            }
            Side::Opponent => {
                record.opponent_time += elapsed;
                record.opponent_metrics.merge(&chosen.metrics);
            }
        }
        record.moves.push(chosen.column);
        state = chosen.state;

        if record.moves.len() > config.max_moves {
            break;
        }
    }

    info!(
        "game over after {} moves: {:?} ({:?} moved first)",
        record.moves.len(),
        record.result,
        first_mover
    );
    record
}

/// The games of a match, in the order they were scheduled
#[derive(Clone, Debug)]
pub struct MatchSummary {
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    fn count(&self, result: Status) -> usize {
        self.games.iter().filter(|game| game.result == result).count()
    }

    pub fn ai_wins(&self) -> usize {
        self.count(Status::AiWin)
    }

    pub fn opponent_wins(&self) -> usize {
        self.count(Status::PlayerWin)
    }

    pub fn draws(&self) -> usize {
        self.count(Status::Draw)
    }

    pub fn total_moves(&self) -> usize {
        self.games.iter().map(|game| game.moves.len()).sum()
    }

    pub fn average_moves(&self) -> f64 {
        match self.games.len() {
            0 => 0.0,
            games => self.total_moves() as f64 / games as f64,
        }
    }

    /// Mean thinking time per move over both sides
    pub fn average_time_per_move(&self) -> Duration {
        let total: Duration = self.games.iter().map(GameRecord::total_time).sum();
        match self.total_moves() {
            0 => Duration::default(),
            moves => total / moves as u32,
        }
    }

    pub fn ai_metrics(&self) -> SearchMetrics {
        let mut metrics = SearchMetrics::default();
        self.games.iter().for_each(|game| metrics.merge(&game.ai_metrics));
        metrics
    }

    pub fn opponent_metrics(&self) -> SearchMetrics {
        let mut metrics = SearchMetrics::default();
        self.games
            .iter()
            .for_each(|game| metrics.merge(&game.opponent_metrics));
        metrics
    }
}

/// Plays `config.games` games in parallel, alternating which side moves first
///
/// `on_game` is called from the worker threads as each game finishes
pub fn play_match<F>(config: &MatchConfig, on_game: F) -> MatchSummary
where
    F: Fn(&GameRecord) + Sync,
{
    let games = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let first_mover = if i % 2 == 0 { Side::Ai } else { Side::Opponent };
            let record = play_game(config, first_mover);
            on_game(&record);
            record
        })
        .collect();
    MatchSummary { games }
}

/// Node counts and timing of one search run
#[derive(Copy, Clone, Debug)]
pub struct MetricsReport {
    pub player: Player,
    /// The column chosen, if there was a legal move
    pub column: Option<usize>,
    pub metrics: SearchMetrics,
    pub elapsed: Duration,
}

/// Runs every player's search on `state` for the ai role
pub fn compare_metrics(state: &State, first_mover: Side, players: &[Player]) -> Vec<MetricsReport> {
    players
        .iter()
        .map(|&player| {
            let start = Instant::now();
            let outcome = player.algorithm.search(state, first_mover, player.depth);
            let elapsed = start.elapsed();
            MetricsReport {
                player,
                column: outcome.and_then(|outcome| state.column_to(&outcome.best)),
                metrics: outcome.map(|outcome| outcome.metrics).unwrap_or_default(),
                elapsed,
            }
        })
        .collect()
}
