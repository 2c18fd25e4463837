use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use std::fmt::Display;
use std::io::{stdin, stdout, Stdin, Write};
use std::str::FromStr;

use connect4_minimax::match_runner::*;
use connect4_minimax::search::Algorithm;
use connect4_minimax::state::{Side, State, Status};

mod display;

/// Asks `question` until the answer parses, an empty answer keeps `default`
fn prompt<T>(stdin: &Stdin, question: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    loop {
        print!("{} [{}]: ", question, default);
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;
        let answer = buffer.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(err) => println!("Unknown answer given: {}", err),
        }
    }
}

fn yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn print_metrics_comparison() {
    let players = [
        Player::new(Algorithm::AlphaBeta, 7),
        Player::new(Algorithm::Minimax, 5),
        Player::new(Algorithm::Minimax, 6),
    ];
    println!("Search metrics on the empty board:");
    for report in compare_metrics(&State::new(), Side::Ai, &players) {
        println!(
            "{} (depth {}): {} nodes explored, {} pruned ({:.1}%), best column {}, {:.4}s",
            report.player.algorithm,
            report.player.depth,
            report.metrics.nodes_explored,
            report.metrics.nodes_pruned,
            report.metrics.pruning_ratio(),
            report.column.map_or("-".to_string(), |c| (c + 1).to_string()),
            report.elapsed.as_secs_f64()
        );
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    let stdin = stdin();

    println!("Welcome to Connect 4 search benchmarking\n");

    if yes_no(&stdin, "Compare search metrics on the empty board first?")? {
        print_metrics_comparison();
    }

    let defaults = MatchConfig::default();
    let config = MatchConfig {
        ai: Player::new(
            prompt(&stdin, "Player 1 search", defaults.ai.algorithm)?,
            prompt(&stdin, "Player 1 depth", defaults.ai.depth)?,
        ),
        opponent: Player::new(
            prompt(&stdin, "Player 2 search", defaults.opponent.algorithm)?,
            prompt(&stdin, "Player 2 depth", defaults.opponent.depth)?,
        ),
        games: prompt(&stdin, "Number of games", defaults.games)?,
        ..defaults
    };

    println!(
        "Running {} headless games: {} (depth={}) vs {} (depth={})",
        config.games,
        config.ai.algorithm,
        config.ai.depth,
        config.opponent.algorithm,
        config.opponent.depth
    );

    let progress = ProgressBar::new(config.games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );
    let summary = play_match(&config, |_| progress.inc(1));
    progress.finish();

    for (i, game) in summary.games.iter().enumerate() {
        let first = match game.first_mover {
            Side::Ai => "player 1",
            Side::Opponent => "player 2",
        };
        let result = match game.result {
            Status::AiWin => format!("{} won", config.ai.algorithm),
            Status::PlayerWin => format!("{} won", config.opponent.algorithm),
            Status::Draw => "Draw".to_string(),
        };
        println!(
            "Game {}: {} in {} moves ({} moved first): {}",
            i + 1,
            result,
            game.moves.len(),
            first,
            game.move_string()
        );
    }

    let ai_metrics = summary.ai_metrics();
    let opponent_metrics = summary.opponent_metrics();
    println!("\nSummary:");
    println!("Player 1 wins: {}", summary.ai_wins());
    println!("Player 2 wins: {}", summary.opponent_wins());
    println!("Draws: {}", summary.draws());
    println!("Avg moves per game: {:.2}", summary.average_moves());
    println!(
        "Avg time per move: {:.4}s",
        summary.average_time_per_move().as_secs_f64()
    );
    println!(
        "Player 1 nodes: {} explored, {} pruned",
        ai_metrics.nodes_explored, ai_metrics.nodes_pruned
    );
    println!(
        "Player 2 nodes: {} explored, {} pruned",
        opponent_metrics.nodes_explored, opponent_metrics.nodes_pruned
    );

    if let Some(last) = summary.games.last() {
        println!("\nFinal position of game {}:", summary.games.len());
        let state = State::from_moves(last.move_string(), last.first_mover)?;
        display::draw(&state, last.first_mover).expect("Failed to draw board!");
    }
    Ok(())
}
