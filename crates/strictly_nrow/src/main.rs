//! Strictly N-in-a-row - terminal front end
//!
//! Replays a list of moves through the game history and prints the position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use strictly_nrow::{
    Board, GameHistory, GameStatus, MatchConfig, Move, Player, PlyEntry, moves_to_win_for,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            rows,
            cols,
            config,
            jump,
            descending,
            json,
            moves,
        } => run_play(rows, cols, config, jump, descending, json, &moves),
        Command::Rules { rows, cols } => run_rules(rows, cols),
    }
}

/// Position printed by `play --json`.
#[derive(Debug, Serialize)]
struct PositionReport<'a> {
    config: &'a MatchConfig,
    cursor: usize,
    status: GameStatus,
    next_mover: Player,
    board: &'a Board,
    win_line: &'a [Move],
    plies: Vec<PlyEntry>,
    rejected: &'a [String],
}

/// Resolves the board size from flags, falling back to the config file and
/// then to 3×3.
#[instrument]
fn resolve_config(
    rows: Option<usize>,
    cols: Option<usize>,
    path: Option<std::path::PathBuf>,
) -> Result<MatchConfig> {
    let base = match path {
        Some(path) => MatchConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => MatchConfig::new(3, 3)?,
    };

    let config = MatchConfig::new(rows.unwrap_or(*base.rows()), cols.unwrap_or(*base.cols()))?;
    Ok(config)
}

/// Play the given moves and print the position
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_play(
    rows: Option<usize>,
    cols: Option<usize>,
    config: Option<std::path::PathBuf>,
    jump: Option<usize>,
    descending: bool,
    json: bool,
    moves: &[Move],
) -> Result<()> {
    let config = resolve_config(rows, cols, config)?;
    let mut history = GameHistory::new(config);
    info!(rows = *config.rows(), cols = *config.cols(), "Match started");

    let mut rejected = Vec::new();
    for mv in moves {
        let outcome = history.apply_move(mv.row, mv.col);
        if let Some(rejection) = outcome.rejection() {
            warn!(%mv, %rejection, "Move skipped");
            rejected.push(format!("{mv}: {rejection}"));
        }
    }

    if let Some(ply) = jump
        && history.jump_to(ply).is_none()
    {
        anyhow::bail!("ply {} does not exist (latest is {})", ply, history.latest_ply());
    }

    let plies: Vec<PlyEntry> = if descending {
        history.list_plies().rev().collect()
    } else {
        history.list_plies().collect()
    };

    if json {
        let report = PositionReport {
            config: history.config(),
            cursor: history.cursor(),
            status: history.status(),
            next_mover: history.next_mover(),
            board: history.current().board(),
            win_line: history.win_result().line(),
            plies,
            rejected: &rejected,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", render_board(&history));
    println!();
    println!("{}", status_line(history.status(), history.next_mover()));
    println!("Moves to win: {}", history.config().moves_to_win());
    for entry in plies {
        let marker = if *entry.ply() == history.cursor() { ">" } else { " " };
        println!("{marker} {entry}");
    }
    for line in &rejected {
        println!("skipped {line}");
    }

    Ok(())
}

/// Show the run length a board size needs to win
#[instrument]
fn run_rules(rows: usize, cols: usize) -> Result<()> {
    let config = MatchConfig::new(rows, cols)?;
    println!(
        "A {}x{} board needs {} in a row",
        config.rows(),
        config.cols(),
        config.moves_to_win()
    );
    debug_assert_eq!(*config.moves_to_win(), moves_to_win_for(rows, cols));
    Ok(())
}

/// Status text shown under the board.
fn status_line(status: GameStatus, next: Player) -> String {
    match status {
        GameStatus::Won(winner) => format!("Winner: {winner}"),
        GameStatus::Draw => "Draw!".to_string(),
        GameStatus::InProgress => format!("Next player: {next}"),
    }
}

/// Board text with the winning run, if any, shown in lowercase.
fn render_board(history: &GameHistory) -> String {
    let win = history.win_result();
    let board = history.current().board();
    if win.line().is_empty() {
        return board.display();
    }

    // Glyphs are right-aligned in columns one wider than the index width.
    let digits = board.rows().max(board.cols()).saturating_sub(1).to_string().len();
    let stride = digits + 1;
    board
        .display()
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let Some(row) = i.checked_sub(1) else {
                return line.to_string();
            };
            line.char_indices()
                .map(|(pos, ch)| {
                    let offset = (pos + 1).saturating_sub(digits);
                    let col = offset / stride;
                    if offset % stride == 0 && col >= 1 && win.contains(Move::new(row, col - 1)) {
                        ch.to_ascii_lowercase()
                    } else {
                        ch
                    }
                })
                .collect()
        })
        .collect::<Vec<String>>()
        .join("\n")
}
