//! Command-line interface for strictly_nrow.

use clap::{Parser, Subcommand};
use strictly_nrow::Move;

/// Strictly N-in-a-row - play and inspect N-in-a-row matches
#[derive(Parser, Debug)]
#[command(name = "strictly_nrow")]
#[command(about = "N-in-a-row with rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a sequence of moves and print the resulting position
    Play {
        /// Number of rows (min 3). Overrides the config file.
        #[arg(long)]
        rows: Option<usize>,

        /// Number of columns (min 3). Overrides the config file.
        #[arg(long)]
        cols: Option<usize>,

        /// TOML file with `rows` and `cols`
        #[arg(long)]
        config: Option<std::path::PathBuf>,

        /// Ply to display after playing the moves (defaults to the newest)
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the position as JSON
        #[arg(long)]
        json: bool,

        /// Moves as `row,col`, X first
        moves: Vec<Move>,
    },

    /// Show the run length a board size needs to win
    Rules {
        /// Number of rows
        #[arg(long, default_value = "3")]
        rows: usize,

        /// Number of columns
        #[arg(long, default_value = "3")]
        cols: usize,
    },
}
