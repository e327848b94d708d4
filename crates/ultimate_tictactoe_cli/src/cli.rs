//! Command-line interface for the `uttt` binary.

use crate::config::PlayerKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "uttt")]
#[command(about = "Ultimate tic-tac-toe: play by hand or watch random games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Who plays X
        #[arg(short = 'x', long = "x-player", value_enum)]
        x: Option<PlayerKind>,

        /// Who plays O
        #[arg(short = 'o', long = "o-player", value_enum)]
        o: Option<PlayerKind>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Run random-vs-random games and report the results
    Auto {
        /// Number of games to play
        #[arg(short = 'n', long)]
        games: Option<u32>,

        /// Print each final position as a JSON snapshot
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Options shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// Seed for random moves (drawn at random when absent)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print the board
    #[arg(long)]
    pub quiet: bool,
}
