//! `uttt`: ultimate tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;
mod config;
mod players;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, CommonArgs};
use config::DemoConfig;
use players::HumanPlayer;
use session::{PlaySession, run_auto};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stdout carries the board and JSON; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = DemoConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { x, o, common } => run_play(config.with_players(x, o), common),
        Command::Auto {
            games,
            json,
            common,
        } => run_batch(config.with_games(games), json, common),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: DemoConfig, common: CommonArgs) -> Result<()> {
    let config = config.with_seed(common.seed).with_quiet(common.quiet);
    let seed = config.seed_or_random();
    info!(seed, x = %config.x(), o = %config.o(), "Starting game");

    let stdin = io::stdin();
    let mut human = HumanPlayer::new("you", stdin.lock(), io::stdout());
    let game = PlaySession::new(&config, seed, &mut human, io::stdout()).run()?;

    info!(status = %game.status(), "Goodbye");
    Ok(())
}

/// Run random games and print the tally
#[instrument(skip_all)]
fn run_batch(config: DemoConfig, json: bool, common: CommonArgs) -> Result<()> {
    let config = config.with_seed(common.seed).with_quiet(common.quiet);
    let seed = config.seed_or_random();
    info!(seed, games = *config.games(), "Starting auto-play");

    let tally = run_auto(&config, seed, json, io::stdout().lock())?;
    info!(%tally, "Auto-play finished");
    Ok(())
}
