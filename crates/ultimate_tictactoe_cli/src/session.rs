//! The `play` and `auto` loops.

use crate::config::{DemoConfig, PlayerKind};
use crate::players::{Command, Player, RandomPlayer};
use crate::render;
use anyhow::Result;
use derive_more::Display;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, instrument, warn};
use ultimate_tictactoe::{GameController, GameStatus, MoveError, Player as Side, Position};

/// Interactive game on a line-oriented terminal.
///
/// Each side is either the human or its own seeded random player. While
/// the game runs, the side to move is asked for a command; once it is over
/// the human (if any) decides between `reset` and `quit`.
pub struct PlaySession<'a, W> {
    game: GameController,
    x: PlayerKind,
    o: PlayerKind,
    human: &'a mut dyn Player,
    bots: [RandomPlayer; 2],
    stepper: RandomPlayer,
    out: W,
    show_board: bool,
}

impl<'a, W: Write> PlaySession<'a, W> {
    /// Creates a session; every random choice derives from `seed`.
    pub fn new(config: &DemoConfig, seed: u64, human: &'a mut dyn Player, out: W) -> Self {
        Self {
            game: GameController::new(),
            x: *config.x(),
            o: *config.o(),
            human,
            bots: [
                RandomPlayer::new("random X", seed),
                RandomPlayer::new("random O", seed.wrapping_add(1)),
            ],
            stepper: RandomPlayer::new("step", seed.wrapping_add(2)),
            out,
            show_board: *config.show_board(),
        }
    }

    /// Runs until `quit`, end of input, or a finished game with no human seated.
    #[instrument(skip(self), fields(x = %self.x, o = %self.o))]
    pub fn run(mut self) -> Result<GameController> {
        writeln!(self.out, "{}", render::WELCOME)?;
        self.draw()?;

        loop {
            let command = match self.seat() {
                Some(PlayerKind::Human) => ask(self.human, &self.game)?,
                Some(PlayerKind::Random) => {
                    let index = bot_index(self.game.current_player());
                    ask(&mut self.bots[index], &self.game)?
                }
                None => break,
            };

            if command == Command::Quit {
                break;
            }
            self.execute(command)?;
        }

        info!(status = %self.game.status(), moves = self.game.history().len(), "Session ended");
        Ok(self.game)
    }

    /// Who decides the next command, or `None` when nobody should.
    fn seat(&self) -> Option<PlayerKind> {
        if self.game.status().is_over() {
            let seated = self.x == PlayerKind::Human || self.o == PlayerKind::Human;
            return seated.then_some(PlayerKind::Human);
        }
        Some(match self.game.current_player() {
            Side::X => self.x,
            Side::O => self.o,
        })
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Move(position) => self.play(position)?,
            Command::Step => match self.stepper.step(&mut self.game)? {
                Some(position) => {
                    writeln!(self.out, "Random move at {}.", position)?;
                    self.draw()?;
                }
                None => writeln!(self.out, "The game is over. Type `reset` to play again.")?,
            },
            Command::Moves => {
                let moves = self.game.legal_moves();
                let listed = moves
                    .iter()
                    .map(Position::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(self.out, "{} legal moves: {}", moves.len(), listed)?;
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.game.snapshot())?;
                writeln!(self.out, "{}", json)?;
            }
            Command::Help => writeln!(self.out, "{}", render::HELP)?,
            Command::Reset => {
                self.game.reset();
                writeln!(self.out, "{}", render::WELCOME)?;
                self.draw()?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn play(&mut self, position: Position) -> Result<()> {
        match self.game.apply_move(position) {
            Ok(_) => self.draw(),
            Err(e @ MoveError::InvariantViolation(_)) => Err(e.into()),
            Err(e) => {
                warn!(%position, error = %e, "Move rejected");
                writeln!(self.out, "{}", e)?;
                Ok(())
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let snapshot = self.game.snapshot();
        if self.show_board {
            write!(self.out, "{}", render::board(&snapshot))?;
        }
        writeln!(self.out, "{}", render::status_line(&snapshot))?;
        Ok(())
    }
}

fn ask(player: &mut dyn Player, game: &GameController) -> Result<Command> {
    let command = player.next_command(game)?;
    debug!(player = player.name(), ?command, "Command");
    Ok(command)
}

fn bot_index(side: Side) -> usize {
    match side {
        Side::X => 0,
        Side::O => 1,
    }
}

/// Results of a batch of random games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display)]
#[display("{games} games: X won {x_wins}, O won {o_wins}, {ties} tied ({moves} moves)")]
pub struct Tally {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Tied games.
    pub ties: u32,
    /// Moves played across all games.
    pub moves: usize,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, status: GameStatus, moves: usize) {
        self.games += 1;
        self.moves += moves;
        match status {
            GameStatus::Won(Side::X) => self.x_wins += 1,
            GameStatus::Won(Side::O) => self.o_wins += 1,
            GameStatus::Tied => self.ties += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Plays `config.games()` random games, reusing one controller through `reset`.
///
/// With `json`, each final position is written as one line of JSON;
/// otherwise the final board is drawn unless board output is off.
#[instrument(skip(config, out))]
pub fn run_auto(config: &DemoConfig, seed: u64, json: bool, mut out: impl Write) -> Result<Tally> {
    let mut player = RandomPlayer::new("auto", seed);
    let mut game = GameController::new();
    let mut tally = Tally::default();

    for number in 1..=*config.games() {
        game.reset();
        let status = player.play_out(&mut game)?;
        let moves = game.history().len();
        info!(game = number, %status, moves, "Game finished");
        tally.record(status, moves);

        let snapshot = game.snapshot();
        if json {
            writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
        } else if *config.show_board() {
            writeln!(out, "Game {}:", number)?;
            write!(out, "{}", render::board(&snapshot))?;
            writeln!(out, "{}", render::status_line(&snapshot))?;
        }
    }

    if !json {
        writeln!(out, "{}", tally)?;
    }
    Ok(tally)
}
