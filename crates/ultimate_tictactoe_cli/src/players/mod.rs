//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use anyhow::Result;
use std::str::FromStr;
use ultimate_tictactoe::{GameController, MoveError, Position};

/// What a player asks the session to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play at a position.
    Move(Position),
    /// Play a random legal move for the side to move.
    Step,
    /// List the legal moves.
    Moves,
    /// Print the game as JSON.
    Json,
    /// Print the command list.
    Help,
    /// Start a new game.
    Reset,
    /// End the session.
    Quit,
}

impl FromStr for Command {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "step" | "s" | "" => Ok(Command::Step),
            "moves" | "m" => Ok(Command::Moves),
            "json" => Ok(Command::Json),
            "help" | "h" | "?" => Ok(Command::Help),
            "reset" | "home" | "r" => Ok(Command::Reset),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => other.parse().map(Command::Move),
        }
    }
}

/// Trait for players that drive the game.
pub trait Player {
    /// Gets the next command from this player.
    fn next_command(&mut self, game: &GameController) -> Result<Command>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("step".parse::<Command>(), Ok(Command::Step));
        assert_eq!("".parse::<Command>(), Ok(Command::Step));
        assert_eq!(" RESET ".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("home".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!(
            "3,4".parse::<Command>(),
            Ok(Command::Move(Position::new(3, 4).unwrap()))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "jump".parse::<Command>(),
            Err(MoveError::Malformed(_))
        ));
        assert!(matches!(
            "10,1".parse::<Command>(),
            Err(MoveError::InvalidPosition { row: 10, col: 1 })
        ));
    }
}
