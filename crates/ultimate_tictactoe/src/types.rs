//! Core domain types for ultimate tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single slot inside a cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here and the cell is still open.
    #[default]
    Empty,
    /// A player placed their mark here.
    Occupied(Player),
    /// Never played, locked by the player who won the enclosing cell.
    Sealed(Player),
}

impl Square {
    /// Returns the mark recorded in this slot, played or sealed.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) | Square::Sealed(player) => Some(player),
        }
    }

    /// Checks if the slot is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Resolution status shared by cells and the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Still undecided.
    #[default]
    Open,
    /// Decided in favour of a player.
    Won(Player),
    /// Decided with no winner.
    Tied,
}

impl Status {
    /// Returns true once the status can no longer change.
    pub fn is_decided(self) -> bool {
        self != Status::Open
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(player),
            Status::Open | Status::Tied => None,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended with no winner.
    Tied,
}

impl GameStatus {
    /// Returns true if the game is over.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl From<Status> for GameStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Open => GameStatus::InProgress,
            Status::Won(player) => GameStatus::Won(player),
            Status::Tied => GameStatus::Tied,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Tied => write!(f, "Tied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_toggles() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_sealed_square_reports_mark() {
        assert_eq!(Square::Sealed(Player::O).mark(), Some(Player::O));
        assert_eq!(Square::Occupied(Player::X).mark(), Some(Player::X));
        assert_eq!(Square::Empty.mark(), None);
    }

    #[test]
    fn test_open_maps_to_in_progress() {
        assert_eq!(GameStatus::from(Status::Open), GameStatus::InProgress);
        assert_eq!(GameStatus::from(Status::Won(Player::O)), GameStatus::Won(Player::O));
        assert_eq!(GameStatus::from(Status::Tied), GameStatus::Tied);
    }
}
