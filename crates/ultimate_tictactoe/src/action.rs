//! First-class action types for ultimate tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who placed a
//! mark where, and can be replayed to rebuild a game.

use super::{Player, Position, Slot};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The game has already been won or tied.
    GameOver,

    /// The position is not among the legal moves.
    ///
    /// `directed_to` names the cell play was sent to, or `None` on free choice.
    NotInLegalSet {
        /// The cell the move was required to land in.
        directed_to: Option<Slot>,
    },

    /// The enclosing cell is already won or tied.
    CellDecided,

    /// The slot already holds a mark.
    SlotTaken,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::GameOver => write!(f, "the game is already over"),
            Rejection::NotInLegalSet {
                directed_to: Some(slot),
            } => write!(
                f,
                "play must continue in the {} cell",
                slot.label().to_lowercase()
            ),
            Rejection::NotInLegalSet { directed_to: None } => {
                write!(f, "the position is not open")
            }
            Rejection::CellDecided => write!(f, "the cell is already decided"),
            Rejection::SlotTaken => write!(f, "the slot is already taken"),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move is well-formed but not allowed in the current state.
    #[display("Illegal move at {}: {}", position, reason)]
    IllegalMove {
        /// Where the move was attempted.
        position: Position,
        /// Why it was refused.
        reason: Rejection,
    },

    /// Coordinates fall outside the 9x9 board.
    #[display("Position ({}, {}) is outside the 9x9 board", row, col)]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Text that does not describe a position.
    #[display("Cannot read a position from {:?} (expected \"row,col\")", _0)]
    Malformed(String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Builds an illegal-move error.
    pub fn illegal(position: Position, reason: Rejection) -> Self {
        MoveError::IllegalMove { position, reason }
    }

    /// Returns the rejection reason for illegal moves.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveError::IllegalMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
