//! Serializable read-only view of a game for renderers.

use crate::action::Move;
use crate::game::GameController;
use crate::position::{BOARD_SIDE, Grid, Position, Slot};
use crate::types::{GameStatus, Player, Square, Status};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw one frame.
///
/// Produced by [`GameController::snapshot`]; holds copies, so it stays valid
/// after the game moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Game status.
    pub status: GameStatus,
    /// Player to move (or the last mover once the game is over).
    pub current_player: Player,
    /// Most recent accepted position.
    pub last_move: Option<Position>,
    /// Cell the next move is confined to, `None` on free choice.
    pub directed_cell: Option<Slot>,
    /// Every square in global coordinates, `squares[row][col]`.
    pub squares: [[Square; BOARD_SIDE]; BOARD_SIDE],
    /// Status of each cell, indexed by macro row and column.
    pub cells: Grid<Status>,
    /// Legal targets for the next move.
    pub legal_moves: Vec<Position>,
    /// Accepted moves in order.
    pub history: Vec<Move>,
}

impl GameSnapshot {
    pub(crate) fn capture(game: &GameController) -> Self {
        let mut squares = [[Square::Empty; BOARD_SIDE]; BOARD_SIDE];
        for position in Position::all() {
            squares[position.row()][position.col()] = game.mark_at(position);
        }

        Self {
            status: game.status(),
            current_player: game.current_player(),
            last_move: game.last_move(),
            directed_cell: game.directed_cell(),
            squares,
            cells: game.board().cell_statuses(),
            legal_moves: game.legal_moves(),
            history: game.history().to_vec(),
        }
    }

    /// The square at `position`.
    pub fn square(&self, position: Position) -> Square {
        self.squares[position.row()][position.col()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_new_game() {
        let snapshot = GameController::new().snapshot();
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert!(snapshot.squares.iter().flatten().all(|square| square.is_empty()));
        assert_eq!(snapshot.legal_moves.len(), 81);
        assert_eq!(snapshot.directed_cell, None);
    }

    #[test]
    fn test_snapshot_reflects_moves() {
        let mut game = GameController::new();
        game.apply_at(4, 5).unwrap();
        let snapshot = game.snapshot();

        let position = Position::new(4, 5).unwrap();
        assert_eq!(snapshot.square(position), Square::Occupied(Player::X));
        assert_eq!(snapshot.last_move, Some(position));
        assert_eq!(snapshot.directed_cell, Some(Slot::MiddleRight));
        assert_eq!(snapshot.history.len(), 1);
    }

    #[test]
    fn test_snapshot_copies_every_square() {
        let mut game = GameController::new();
        for (row, col) in [(0, 1), (0, 3), (0, 2), (0, 6), (0, 0), (3, 3), (8, 8)] {
            game.apply_at(row, col).unwrap();
        }
        let snapshot = game.snapshot();

        for position in Position::all() {
            assert_eq!(snapshot.square(position), game.mark_at(position), "{}", position);
        }
    }
}
