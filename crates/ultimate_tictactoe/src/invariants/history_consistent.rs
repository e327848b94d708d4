//! History consistency invariant: the board shows exactly the recorded moves.

use super::Invariant;
use crate::{GameController, Position, Square};

/// Invariant: every recorded move is on the board as an occupied square
/// of its player, and nothing else is occupied.
///
/// Sealed squares are not moves and are not counted.
pub struct HistoryConsistentInvariant;

impl Invariant<GameController> for HistoryConsistentInvariant {
    fn holds(game: &GameController) -> bool {
        let recorded = game
            .history()
            .iter()
            .all(|mv| game.mark_at(mv.position) == Square::Occupied(mv.player));

        let occupied = Position::all()
            .filter(|position| matches!(game.mark_at(*position), Square::Occupied(_)))
            .count();

        recorded && occupied == game.history().len()
    }

    fn description() -> &'static str {
        "Move history matches the occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_moves() {
        let mut game = GameController::new();
        game.apply_at(2, 2).unwrap();
        game.apply_at(8, 8).unwrap();

        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_reset() {
        let mut game = GameController::new();
        game.apply_at(2, 2).unwrap();
        game.reset();

        assert!(HistoryConsistentInvariant::holds(&game));
    }
}
