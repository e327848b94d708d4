//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameController, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the game is running,
/// the player to move is the one after the last entry.
pub struct AlternatingTurnInvariant;

impl Invariant<GameController> for AlternatingTurnInvariant {
    fn holds(game: &GameController) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        if game.status().is_over() {
            // Frozen at the last mover.
            return history.last().is_some_and(|mv| mv.player == game.current_player());
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
