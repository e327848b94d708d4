//! Sealed cells invariant: decided cells are locked, open cells are playable.

use super::Invariant;
use crate::{GameController, Slot};

/// Invariant: a decided cell has no empty slot and an open cell has at
/// least one.
///
/// Together these make "no open slots" and "decided" the same thing, which
/// is what the send-to rule relies on.
pub struct SealedCellsInvariant;

impl Invariant<GameController> for SealedCellsInvariant {
    fn holds(game: &GameController) -> bool {
        Slot::ALL.into_iter().all(|slot| {
            let cell = game.board().cell(slot);
            cell.status().is_decided() == cell.open_slots().is_empty()
        })
    }

    fn description() -> &'static str {
        "Decided cells are sealed and open cells have room"
    }
}
