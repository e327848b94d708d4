//! Majority tie-break for a fully decided meta-board.

use crate::position::Grid;
use crate::types::{Player, Status};
use tracing::instrument;

/// Decides a board whose cells are all decided but hold no line.
///
/// The player owning strictly more cells wins; equal counts (including
/// zero each, when every cell tied) make the board `Tied`. Only meaningful
/// once no cell is `Open`.
#[instrument]
pub fn majority(statuses: &Grid<Status>) -> Status {
    let count = |player: Player| {
        statuses
            .iter()
            .flatten()
            .filter(|status| **status == Status::Won(player))
            .count()
    };
    let (x_cells, o_cells) = (count(Player::X), count(Player::O));

    match x_cells.cmp(&o_cells) {
        std::cmp::Ordering::Greater => Status::Won(Player::X),
        std::cmp::Ordering::Less => Status::Won(Player::O),
        std::cmp::Ordering::Equal => Status::Tied,
    }
}
