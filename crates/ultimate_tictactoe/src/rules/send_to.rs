//! The send-to rule: where the next move may land.

use crate::board::Board;
use crate::position::{Position, Slot};
use tracing::{instrument, trace};

/// Returns the cell the next move is confined to, if any.
///
/// A move's micro index names the cell the opponent must play in. When
/// there is no previous move, or that cell has no open slot left, play is
/// free and this returns `None`.
pub fn directed_cell(board: &Board, last_move: Option<Position>) -> Option<Slot> {
    let target = last_move?.micro_index();
    if board.cell(target).open_slots().is_empty() {
        None
    } else {
        Some(target)
    }
}

/// Computes every legal target for the next move.
///
/// Never empty while the board is open: free choice only kicks in when the
/// directed cell is unusable, and an open board always has an open cell.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, last_move: Option<Position>) -> Vec<Position> {
    match directed_cell(board, last_move) {
        Some(target) => board.open_positions_in(target),
        None => {
            trace!("free choice");
            board.open_positions()
        }
    }
}
