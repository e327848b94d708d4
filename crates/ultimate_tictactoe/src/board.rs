//! The 3x3 meta-board of cells.

use crate::action::MoveError;
use crate::cell::Cell;
use crate::position::{Grid, Position, Slot};
use crate::rules::{has_line, is_full, majority};
use crate::types::{Player, Square, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Nine cells plus the meta-level status.
///
/// The board status is derived from cell statuses only; the board never
/// writes a mark itself, it delegates placement to the owning cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Grid<Cell>,
    status: Status,
}

impl Board {
    /// Creates a board of nine empty cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the meta-level status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the cell at the given macro index.
    pub fn cell(&self, macro_index: Slot) -> &Cell {
        macro_index.of(&self.cells)
    }

    /// Returns every cell status, row-major.
    pub fn cell_statuses(&self) -> Grid<Status> {
        self.cells.map(|row| row.map(|cell| cell.status()))
    }

    /// Gets the square at a global position.
    pub fn square(&self, position: Position) -> Square {
        self.cell(position.macro_index())
            .square(position.micro_index())
    }

    /// Places a mark, delegating to the cell at the position's macro index.
    pub fn place(&mut self, position: Position, player: Player) -> Result<(), MoveError> {
        position
            .macro_index()
            .of_mut(&mut self.cells)
            .place(position.micro_index(), player)
            .map_err(|reason| MoveError::illegal(position, reason))
    }

    /// Resolves every still-open cell for `player`; returns true if any changed.
    ///
    /// Only the cell that just received a mark can actually change, but a
    /// full pass keeps the board honest regardless of how it was mutated.
    #[instrument(skip(self))]
    pub fn resolve_cells(&mut self, player: Player) -> bool {
        let mut changed = false;
        for cell in self.cells.iter_mut().flatten() {
            if !cell.status().is_decided() {
                changed |= cell.resolve(player);
            }
        }
        changed
    }

    /// Tries to decide the board after `player` moved; returns whether the status changed.
    ///
    /// A line of cells won by `player` wins the board. Failing that, once
    /// every cell is decided the board goes to whoever owns more cells, or
    /// is tied on equal counts. The count never runs while a cell is open.
    #[instrument(skip(self))]
    pub fn resolve_board(&mut self, player: Player) -> bool {
        if self.status.is_decided() {
            return false;
        }

        let statuses = self.cell_statuses();
        if has_line(&statuses, &Status::Won(player)) {
            self.status = Status::Won(player);
            debug!(%player, "Board won by line");
            return true;
        }

        if is_full(&statuses) {
            self.status = majority(&statuses);
            debug!(status = ?self.status, "Board decided by cell count");
            return true;
        }

        false
    }

    /// Every open position on the board, grouped by cell in row-major order.
    pub fn open_positions(&self) -> Vec<Position> {
        Slot::ALL
            .into_iter()
            .flat_map(|macro_index| self.open_positions_in(macro_index))
            .collect()
    }

    /// Open positions inside one cell.
    pub fn open_positions_in(&self, macro_index: Slot) -> Vec<Position> {
        self.cell(macro_index)
            .open_slots()
            .into_iter()
            .map(|micro_index| Position::from_slots(macro_index, micro_index))
            .collect()
    }

    /// Resets every cell and the board status.
    pub fn clear(&mut self) {
        self.cells.iter_mut().flatten().for_each(Cell::clear);
        self.status = Status::Open;
    }
}
