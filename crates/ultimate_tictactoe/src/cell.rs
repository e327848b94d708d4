//! A single 3x3 micro-board.

use crate::action::Rejection;
use crate::position::{Grid, Slot};
use crate::rules::{has_line, is_full};
use crate::types::{Player, Square, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One of the nine cells of the meta-board.
///
/// Once the status leaves `Open` every slot holds a mark: unplayed slots
/// of a won cell are sealed with the winner's mark, and a tied cell is
/// already full. That keeps decided cells out of every legal-move set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    squares: Grid<Square>,
    status: Status,
}

impl Cell {
    /// Creates an empty, open cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the resolution status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Gets the square at the given slot.
    pub fn square(&self, slot: Slot) -> Square {
        *slot.of(&self.squares)
    }

    /// Returns all squares, row-major.
    pub fn squares(&self) -> &Grid<Square> {
        &self.squares
    }

    /// Places a mark in an empty slot of an open cell.
    pub fn place(&mut self, slot: Slot, player: Player) -> Result<(), Rejection> {
        if self.status.is_decided() {
            return Err(Rejection::CellDecided);
        }
        let square = slot.of_mut(&mut self.squares);
        if !square.is_empty() {
            return Err(Rejection::SlotTaken);
        }
        *square = Square::Occupied(player);
        Ok(())
    }

    /// Tries to decide the cell after `player` moved; returns whether the status changed.
    ///
    /// A line for `player` wins the cell and seals every empty slot with
    /// their mark. Otherwise a full cell is tied.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn resolve(&mut self, player: Player) -> bool {
        if self.status.is_decided() {
            return false;
        }

        if has_line(&self.squares, &Square::Occupied(player)) {
            self.status = Status::Won(player);
            self.seal(player);
            debug!(%player, "Cell won");
            return true;
        }

        if is_full(&self.squares) {
            self.status = Status::Tied;
            debug!("Cell tied");
            return true;
        }

        false
    }

    /// Slots still available; empty once the cell is decided.
    pub fn open_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.square(*slot).is_empty())
            .collect()
    }

    /// Resets every slot to empty and the status to open.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn seal(&mut self, player: Player) {
        self.squares
            .iter_mut()
            .flatten()
            .filter(|square| square.is_empty())
            .for_each(|square| *square = Square::Sealed(player));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cell: &mut Cell, slots: &[(Slot, Player)]) {
        for (slot, player) in slots {
            cell.place(*slot, *player).unwrap();
        }
    }

    #[test]
    fn test_new_cell_is_open() {
        let cell = Cell::new();
        assert_eq!(cell.status(), Status::Open);
        assert_eq!(cell.open_slots().len(), 9);
    }

    #[test]
    fn test_place_rejects_taken_slot() {
        let mut cell = Cell::new();
        cell.place(Slot::Center, Player::X).unwrap();
        assert_eq!(cell.place(Slot::Center, Player::O), Err(Rejection::SlotTaken));
        assert_eq!(cell.square(Slot::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_win_seals_empty_slots() {
        let mut cell = Cell::new();
        play(
            &mut cell,
            &[
                (Slot::TopLeft, Player::X),
                (Slot::Center, Player::O),
                (Slot::TopCenter, Player::X),
                (Slot::TopRight, Player::X),
            ],
        );

        assert!(cell.resolve(Player::X));
        assert_eq!(cell.status(), Status::Won(Player::X));
        assert!(cell.open_slots().is_empty());
        // Played marks stay as they were; only empty slots are sealed.
        assert_eq!(cell.square(Slot::Center), Square::Occupied(Player::O));
        assert_eq!(cell.square(Slot::BottomLeft), Square::Sealed(Player::X));
        assert_eq!(cell.square(Slot::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_resolve_only_checks_mover() {
        let mut cell = Cell::new();
        play(
            &mut cell,
            &[
                (Slot::TopLeft, Player::O),
                (Slot::Center, Player::O),
                (Slot::BottomRight, Player::O),
            ],
        );

        assert!(!cell.resolve(Player::X));
        assert_eq!(cell.status(), Status::Open);
        assert!(cell.resolve(Player::O));
    }

    #[test]
    fn test_full_cell_without_line_ties() {
        let mut cell = Cell::new();
        // X O X / X O O / O X X
        play(
            &mut cell,
            &[
                (Slot::TopLeft, Player::X),
                (Slot::TopCenter, Player::O),
                (Slot::TopRight, Player::X),
                (Slot::MiddleLeft, Player::X),
                (Slot::Center, Player::O),
                (Slot::MiddleRight, Player::O),
                (Slot::BottomLeft, Player::O),
                (Slot::BottomCenter, Player::X),
                (Slot::BottomRight, Player::X),
            ],
        );

        assert!(cell.resolve(Player::X));
        assert_eq!(cell.status(), Status::Tied);
    }

    #[test]
    fn test_decided_cell_is_locked() {
        let mut cell = Cell::new();
        play(
            &mut cell,
            &[
                (Slot::TopLeft, Player::O),
                (Slot::MiddleLeft, Player::O),
                (Slot::BottomLeft, Player::O),
            ],
        );
        assert!(cell.resolve(Player::O));

        assert_eq!(cell.place(Slot::Center, Player::X), Err(Rejection::CellDecided));
        assert!(!cell.resolve(Player::O));
        assert_eq!(cell.status(), Status::Won(Player::O));
    }

    #[test]
    fn test_clear_reopens() {
        let mut cell = Cell::new();
        play(
            &mut cell,
            &[
                (Slot::TopLeft, Player::X),
                (Slot::Center, Player::X),
                (Slot::BottomRight, Player::X),
            ],
        );
        cell.resolve(Player::X);

        cell.clear();
        assert_eq!(cell, Cell::new());
    }
}
