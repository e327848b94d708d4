//! Three-in-a-row detection over any 3x3 grid.

use crate::position::{Grid, Slot};
use crate::types::{Square, Status};

/// Every line of three: rows, columns, diagonals.
pub const LINES: [[Slot; 3]; 8] = [
    // Rows
    [Slot::TopLeft, Slot::TopCenter, Slot::TopRight],
    [Slot::MiddleLeft, Slot::Center, Slot::MiddleRight],
    [Slot::BottomLeft, Slot::BottomCenter, Slot::BottomRight],
    // Columns
    [Slot::TopLeft, Slot::MiddleLeft, Slot::BottomLeft],
    [Slot::TopCenter, Slot::Center, Slot::BottomCenter],
    [Slot::TopRight, Slot::MiddleRight, Slot::BottomRight],
    // Diagonals
    [Slot::TopLeft, Slot::Center, Slot::BottomRight],
    [Slot::TopRight, Slot::Center, Slot::BottomLeft],
];

/// Entries that can be "not yet filled in".
pub trait Vacancy {
    /// Returns true for the empty / undecided value.
    fn is_vacant(&self) -> bool;
}

impl Vacancy for Square {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl Vacancy for Status {
    fn is_vacant(&self) -> bool {
        !self.is_decided()
    }
}

/// Checks if any row, column or diagonal is entirely `target`.
///
/// A vacant target never forms a line. Each line stops at its first
/// mismatching entry.
pub fn has_line<T>(grid: &Grid<T>, target: &T) -> bool
where
    T: PartialEq + Vacancy,
{
    if target.is_vacant() {
        return false;
    }
    LINES
        .iter()
        .any(|line| line.iter().all(|slot| slot.of(grid) == target))
}

/// Checks if the grid has no vacant entries.
pub fn is_full<T: Vacancy>(grid: &Grid<T>) -> bool {
    grid.iter().flatten().all(|entry| !entry.is_vacant())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_no_line_on_empty_grid() {
        let grid = [[E; 3]; 3];
        assert!(!has_line(&grid, &X));
        assert!(!has_line(&grid, &E));
    }

    #[test]
    fn test_row_line() {
        let grid = [[X, X, X], [O, O, E], [E, E, E]];
        assert!(has_line(&grid, &X));
        assert!(!has_line(&grid, &O));
    }

    #[test]
    fn test_column_line() {
        let grid = [[O, X, E], [O, X, E], [O, E, X]];
        assert!(has_line(&grid, &O));
    }

    #[test]
    fn test_anti_diagonal_line() {
        let grid = [[E, E, X], [E, X, O], [X, O, O]];
        assert!(has_line(&grid, &X));
        assert!(!has_line(&grid, &O));
    }

    #[test]
    fn test_incomplete_line_is_not_a_line() {
        let grid = [[X, X, E], [E, E, E], [E, E, E]];
        assert!(!has_line(&grid, &X));
    }

    #[test]
    fn test_status_grid_line() {
        let won = Status::Won(Player::O);
        let grid = [
            [won, Status::Tied, Status::Open],
            [Status::Open, won, Status::Open],
            [Status::Tied, Status::Open, won],
        ];
        assert!(has_line(&grid, &won));
        assert!(!has_line(&grid, &Status::Won(Player::X)));
        assert!(!has_line(&grid, &Status::Open));
    }

    #[test]
    fn test_is_full() {
        let grid = [[X, O, X], [X, O, O], [O, X, X]];
        assert!(is_full(&grid));

        let grid = [[X, O, X], [X, E, O], [O, X, X]];
        assert!(!is_full(&grid));

        let statuses = [[Status::Tied; 3]; 3];
        assert!(is_full(&statuses));
    }
}
