//! Slots inside a 3x3 grid and positions on the 9x9 board.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side length of a cell and of the meta-board.
pub const SIDE: usize = 3;

/// Side length of the full board in global coordinates.
pub const BOARD_SIDE: usize = SIDE * SIDE;

/// A 3x3 grid, row-major.
pub type Grid<T> = [[T; SIDE]; SIDE];

/// One of the nine places in a 3x3 grid.
///
/// Serves both as the macro index (which cell on the meta-board) and
/// as the micro index (which slot inside a cell, and therefore which
/// cell the opponent is sent to next).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Slot {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Slot {
    /// All 9 slots in row-major order.
    pub const ALL: [Slot; 9] = [
        Slot::TopLeft,
        Slot::TopCenter,
        Slot::TopRight,
        Slot::MiddleLeft,
        Slot::Center,
        Slot::MiddleRight,
        Slot::BottomLeft,
        Slot::BottomCenter,
        Slot::BottomRight,
    ];

    /// Get label for this slot (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Slot::TopLeft => "Top-left",
            Slot::TopCenter => "Top-center",
            Slot::TopRight => "Top-right",
            Slot::MiddleLeft => "Middle-left",
            Slot::Center => "Center",
            Slot::MiddleRight => "Middle-right",
            Slot::BottomLeft => "Bottom-left",
            Slot::BottomCenter => "Bottom-center",
            Slot::BottomRight => "Bottom-right",
        }
    }

    /// Parse from label (case-insensitive) or index (0-8).
    pub fn from_label_or_number(s: &str) -> Option<Slot> {
        if let Ok(num) = s.trim().parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.trim().to_lowercase();
        <Slot as strum::IntoEnumIterator>::iter().find(|slot| slot.label().to_lowercase() == s_lower)
    }

    /// Converts slot to grid index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates slot from grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates slot from a row and column, each in 0..3.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= SIDE || col >= SIDE {
            return None;
        }
        Self::from_index(row * SIDE + col)
    }

    /// Row of this slot (0-2).
    pub fn row(self) -> usize {
        self.to_index() / SIDE
    }

    /// Column of this slot (0-2).
    pub fn col(self) -> usize {
        self.to_index() % SIDE
    }

    /// Reads the entry for this slot out of a grid.
    pub fn of<T>(self, grid: &Grid<T>) -> &T {
        &grid[self.row()][self.col()]
    }

    /// Mutable access to the entry for this slot.
    pub fn of_mut<T>(self, grid: &mut Grid<T>) -> &mut T {
        &mut grid[self.row()][self.col()]
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A position on the 9x9 board in global coordinates.
///
/// Always in range: the only constructors validate their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, rejecting coordinates outside 0..9.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return Err(MoveError::InvalidPosition { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates the position at `micro` inside the cell at `macro_index`.
    pub fn from_slots(macro_index: Slot, micro_index: Slot) -> Self {
        Self {
            row: (macro_index.row() * SIDE + micro_index.row()) as u8,
            col: (macro_index.col() * SIDE + micro_index.col()) as u8,
        }
    }

    /// Global row (0-8).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Global column (0-8).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The cell this position belongs to.
    pub fn macro_index(self) -> Slot {
        Slot::ALL[(self.row() / SIDE) * SIDE + self.col() / SIDE]
    }

    /// The slot inside its cell, which is also the cell the next move is sent to.
    pub fn micro_index(self) -> Slot {
        Slot::ALL[(self.row() % SIDE) * SIDE + self.col() % SIDE]
    }

    /// All 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIDE).flat_map(|row| {
            (0..BOARD_SIDE).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Position::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(position: Position) -> Self {
        (position.row(), position.col())
    }
}

impl FromStr for Position {
    type Err = MoveError;

    /// Parses `"r,c"` or `"r c"` with both coordinates in 0..9.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(MoveError::Malformed(s.to_string()));
        };
        let row = row
            .parse::<usize>()
            .map_err(|_| MoveError::Malformed(s.to_string()))?;
        let col = col
            .parse::<usize>()
            .map_err(|_| MoveError::Malformed(s.to_string()))?;
        Position::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_round_trips_row_col() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_row_col(slot.row(), slot.col()), Some(slot));
        }
        assert_eq!(Slot::from_row_col(3, 0), None);
    }

    #[test]
    fn test_slot_from_label_or_number() {
        assert_eq!(Slot::from_label_or_number("4"), Some(Slot::Center));
        assert_eq!(Slot::from_label_or_number("bottom-right"), Some(Slot::BottomRight));
        assert_eq!(Slot::from_label_or_number("9"), None);
        assert_eq!(Slot::from_label_or_number("nowhere"), None);
    }

    #[test]
    fn test_macro_and_micro_index() {
        let position = Position::new(1, 2).unwrap();
        assert_eq!(position.macro_index(), Slot::TopLeft);
        assert_eq!(position.micro_index(), Slot::MiddleRight);

        let position = Position::new(7, 3).unwrap();
        assert_eq!(position.macro_index(), Slot::BottomCenter);
        assert_eq!(position.micro_index(), Slot::MiddleLeft);
    }

    #[test]
    fn test_from_slots_inverts_indices() {
        for position in Position::all() {
            let rebuilt = Position::from_slots(position.macro_index(), position.micro_index());
            assert_eq!(rebuilt, position);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Position::new(9, 0),
            Err(MoveError::InvalidPosition { row: 9, col: 0 })
        );
        assert_eq!(
            Position::new(0, 12),
            Err(MoveError::InvalidPosition { row: 0, col: 12 })
        );
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("4,5".parse::<Position>(), Position::new(4, 5));
        assert_eq!(" 8 0 ".parse::<Position>(), Position::new(8, 0));
        assert!(matches!("4".parse::<Position>(), Err(MoveError::Malformed(_))));
        assert!(matches!("a,b".parse::<Position>(), Err(MoveError::Malformed(_))));
        assert!(matches!(
            "4,9".parse::<Position>(),
            Err(MoveError::InvalidPosition { row: 4, col: 9 })
        ));
    }

    #[test]
    fn test_iter_matches_index_order() {
        use strum::IntoEnumIterator;
        let slots: Vec<Slot> = Slot::iter().collect();
        assert_eq!(slots, Slot::ALL);
        for (index, slot) in Slot::iter().enumerate() {
            assert_eq!(slot.to_index(), index);
            assert_eq!(Slot::from_index(index), Some(slot));
        }
    }

    #[test]
    fn test_all_covers_board() {
        assert_eq!(Position::all().count(), 81);
    }
}
