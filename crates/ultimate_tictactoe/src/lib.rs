//! Ultimate tic-tac-toe game logic.
//!
//! A 3x3 meta-board of 3x3 cells. The slot a player marks inside a cell
//! sends the opponent to the cell at the same place on the meta-board.
//!
//! # Architecture
//!
//! - **Rules**: three-in-a-row detection, the send-to rule, majority tie-break
//! - **Cell**: one micro-board that seals itself once won or tied
//! - **Board**: nine cells with a status derived from theirs
//! - **GameController**: turn order and the top-level state machine
//! - **Invariants**: properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{GameController, GameStatus, Player, Position, Slot};
//!
//! let mut game = GameController::new();
//! game.apply_move(Position::new(1, 2)?)?;
//!
//! // X played the middle-right slot, so O is sent to the middle-right cell.
//! assert_eq!(game.current_player(), Player::O);
//! assert_eq!(game.directed_cell(), Some(Slot::MiddleRight));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), ultimate_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError, Rejection};
pub use board::Board;
pub use cell::Cell;
pub use game::GameController;
pub use position::{BOARD_SIDE, Grid, Position, SIDE, Slot};
pub use snapshot::GameSnapshot;
pub use types::{GameStatus, Player, Square, Status};
