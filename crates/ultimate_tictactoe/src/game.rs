//! The game controller: turn order, move application and the top-level state machine.

use crate::action::{Move, MoveError, Rejection};
use crate::board::Board;
#[cfg(debug_assertions)]
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::{Position, Slot};
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{GameStatus, Player, Square, Status};
use tracing::{debug, info, instrument};

/// Ultimate tic-tac-toe game engine.
///
/// Owns the board (which owns its cells) and the turn state. `apply_move`
/// and `reset` are the only mutators; a rejected move leaves everything
/// untouched. `Won` and `Tied` are absorbing until `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) last_move: Option<Position>,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameController {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            last_move: None,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by applying positions in order from a fresh start.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for position in positions {
            game.apply_move(*position)?;
        }
        Ok(game)
    }

    /// Plays the current player's mark at `position`.
    ///
    /// Runs cell resolution for the mover, then board resolution if any
    /// cell was decided, and hands the turn over unless the game ended.
    /// Returns the resulting status.
    ///
    /// # Errors
    ///
    /// - `IllegalMove` with `GameOver` once the game is decided
    /// - `IllegalMove` with `NotInLegalSet` when the position is not a legal target
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            debug!(status = %self.status, "Rejected move after game over");
            return Err(MoveError::illegal(position, Rejection::GameOver));
        }

        if !self.legal_moves().contains(&position) {
            let directed_to = self.directed_cell();
            debug!(?directed_to, "Rejected move outside the legal set");
            return Err(MoveError::illegal(
                position,
                Rejection::NotInLegalSet { directed_to },
            ));
        }

        let player = self.current_player;
        self.board.place(position, player)?;

        if self.board.resolve_cells(player) {
            self.board.resolve_board(player);
        }
        self.status = self.board.status().into();
        self.last_move = Some(position);
        self.history.push(Move::new(player, position));

        if self.status.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game over");
        } else {
            self.current_player = player.opponent();
        }

        #[cfg(debug_assertions)]
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        Ok(self.status)
    }

    /// Validates raw coordinates, then plays there.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` for coordinates outside 0..9, before any state is
    /// read; otherwise as [`GameController::apply_move`].
    pub fn apply_at(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let position = Position::new(row, col)?;
        self.apply_move(position)
    }

    /// Starts over in place: empty board, X to move, no history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.last_move = None;
        self.status = GameStatus::InProgress;
        self.history.clear();
        debug!("Game reset");
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move, or the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the most recent accepted position.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Every position the current player may play; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.last_move)
    }

    /// Checks whether `position` would be accepted right now.
    pub fn is_legal(&self, position: Position) -> bool {
        self.legal_moves().contains(&position)
    }

    /// The cell the next move is confined to, or `None` on free choice.
    pub fn directed_cell(&self) -> Option<Slot> {
        rules::directed_cell(&self.board, self.last_move)
    }

    /// Resolution status of the cell at `macro_index`.
    pub fn cell_status(&self, macro_index: Slot) -> Status {
        self.board.cell(macro_index).status()
    }

    /// The square at `position`: empty, played, or sealed.
    pub fn mark_at(&self, position: Position) -> Square {
        self.board.square(position)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Captures the whole observable state as one serializable value.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
