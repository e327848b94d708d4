//! Text rendering of the board and status lines.

use ultimate_tictactoe::{BOARD_SIDE, GameSnapshot, GameStatus, Player, Position, SIDE, Square};

/// Shown at startup and after a reset.
pub const WELCOME: &str = "Ultimate tic-tac-toe. X moves first.\n\
Type `row,col` (0-8) to move, `step` for a random move, `reset` to start over, `help` for more.";

/// Help text for the interactive prompt.
pub const HELP: &str = "Commands:\n  \
row,col   play at global row and column (0-8)\n  \
step      play a random legal move for the side to move\n  \
moves     list the legal moves\n  \
json      print the game as JSON\n  \
reset     start a new game\n  \
quit      leave";

fn symbol(square: Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
        Square::Sealed(Player::X) => 'x',
        Square::Sealed(Player::O) => 'o',
    }
}

/// Draws the 9x9 grid with cell borders.
///
/// Played marks are upper case, sealed slots lower case, and legal targets `*`.
pub fn board(snapshot: &GameSnapshot) -> String {
    let mut out = String::from("    0 1 2   3 4 5   6 7 8\n");

    for position in Position::all() {
        let (row, col) = (position.row(), position.col());
        if col == 0 {
            if row > 0 && row % SIDE == 0 {
                out.push_str("   -------+-------+-------\n");
            }
            out.push_str(&format!("{}  ", row));
        } else if col % SIDE == 0 {
            out.push_str(" |");
        }

        let mark = if snapshot.legal_moves.contains(&position) {
            '*'
        } else {
            symbol(snapshot.square(position))
        };
        out.push(' ');
        out.push(mark);

        if col == BOARD_SIDE - 1 {
            out.push('\n');
        }
    }

    out
}

/// One status line: whose turn and where, or the result.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    match snapshot.status {
        GameStatus::InProgress => {
            let target = match snapshot.directed_cell {
                Some(slot) => format!("in the {} cell", slot.label().to_lowercase()),
                None => "anywhere open".to_string(),
            };
            let last = match snapshot.last_move {
                Some(position) => format!(" Last move: {}.", position),
                None => String::new(),
            };
            format!("Player {} to move {}.{}", snapshot.current_player, target, last)
        }
        GameStatus::Won(player) => {
            format!("Player {} wins! Type `reset` to play again.", player)
        }
        GameStatus::Tied => "It's a tie! Type `reset` to play again.".to_string(),
    }
}
