//! Player reading commands from a line-oriented input.

use super::{Command, Player};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};
use ultimate_tictactoe::GameController;

/// A person typing commands, one per line.
///
/// Unreadable lines are reported on `output` and asked again; end of
/// input counts as `quit`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over the given input and prompt output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn next_command(&mut self, game: &GameController) -> Result<Command> {
        loop {
            write!(self.output, "{} ({})> ", self.name, game.current_player())?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                debug!("End of input");
                return Ok(Command::Quit);
            }

            match line.parse::<Command>() {
                Ok(command) => return Ok(command),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use ultimate_tictactoe::Position;

    #[test]
    fn test_reads_commands_in_order() {
        let input = Cursor::new("4,4\nreset\n");
        let mut player = HumanPlayer::new("alice", input, Vec::new());
        let game = GameController::new();

        assert_eq!(
            player.next_command(&game).unwrap(),
            Command::Move(Position::new(4, 4).unwrap())
        );
        assert_eq!(player.next_command(&game).unwrap(), Command::Reset);
        assert_eq!(player.next_command(&game).unwrap(), Command::Quit);
    }

    #[test]
    fn test_reprompts_after_bad_line() {
        let input = Cursor::new("nonsense\n0,0\n");
        let mut output = Vec::new();
        {
            let mut player = HumanPlayer::new("bob", input, &mut output);
            let game = GameController::new();
            assert_eq!(
                player.next_command(&game).unwrap(),
                Command::Move(Position::new(0, 0).unwrap())
            );
        }

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("bob (X)> ").count(), 2);
        assert!(printed.contains("Cannot read a position"));
    }
}
