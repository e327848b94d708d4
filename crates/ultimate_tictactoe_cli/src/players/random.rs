//! Player that picks uniformly among the legal moves.

use super::{Command, Player};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};
use ultimate_tictactoe::{GameController, GameStatus, Position};

/// Uniform-random legal moves from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player whose choices are fixed by `seed`.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks one legal move; `None` once the game is over.
    pub fn pick(&mut self, game: &GameController) -> Option<Position> {
        game.legal_moves().choose(&mut self.rng).copied()
    }

    /// Picks and plays one legal move; returns the position played.
    #[instrument(skip(self, game), fields(player = %game.current_player()))]
    pub fn step(&mut self, game: &mut GameController) -> Result<Option<Position>> {
        let Some(position) = self.pick(game) else {
            return Ok(None);
        };
        game.apply_move(position)?;
        debug!(%position, "Random move");
        Ok(Some(position))
    }

    /// Plays random moves until the game ends; returns the final status.
    pub fn play_out(&mut self, game: &mut GameController) -> Result<GameStatus> {
        while self.step(game)?.is_some() {}
        Ok(game.status())
    }
}

impl Player for RandomPlayer {
    fn next_command(&mut self, game: &GameController) -> Result<Command> {
        Ok(match self.pick(game) {
            Some(position) => Command::Move(position),
            None => Command::Quit,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_only_legal_moves() {
        let mut player = RandomPlayer::new("bot", 3);
        let mut game = GameController::new();
        game.apply_at(1, 2).unwrap();

        for _ in 0..20 {
            let position = player.pick(&game).unwrap();
            assert!(game.is_legal(position));
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut first = GameController::new();
        let mut second = GameController::new();
        RandomPlayer::new("a", 42).play_out(&mut first).unwrap();
        RandomPlayer::new("b", 42).play_out(&mut second).unwrap();

        assert_eq!(first.history(), second.history());
        assert!(first.status().is_over());
    }

    #[test]
    fn test_finished_game_yields_quit() {
        let mut player = RandomPlayer::new("bot", 5);
        let mut game = GameController::new();
        player.play_out(&mut game).unwrap();

        assert_eq!(player.next_command(&game).unwrap(), Command::Quit);
        assert_eq!(player.step(&mut game).unwrap(), None);
    }
}
