//! Demo configuration: TOML file plus command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who makes the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Display)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed on stdin.
    #[display("human")]
    Human,
    /// Uniformly random legal moves.
    #[display("random")]
    Random,
}

/// Settings for a `uttt` run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Seed for random moves; drawn at startup when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Number of games for `auto`.
    #[serde(default = "default_games")]
    games: u32,

    /// Print the board after each move (`play`) or game (`auto`).
    #[serde(default = "default_show_board")]
    show_board: bool,

    /// Who plays X.
    #[serde(default = "default_x")]
    x: PlayerKind,

    /// Who plays O.
    #[serde(default = "default_o")]
    o: PlayerKind,
}

fn default_games() -> u32 {
    1
}

fn default_show_board() -> bool {
    true
}

fn default_x() -> PlayerKind {
    PlayerKind::Human
}

fn default_o() -> PlayerKind {
    PlayerKind::Random
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            games: default_games(),
            show_board: default_show_board(),
            x: default_x(),
            o: default_o(),
        }
    }
}

impl DemoConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(games = config.games, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Loads the file when given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed.or(self.seed);
        self
    }

    /// Replaces the game count when one is given.
    pub fn with_games(mut self, games: Option<u32>) -> Self {
        self.games = games.unwrap_or(self.games).max(1);
        self
    }

    /// Replaces either side's player kind when given.
    pub fn with_players(mut self, x: Option<PlayerKind>, o: Option<PlayerKind>) -> Self {
        self.x = x.unwrap_or(self.x);
        self.o = o.unwrap_or(self.o);
        self
    }

    /// Turns board printing off when `quiet` is set.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.show_board &= !quiet;
        self
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
