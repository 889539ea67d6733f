//! Game configuration loaded from TOML.

use crate::games::grid::{EngineError, Grid, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Grid size and player roster for a game.
///
/// ```toml
/// size = 4
///
/// [[players]]
/// marker = "X"
/// color = "red"
///
/// [[players]]
/// marker = "O"
/// color = "blue"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    #[serde(default = "default_size")]
    size: usize,

    /// Players in turn order.
    #[serde(default = "default_players")]
    players: Vec<Player>,
}

#[instrument]
fn default_size() -> usize {
    3
}

#[instrument]
fn default_players() -> Vec<Player> {
    vec![Player::new("X", "red"), Player::new("O", "blue")]
}

impl GameConfig {
    /// Creates a configuration. Call [`validate`](Self::validate) before use.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(size: usize, players: Vec<Player>) -> Self {
        Self { size, players }
    }

    /// Replaces the grid size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Replaces the player roster.
    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(
            size = config.size,
            player_count = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Checks that an engine can be built from this configuration.
    #[instrument(skip(self), fields(size = self.size, player_count = self.players.len()))]
    pub fn validate(&self) -> Result<(), EngineError> {
        Grid::cell_count(self.size)?;
        if self.players.is_empty() {
            return Err(EngineError::invalid_configuration(
                "at least one player is required",
            ));
        }
        if let Some(player) = self.players.iter().find(|p| p.marker().is_empty()) {
            return Err(EngineError::invalid_configuration(format!(
                "player with color {:?} has an empty marker",
                player.color()
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            players: default_players(),
        }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
