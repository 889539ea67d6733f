//! First-class action types for grid games.
//!
//! A presentation layer drives the engine by sending [`Command`]s and reading
//! back snapshots. It never holds a mutable reference into the grid.

use super::snapshot::GameSnapshot;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A recorded placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the player who moved, into the engine's player list.
    pub player_index: usize,
    /// Row of the claimed cell.
    pub row: usize,
    /// Column of the claimed cell.
    pub column: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player_index: usize, row: usize, column: usize) -> Self {
        Self {
            player_index,
            row,
            column,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player {} -> ({}, {})",
            self.player_index, self.row, self.column
        )
    }
}

/// Request sent to the engine by its presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(tag = "command", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// Claim a cell for the current player.
    Place {
        /// Target row.
        row: usize,
        /// Target column.
        column: usize,
    },
    /// Start a new game with the same configuration.
    Reset,
}

/// What happened to a placement request that was in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// The cell was claimed and the turn advanced.
    Placed,
    /// The cell was occupied or the game was already won. Nothing changed.
    Ignored,
}

/// Outcome of [`GameEngine::apply`](super::GameEngine::apply).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct Applied {
    /// What a [`Command::Place`] did. `None` for [`Command::Reset`].
    placement: Option<Placement>,
    /// State after the command.
    snapshot: GameSnapshot,
}

impl Applied {
    /// Consumes the result, keeping only the snapshot.
    pub fn into_snapshot(self) -> GameSnapshot {
        self.snapshot
    }
}
