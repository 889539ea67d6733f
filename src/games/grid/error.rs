//! Engine error types.

use tracing::instrument;

/// Error returned by engine construction and placement.
///
/// Placing on an occupied cell, or after the game has been won, is not an
/// error: those calls are ignored so a presentation layer can forward every
/// click without checking the guards itself.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Grid size or player list cannot produce a playable game.
    #[display("Invalid configuration: {}", reason)]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// Coordinates fall outside the grid.
    #[display("Cell ({}, {}) is outside the {}x{} grid", row, column, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Side length of the grid.
        size: usize,
    },
}

impl EngineError {
    /// Creates an [`EngineError::InvalidConfiguration`].
    #[instrument(skip(reason))]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl std::error::Error for EngineError {}
