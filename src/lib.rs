//! Strictly Grid - turn-based grid game engine
//!
//! Tracks a square grid, rotates turns through any number of players, and
//! decides after every move whether a row, column or full diagonal has been
//! completed or the grid has filled up.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns all game state and is driven by
//!   [`Command`]s
//! - **Rules**: pure win and tie detection over a [`Grid`]
//! - **Config**: [`GameConfig`] loaded from TOML
//! - **Console**: text rendering of [`GameSnapshot`]s and input parsing
//!
//! # Example
//!
//! ```
//! use strictly_grid::{Command, GameEngine, GameStatus};
//!
//! # fn example() -> Result<(), strictly_grid::EngineError> {
//! let mut engine = GameEngine::default();
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.apply(Command::Place { row, column })?;
//! }
//! assert!(matches!(engine.status(), GameStatus::Won(_)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

pub mod console;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Engine
pub use games::grid::{
    Applied, Cell, Command, EngineError, GameEngine, GameSnapshot, GameStatus, Grid, Line,
    MAX_CELLS, Move, Placement, Player,
};

// Crate-level exports - Rules and invariants
pub use games::grid::{invariants, rules};
