//! Turn-based play on a square grid for any number of players.

mod action;
mod engine;
mod error;
mod line;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Applied, Command, Move, Placement};
pub use engine::GameEngine;
pub use error::EngineError;
pub use line::Line;
pub use snapshot::{GameSnapshot, GameStatus};
pub use types::{Cell, Grid, MAX_CELLS, Player};
