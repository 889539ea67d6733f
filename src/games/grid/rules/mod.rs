//! Game rules for grid games.
//!
//! Pure functions over a [`Grid`](super::Grid). Rules are separated from the
//! engine so they can be tested and checked on their own.

pub mod tie;
pub mod win;

pub use tie::is_tie;
pub use win::{Victory, check_winner, line_owner};

use super::Grid;
use tracing::instrument;

/// Result of evaluating a grid from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// A line is uniform.
    Won(Victory),
    /// Every cell is occupied and no line is uniform.
    Tied,
    /// Play continues.
    Open,
}

/// Evaluates the grid: a win takes priority over a full grid.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn evaluate(grid: &Grid) -> Evaluation {
    let victory = check_winner(grid);
    if is_tie(grid, victory.as_ref()) {
        return Evaluation::Tied;
    }
    match victory {
        Some(victory) => Evaluation::Won(victory),
        None => Evaluation::Open,
    }
}
