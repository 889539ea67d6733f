//! History consistency invariant: the grid is exactly what the moves built.

use super::super::{Cell, GameEngine, Grid};
use super::Invariant;

/// Invariant: replaying the move history onto an empty grid reproduces the
/// current grid, and no cell is written twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Grid::new(engine.size());

        for mov in engine.history() {
            let Some(player) = engine.players().get(mov.player_index) else {
                return false;
            };

            // Cell must be empty before placing
            if !reconstructed.is_empty_at(mov.row, mov.column) {
                return false;
            }

            if reconstructed
                .set(mov.row, mov.column, Cell::Occupied(player.clone()))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *engine.grid()
    }

    fn description() -> &'static str {
        "Grid matches the move history (cells never overwritten)"
    }
}
