//! Core domain types for grid games.

use super::error::EngineError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant in the game.
///
/// Players compare by value: two players with the same marker and color are
/// the same player as far as line detection is concerned.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Getters,
    derive_new::new,
    derive_more::Display,
)]
#[display("{marker}")]
pub struct Player {
    /// Short label drawn in occupied cells.
    #[new(into)]
    marker: String,
    /// Display color tag. The engine never interprets it.
    #[new(into)]
    #[serde(default)]
    color: String,
}

/// A single cell of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has claimed the cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(&self) -> Option<&Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Returns true if nobody has claimed the cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Largest number of cells an engine will allocate.
pub const MAX_CELLS: usize = 1 << 20;

/// Square grid of cells stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Number of cells in a `size × size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `size` is zero or the
    /// grid would hold more than [`MAX_CELLS`] cells.
    #[instrument]
    pub fn cell_count(size: usize) -> Result<usize, EngineError> {
        if size == 0 {
            return Err(EngineError::invalid_configuration(
                "grid size must be at least 1",
            ));
        }
        match size.checked_mul(size) {
            Some(cells) if cells <= MAX_CELLS => Ok(cells),
            _ => Err(EngineError::invalid_configuration(format!(
                "grid size {} exceeds the limit of {} cells",
                size, MAX_CELLS
            ))),
        }
    }

    /// Creates an empty `size × size` grid. Callers check the size with
    /// [`cell_count`](Self::cell_count) first.
    #[instrument]
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `(row, column)` addresses a cell of this grid.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.size && column < self.size
    }

    /// Gets the cell at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        if self.contains(row, column) {
            self.cells.get(row * self.size + column)
        } else {
            None
        }
    }

    /// Returns true if the cell exists and is empty.
    pub fn is_empty_at(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some_and(Cell::is_empty)
    }

    /// Overwrites the cell at `(row, column)`.
    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), EngineError> {
        if !self.contains(row, column) {
            return Err(EngineError::OutOfBounds {
                row,
                column,
                size: self.size,
            });
        }
        self.cells[row * self.size + column] = cell;
        Ok(())
    }

    /// Empties every cell.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}
