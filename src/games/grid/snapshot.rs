//! Immutable views of engine state for presentation layers.

use super::{Line, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Coarse game phase derived from the winner and tie flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "winner", rename_all = "snake_case")]
pub enum GameStatus {
    /// Moves are still possible.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The grid filled up with no completed line.
    Tied,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }

    /// Returns true once the game is won or tied.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins!", player.marker()),
            GameStatus::Tied => write!(f, "Cats game"),
        }
    }
}

/// Owned copy of everything a presentation layer needs to draw a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// Side length of the grid.
    size: usize,
    /// Cell owners in row-major order.
    cells: Vec<Option<Player>>,
    /// Configured players in turn order.
    players: Vec<Player>,
    /// Index of the player whose turn it is.
    current_player_index: usize,
    /// Coarse game phase.
    status: GameStatus,
    /// Line that decided the game, if won.
    winning_line: Option<Line>,
    /// Number of marks placed since the last reset.
    move_count: usize,
}

impl GameSnapshot {
    pub(crate) fn new(
        size: usize,
        cells: Vec<Option<Player>>,
        players: Vec<Player>,
        current_player_index: usize,
        status: GameStatus,
        winning_line: Option<Line>,
        move_count: usize,
    ) -> Self {
        Self {
            size,
            cells,
            players,
            current_player_index,
            status,
            winning_line,
            move_count,
        }
    }

    /// Owner of the cell at `(row, column)`; `None` if empty or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Player> {
        if row < self.size && column < self.size {
            self.cells.get(row * self.size + column)?.as_ref()
        } else {
            None
        }
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.status.winner()
    }

    /// Returns true if the game ended in a tie.
    pub fn is_tie(&self) -> bool {
        self.status == GameStatus::Tied
    }
}
