//! Turn-based grid game engine.

use super::action::{Applied, Command, Move, Placement};
use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::{self, Evaluation};
use super::snapshot::{GameSnapshot, GameStatus};
use super::types::{Cell, Grid, Player};
use super::Line;
use crate::config::GameConfig;
use tracing::{debug, error, info, instrument, warn};

/// Owns the grid, the players and the turn cursor, and derives the outcome
/// after every move.
///
/// The engine is a plain value. Callers that deliver input from several
/// threads must serialize calls to [`place`](Self::place) and
/// [`reset`](Self::reset) themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) grid: Grid,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player_index: usize,
    pub(crate) winner: Option<Player>,
    pub(crate) winning_line: Option<Line>,
    pub(crate) is_tie: bool,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with an empty `size × size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `size` is zero, the
    /// grid would exceed [`MAX_CELLS`](super::MAX_CELLS), or `players` is
    /// empty.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(size: usize, players: Vec<Player>) -> Result<Self, EngineError> {
        let cells = Grid::cell_count(size)?;
        if players.is_empty() {
            return Err(EngineError::invalid_configuration(
                "at least one player is required",
            ));
        }

        debug!(size, cells, "Creating game engine");
        Ok(Self::fresh(Grid::new(size), players))
    }

    /// Initial state around a grid whose size has already been checked.
    fn fresh(grid: Grid, players: Vec<Player>) -> Self {
        Self {
            grid,
            players,
            current_player_index: 0,
            winner: None,
            winning_line: None,
            is_tie: false,
            history: Vec::new(),
        }
    }

    /// Creates an engine from a loaded configuration.
    #[instrument(skip(config), fields(size = config.size()))]
    pub fn from_config(config: &GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Self::new(*config.size(), config.players().clone())
    }

    /// Claims `(row, column)` for the current player and advances the turn.
    ///
    /// Placing on an occupied cell, or after a winner is recorded, changes
    /// nothing and returns [`Placement::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinates are outside the
    /// grid. State is left untouched.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn place(&mut self, row: usize, column: usize) -> Result<Placement, EngineError> {
        if !self.grid.contains(row, column) {
            warn!(row, column, size = self.grid.size(), "Placement outside grid");
            return Err(EngineError::OutOfBounds {
                row,
                column,
                size: self.grid.size(),
            });
        }

        if self.winner.is_some() {
            debug!("Game already won, ignoring placement");
            return Ok(Placement::Ignored);
        }

        if !self.grid.is_empty_at(row, column) {
            debug!("Cell occupied, ignoring placement");
            return Ok(Placement::Ignored);
        }

        let player = self.current_player().clone();
        self.grid.set(row, column, Cell::Occupied(player))?;
        self.history
            .push(Move::new(self.current_player_index, row, column));
        self.advance_turn();
        self.check_invariants();

        Ok(Placement::Placed)
    }

    /// Re-evaluates the outcome, then hands the turn to the next player
    /// unless somebody has won.
    ///
    /// The cursor still moves on the move that fills the grid.
    #[instrument(skip(self))]
    pub fn advance_turn(&mut self) {
        self.evaluate_outcome();

        if self.winner.is_some() {
            return;
        }

        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        debug!(
            current_player_index = self.current_player_index,
            "Turn advanced"
        );
    }

    /// Recomputes the winner and tie flag from the whole grid.
    fn evaluate_outcome(&mut self) {
        match rules::evaluate(&self.grid) {
            Evaluation::Won(victory) => {
                if self.winner.is_none() {
                    info!(winner = %victory.player(), line = %victory.line(), "Game won");
                }
                self.winning_line = Some(*victory.line());
                self.winner = Some(victory.player().clone());
                self.is_tie = false;
            }
            Evaluation::Tied => {
                if !self.is_tie {
                    info!("Game tied");
                }
                self.winner = None;
                self.winning_line = None;
                self.is_tie = true;
            }
            Evaluation::Open => {
                self.winner = None;
                self.winning_line = None;
                self.is_tie = false;
            }
        }
    }

    /// Clears the grid and outcome and gives the turn back to the first
    /// player. Size and players are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid.clear();
        self.current_player_index = 0;
        self.winner = None;
        self.winning_line = None;
        self.is_tie = false;
        self.history.clear();
        info!("Game reset");
    }

    /// Applies a command and returns what it did along with the resulting
    /// snapshot.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> Result<Applied, EngineError> {
        let name: &'static str = command.into();
        debug!(command = name, "Applying command");

        let placement = match command {
            Command::Place { row, column } => Some(self.place(row, column)?),
            Command::Reset => {
                self.reset();
                None
            }
        };

        Ok(Applied::new(placement, self.snapshot()))
    }

    /// Debug-build check that the engine invariants still hold.
    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            for violation in &violations {
                error!(invariant = %violation.description, "Engine invariant violated");
            }
        }
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Index of the player whose turn it is.
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The winner, once a line is complete.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref()
    }

    /// The line that decided the game, once won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns true if the grid is full with no winner.
    pub fn is_tie(&self) -> bool {
        self.is_tie
    }

    /// Coarse game phase.
    pub fn status(&self) -> GameStatus {
        match (&self.winner, self.is_tie) {
            (Some(player), _) => GameStatus::Won(player.clone()),
            (None, true) => GameStatus::Tied,
            (None, false) => GameStatus::InProgress,
        }
    }

    /// The grid, read-only.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Owner of the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinates are outside the
    /// grid.
    pub fn cell(&self, row: usize, column: usize) -> Result<Option<&Player>, EngineError> {
        self.grid
            .get(row, column)
            .map(Cell::player)
            .ok_or(EngineError::OutOfBounds {
                row,
                column,
                size: self.grid.size(),
            })
    }

    /// Configured players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Moves placed since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.grid.size(),
            self.grid.cells().iter().map(|cell| cell.player().cloned()).collect(),
            self.players.clone(),
            self.current_player_index,
            self.status(),
            self.winning_line,
            self.history.len(),
        )
    }
}

impl Default for GameEngine {
    /// A 3×3 game between X and O.
    fn default() -> Self {
        let config = GameConfig::default();
        Self::fresh(Grid::new(*config.size()), config.players().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::default()
    }

    fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
        for &(row, column) in moves {
            assert_eq!(engine.place(row, column), Ok(Placement::Placed));
        }
    }

    #[test]
    fn test_new_rejects_zero_size() {
        let err = GameEngine::new(0, vec![Player::new("X", "red")]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_new_rejects_oversized_grid() {
        let players = vec![Player::new("X", "red")];
        for size in [usize::MAX / 2, usize::MAX, 1025] {
            let err = GameEngine::new(size, players.clone()).unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
        }
        assert!(GameEngine::new(1024, players).is_ok());
    }

    #[test]
    fn test_default_matches_default_config() {
        let from_config = GameEngine::from_config(&GameConfig::default()).unwrap();
        assert_eq!(GameEngine::default(), from_config);
    }

    #[test]
    fn test_new_rejects_empty_players() {
        let err = GameEngine::new(3, Vec::new()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_default_engine() {
        let engine = engine();
        assert_eq!(engine.size(), 3);
        assert_eq!(engine.players().len(), 2);
        assert_eq!(engine.current_player().marker(), "X");
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_place_advances_turn() {
        let mut engine = engine();
        play(&mut engine, &[(1, 1)]);
        assert_eq!(engine.current_player_index(), 1);
        assert_eq!(engine.cell(1, 1).unwrap().map(|p| p.marker().as_str()), Some("X"));
        assert_eq!(engine.history(), &[Move::new(0, 1, 1)]);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut engine = engine();
        play(&mut engine, &[(0, 0)]);
        let before = engine.clone();
        assert_eq!(engine.place(0, 0), Ok(Placement::Ignored));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_out_of_bounds_leaves_state() {
        let mut engine = engine();
        play(&mut engine, &[(0, 0)]);
        let before = engine.clone();
        let err = engine.place(3, 0).unwrap_err();
        assert_eq!(
            err,
            EngineError::OutOfBounds {
                row: 3,
                column: 0,
                size: 3
            }
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_win_freezes_cursor() {
        let mut engine = engine();
        play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(engine.winner().map(|p| p.marker().as_str()), Some("X"));
        assert_eq!(engine.winning_line(), Some(Line::Row(0)));
        assert_eq!(engine.current_player_index(), 0);

        engine.advance_turn();
        assert_eq!(engine.current_player_index(), 0);

        assert_eq!(engine.place(2, 2), Ok(Placement::Ignored));
        assert!(engine.grid().is_empty_at(2, 2));
    }

    #[test]
    fn test_tie_still_advances_cursor() {
        let mut engine = engine();
        play(
            &mut engine,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );
        assert!(engine.is_tie());
        assert!(engine.winner().is_none());
        // X placed the ninth mark, so the cursor moved on to O.
        assert_eq!(engine.current_player_index(), 1);
    }

    #[test]
    fn test_three_players_rotate() {
        let players = vec![
            Player::new("A", "red"),
            Player::new("B", "green"),
            Player::new("C", "blue"),
        ];
        let mut engine = GameEngine::new(4, players).unwrap();
        let seen: Vec<usize> = [(0, 0), (1, 1), (2, 2), (3, 3)]
            .iter()
            .map(|&(row, column)| {
                let index = engine.current_player_index();
                engine.place(row, column).unwrap();
                index
            })
            .collect();
        assert_eq!(seen, vec![0, 1, 2, 0]);
        assert_eq!(engine.current_player_index(), 1);
    }

    #[test]
    fn test_single_player_single_cell() {
        let mut engine = GameEngine::new(1, vec![Player::new("S", "gold")]).unwrap();
        play(&mut engine, &[(0, 0)]);
        assert_eq!(engine.winner().map(|p| p.marker().as_str()), Some("S"));
        assert_eq!(engine.winning_line(), Some(Line::Row(0)));
        assert!(!engine.is_tie());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut engine = engine();
        play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        engine.reset();
        assert_eq!(engine, GameEngine::default());
    }

    #[test]
    fn test_apply_returns_snapshot() {
        let mut engine = engine();
        let applied = engine.apply(Command::Place { row: 2, column: 1 }).unwrap();
        assert_eq!(*applied.placement(), Some(Placement::Placed));
        let snapshot = applied.into_snapshot();
        assert_eq!(snapshot.cell(2, 1).map(|p| p.marker().as_str()), Some("X"));
        assert_eq!(*snapshot.move_count(), 1);
        assert_eq!(snapshot.current_player().map(|p| p.marker().as_str()), Some("O"));

        let applied = engine.apply(Command::Reset).unwrap();
        assert_eq!(*applied.placement(), None);
        let snapshot = applied.into_snapshot();
        assert!(snapshot.cells().iter().all(Option::is_none));
        assert_eq!(*snapshot.current_player_index(), 0);
    }

    #[test]
    fn test_apply_reports_ignored_placement() {
        let mut engine = engine();
        engine.apply(Command::Place { row: 0, column: 0 }).unwrap();
        let applied = engine.apply(Command::Place { row: 0, column: 0 }).unwrap();
        assert_eq!(*applied.placement(), Some(Placement::Ignored));
        assert_eq!(*applied.snapshot().move_count(), 1);
    }

    #[test]
    fn test_apply_propagates_out_of_bounds() {
        let mut engine = engine();
        let result = engine.apply(Command::Place { row: 0, column: 9 });
        assert!(matches!(result, Err(EngineError::OutOfBounds { .. })));
    }

    #[test]
    fn test_cell_query_out_of_bounds() {
        let engine = engine();
        assert!(engine.cell(0, 0).unwrap().is_none());
        assert!(engine.cell(3, 3).is_err());
    }
}
