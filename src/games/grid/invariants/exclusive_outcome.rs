//! Exclusive outcome invariant: a game is never both won and tied.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: winner and tie flag are never both set, a tie implies a full
/// grid, and a winner always comes with its winning line.
pub struct ExclusiveOutcomeInvariant;

impl Invariant<GameEngine> for ExclusiveOutcomeInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let won = engine.winner().is_some();
        let tied = engine.is_tie();

        !(won && tied)
            && (!tied || engine.grid().is_full())
            && won == engine.winning_line().is_some()
    }

    fn description() -> &'static str {
        "Winner and tie are mutually exclusive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_engine_holds() {
        assert!(ExclusiveOutcomeInvariant::holds(&GameEngine::default()));
    }

    #[test]
    fn test_tie_on_partial_grid_violates() {
        let mut engine = GameEngine::default();
        engine.is_tie = true;
        assert!(!ExclusiveOutcomeInvariant::holds(&engine));
    }

    #[test]
    fn test_winner_without_line_violates() {
        let mut engine = GameEngine::default();
        engine.winner = Some(engine.players[0].clone());
        assert!(!ExclusiveOutcomeInvariant::holds(&engine));
    }
}
