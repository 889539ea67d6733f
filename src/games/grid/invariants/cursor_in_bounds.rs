//! Turn cursor invariant.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the turn cursor indexes a configured player, and once a game
/// is won the cursor rests on the winner.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let Some(current) = engine.players().get(engine.current_player_index()) else {
            return false;
        };

        engine.winner().is_none_or(|winner| winner == current)
    }

    fn description() -> &'static str {
        "Turn cursor indexes a valid player and stays on the winner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_past_end_violates() {
        let mut engine = GameEngine::default();
        engine.current_player_index = 2;
        assert!(!CursorInBoundsInvariant::holds(&engine));
    }

    #[test]
    fn test_cursor_on_loser_violates() {
        let mut engine = GameEngine::default();
        engine.winner = Some(engine.players[1].clone());
        assert!(!CursorInBoundsInvariant::holds(&engine));
    }

    #[test]
    fn test_rotation_holds() {
        let mut engine = GameEngine::default();
        for (row, column) in [(0, 0), (0, 1), (0, 2)] {
            engine.place(row, column).unwrap();
            assert!(CursorInBoundsInvariant::holds(&engine));
        }
    }
}
