//! Win detection for square grids.

use super::super::{Grid, Line, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line and the player who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Victory {
    /// The winning player.
    player: Player,
    /// The line that won.
    line: Line,
}

/// Returns the player holding every cell of `line`, if there is one.
///
/// A line is compared against its first cell. An empty first cell means the
/// line cannot be uniform, so an all-empty line is never a win.
pub fn line_owner(grid: &Grid, line: Line) -> Option<&Player> {
    let mut cells = line
        .coordinates(grid.size())
        .into_iter()
        .map(|(row, column)| grid.get(row, column));
    let first = cells.next()??.player()?;
    cells
        .all(|cell| cell.and_then(|cell| cell.player()) == Some(first))
        .then_some(first)
}

/// Scans rows, then columns, then both diagonals and returns the first
/// uniform line.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn check_winner(grid: &Grid) -> Option<Victory> {
    Line::scan_order(grid.size()).find_map(|line| {
        line_owner(grid, line).map(|player| Victory::new(player.clone(), line))
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::Cell;
    use super::*;

    fn x() -> Player {
        Player::new("X", "red")
    }

    fn o() -> Player {
        Player::new("O", "blue")
    }

    fn grid_with(size: usize, marks: &[(usize, usize, Player)]) -> Grid {
        let mut grid = Grid::new(size);
        for (row, column, player) in marks {
            grid.set(*row, *column, Cell::Occupied(player.clone()))
                .unwrap();
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(check_winner(&Grid::new(3)), None);
    }

    #[test]
    fn test_empty_line_is_not_owned() {
        let grid = grid_with(3, &[(1, 1, x())]);
        assert_eq!(line_owner(&grid, Line::Row(0)), None);
        assert_eq!(line_owner(&grid, Line::Column(0)), None);
    }

    #[test]
    fn test_winner_top_row() {
        let grid = grid_with(3, &[(0, 0, x()), (0, 1, x()), (0, 2, x())]);
        assert_eq!(check_winner(&grid), Some(Victory::new(x(), Line::Row(0))));
    }

    #[test]
    fn test_winner_column() {
        let grid = grid_with(3, &[(0, 1, o()), (1, 1, o()), (2, 1, o())]);
        assert_eq!(
            check_winner(&grid),
            Some(Victory::new(o(), Line::Column(1)))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let grid = grid_with(3, &[(0, 2, o()), (1, 1, o()), (2, 0, o())]);
        assert_eq!(
            check_winner(&grid),
            Some(Victory::new(o(), Line::AntiDiagonal))
        );
    }

    #[test]
    fn test_row_reported_before_column() {
        let grid = grid_with(
            3,
            &[(0, 0, x()), (0, 1, x()), (0, 2, x()), (1, 0, x()), (2, 0, x())],
        );
        assert_eq!(check_winner(&grid), Some(Victory::new(x(), Line::Row(0))));
    }

    #[test]
    fn test_mixed_line_is_not_owned() {
        let grid = grid_with(3, &[(0, 0, x()), (0, 1, o()), (0, 2, x())]);
        assert_eq!(line_owner(&grid, Line::Row(0)), None);
    }

    #[test]
    fn test_four_by_four_main_diagonal() {
        let marks: Vec<_> = (0..4).map(|i| (i, i, x())).collect();
        let grid = grid_with(4, &marks);
        assert_eq!(
            check_winner(&grid),
            Some(Victory::new(x(), Line::MainDiagonal))
        );
    }

    #[test]
    fn test_equal_players_share_lines() {
        let twin = Player::new("X", "red");
        let grid = grid_with(2, &[(0, 0, x()), (0, 1, twin)]);
        assert_eq!(check_winner(&grid), Some(Victory::new(x(), Line::Row(0))));
    }
}
