//! Lines that can win a game.

use serde::{Deserialize, Serialize};

/// A full-length row, column or diagonal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Line {
    /// Row `i`, left to right.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `j`, top to bottom.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Every line of a `size × size` grid in scan order: rows, then columns,
    /// then the main diagonal, then the anti-diagonal.
    pub fn scan_order(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// The `(row, column)` coordinates covered by this line, starting from the
    /// cell the line is compared against.
    pub fn coordinates(self, size: usize) -> Vec<(usize, usize)> {
        match self {
            Line::Row(row) => (0..size).map(|column| (row, column)).collect(),
            Line::Column(column) => (0..size).map(|row| (row, column)).collect(),
            Line::MainDiagonal => (0..size).map(|i| (i, i)).collect(),
            Line::AntiDiagonal => (0..size).map(|i| (i, size - 1 - i)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order_three() {
        let lines: Vec<_> = Line::scan_order(3).collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], Line::Row(0));
        assert_eq!(lines[3], Line::Column(0));
        assert_eq!(lines[6], Line::MainDiagonal);
        assert_eq!(lines[7], Line::AntiDiagonal);
    }

    #[test]
    fn test_anti_diagonal_coordinates() {
        assert_eq!(
            Line::AntiDiagonal.coordinates(3),
            vec![(0, 2), (1, 1), (2, 0)]
        );
    }

    #[test]
    fn test_single_cell_lines() {
        for line in Line::scan_order(1) {
            assert_eq!(line.coordinates(1), vec![(0, 0)]);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Line::Row(2).to_string(), "row 2");
        assert_eq!(Line::AntiDiagonal.to_string(), "anti-diagonal");
    }
}
