//! Tie detection.

use super::super::Grid;
use super::win::Victory;
use tracing::instrument;

/// A full grid is a tie unless `victory` holds the result of the line scan.
///
/// Takes the scan result rather than rescanning so a caller that already ran
/// [`check_winner`](super::check_winner) pays for it once.
#[instrument(skip_all, fields(size = grid.size(), won = victory.is_some()))]
pub fn is_tie(grid: &Grid, victory: Option<&Victory>) -> bool {
    victory.is_none() && grid.is_full()
}
