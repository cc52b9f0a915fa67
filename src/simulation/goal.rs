//! Goal row detection: four dots across all lanes become a permanent block.

use crate::core::types::{Cell, Coord};
use crate::grid::{Grid, LanePaths};

/// Scans interior rows top to bottom; the first row holding a dot in every
/// lane column is converted to goal blocks and scanning stops, so at most
/// one row converts per cycle. Returns whether a conversion occurred.
///
/// Goal blocks are permanent: nothing in the engine ever reads, moves, or
/// clears them again.
pub fn check_goal_row(grid: &mut Grid, paths: &LanePaths) -> bool {
    let lane_cols = paths.lane_columns();
    for row in 1..grid.rows().saturating_sub(1) {
        let complete = lane_cols
            .iter()
            .all(|&col| grid.get(Coord::new(row, col)) == Some(Cell::Dot));
        if complete {
            for &col in &lane_cols {
                grid.set(Coord::new(row, col), Cell::GoalBlock);
            }
            tracing::info!(row, "goal row completed, placed permanent block");
            return true;
        }
    }
    false
}
