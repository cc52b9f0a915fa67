//! Cyclic dot generation at lane entries.

use crate::core::types::{Cell, Lane};
use crate::grid::{Grid, LanePaths};

/// Places at most one new dot for this cycle, picked deterministically from
/// the repeating lane pattern. If the target lane's entry cell is occupied
/// by anything other than its own marker, generation is silently skipped -
/// no queuing, no retry.
pub fn generate_dot(grid: &mut Grid, paths: &LanePaths, pattern: &[Lane], cycle: u64) {
    if cycle == 0 || pattern.is_empty() {
        return;
    }
    let index = ((cycle - 1) as usize) % pattern.len();
    let lane = pattern[index];
    let start = paths.start(lane);

    if grid.get(start) == Some(Cell::Lane(lane)) {
        grid.set(start, Cell::Dot);
        tracing::debug!(cycle, lane = lane.number(), "generated dot at lane entry");
    } else {
        tracing::debug!(
            cycle,
            lane = lane.number(),
            "lane entry occupied, generation skipped"
        );
    }
}
