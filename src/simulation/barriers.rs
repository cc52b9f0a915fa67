//! Barrier placement and lane traversal.
//!
//! Barriers enter at lane starts on command, advance one path step per
//! cycle, and score on exiting the far end. Moves are resolved against a
//! single pre-move snapshot and applied together, mirroring the dot
//! mover's simultaneity rule.

use crate::core::types::{Action, Cell, Lane};
use crate::grid::{Grid, LanePaths};

/// Places a barrier at each lane entry named by the action, skipping any
/// entry that is not currently holding its own lane marker. Placement is
/// never queued or retried.
pub fn place_barriers(grid: &mut Grid, paths: &LanePaths, action: Action) {
    for lane in Lane::ALL {
        if !action.places(lane) {
            continue;
        }
        let start = paths.start(lane);
        if grid.get(start) == Some(Cell::Lane(lane)) {
            grid.set(start, Cell::Barrier);
            tracing::debug!(lane = lane.number(), "barrier placed at lane entry");
        } else {
            tracing::debug!(lane = lane.number(), "lane entry occupied, placement skipped");
        }
    }
}

/// Advances every barrier one step along its lane path. Returns the number
/// of barriers that exited this cycle.
///
/// A barrier moves unless the next path cell holds a wall, another barrier,
/// or a goal block; a dot there is overwritten (an intercept). A barrier at
/// its path's last coordinate exits: the cell reverts to the lane marker
/// and one exit is counted. A barrier off every path is a defect condition:
/// it is warned about and left immovable, never a crash.
pub fn move_barriers(grid: &mut Grid, paths: &LanePaths) -> u64 {
    let barriers = grid.positions_of(Cell::Barrier);
    if barriers.is_empty() {
        return 0;
    }

    let mut exits = 0u64;
    let mut next = grid.clone();

    for pos in barriers {
        let Some((lane, index)) = paths.locate(pos) else {
            tracing::warn!(
                row = pos.row,
                col = pos.col,
                "barrier off every lane path, leaving in place"
            );
            continue;
        };
        let path = paths.path(lane);

        if index + 1 < path.len() {
            let dest = path[index + 1];
            match grid.get(dest) {
                // goal blocks are permanent, so they block barriers too
                Some(Cell::Wall) | Some(Cell::Barrier) | Some(Cell::GoalBlock) | None => {
                    tracing::debug!(lane = lane.number(), "barrier blocked, staying in place");
                }
                Some(occupant) => {
                    if occupant == Cell::Dot {
                        // Intercepted dots are silently removed with no score
                        // effect, matching the original rules; whether an
                        // intercept should score is an open question.
                        tracing::debug!(
                            lane = lane.number(),
                            row = dest.row,
                            "barrier intercepted dot"
                        );
                    }
                    next.set(dest, Cell::Barrier);
                    next.set(pos, Cell::Lane(lane));
                }
            }
        } else {
            next.set(pos, Cell::Lane(lane));
            exits += 1;
            tracing::debug!(lane = lane.number(), "barrier exited lane");
        }
    }

    *grid = next;
    exits
}
