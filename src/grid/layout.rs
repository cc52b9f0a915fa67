//! Static board construction: wall ring, lane columns, siding columns.
//!
//! The layout is pure position data. Cell values change as the simulation
//! runs, but the geometry produced here never does; the engine keeps a
//! pristine copy for restoring vacated cells.

use crate::core::error::{EngineError, Result};
use crate::core::types::{Cell, Coord, Lane};
use crate::grid::Grid;

/// Column of the leftmost lane for a board this wide
pub fn lane_anchor_col(cols: usize) -> usize {
    cols / 2 - 2
}

/// Builds the static board: outer ring of walls, four lane columns centered
/// horizontally and numbered left to right, and one empty siding column on
/// each side of the lane block over a contiguous interior row range.
///
/// Fails with a layout error if the four lane columns do not fit inside the
/// walls, so the caller observes incomplete lane geometry before any cycle
/// runs.
pub fn build_layout(rows: usize, cols: usize) -> Result<Grid> {
    if rows < 3 || cols < 7 {
        return Err(EngineError::Layout(format!(
            "grid {rows}x{cols} cannot fit walls, 4 lanes and sidings"
        )));
    }

    let mut grid = Grid::filled(rows, cols, Cell::Empty);

    // Wall ring
    for row in 0..rows {
        grid.set(Coord::new(row, 0), Cell::Wall);
        grid.set(Coord::new(row, cols - 1), Cell::Wall);
    }
    for col in 0..cols {
        grid.set(Coord::new(0, col), Cell::Wall);
        grid.set(Coord::new(rows - 1, col), Cell::Wall);
    }

    // Four lane columns, full interior row range
    let anchor = lane_anchor_col(cols);
    for lane in Lane::ALL {
        let col = anchor + lane.index();
        if col == 0 || col >= cols - 1 {
            return Err(EngineError::Layout(format!(
                "lane {} column {col} falls on or outside the walls",
                lane.number()
            )));
        }
        for row in 1..rows - 1 {
            grid.set(Coord::new(row, col), Cell::Lane(lane));
        }
    }

    // Siding columns flanking the lane block. They are ordinary empties with
    // no special legality rule; writing them keeps the layout explicit even
    // where the cell is already Empty.
    let siding_rows = 3..rows.saturating_sub(3);
    for col in [anchor.wrapping_sub(1), anchor + 4] {
        if col == 0 || col >= cols - 1 {
            continue;
        }
        for row in siding_rows.clone() {
            grid.set(Coord::new(row, col), Cell::Empty);
        }
    }

    Ok(grid)
}
