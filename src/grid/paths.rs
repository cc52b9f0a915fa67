//! Lane path table derived from the static layout.
//!
//! For each lane: the ordered coordinates a barrier traverses from entry
//! (smallest row) to terminal (largest row). Built once after layout and
//! never mutated, even as cell values change underneath - this is a
//! position table, independent of what currently occupies each cell.

use ahash::AHashMap;

use crate::core::error::{EngineError, Result};
use crate::core::types::{Cell, Coord, Lane};
use crate::grid::Grid;

#[derive(Debug, Clone)]
pub struct LanePaths {
    paths: [Vec<Coord>; 4],
    starts: [Coord; 4],
    // reverse lookup: coordinate -> (lane, index within that lane's path)
    index: AHashMap<Coord, (Lane, usize)>,
}

impl LanePaths {
    /// Collects each lane's coordinates in top-to-bottom row order from a
    /// freshly built layout grid. Fails if any lane has no entry coordinate
    /// (incomplete geometry must be observable before any cycle runs).
    pub fn build(grid: &Grid) -> Result<Self> {
        let mut paths: [Vec<Coord>; 4] = Default::default();
        // row-major scan yields ascending rows per lane
        for coord in grid.coords() {
            if let Some(Cell::Lane(lane)) = grid.get(coord) {
                paths[lane.index()].push(coord);
            }
        }

        let mut starts = [Coord::new(0, 0); 4];
        for lane in Lane::ALL {
            match paths[lane.index()].first() {
                Some(&start) => starts[lane.index()] = start,
                None => {
                    return Err(EngineError::Layout(format!(
                        "no start coordinate derivable for lane {}",
                        lane.number()
                    )))
                }
            }
        }

        let mut index = AHashMap::new();
        for lane in Lane::ALL {
            for (i, &coord) in paths[lane.index()].iter().enumerate() {
                index.insert(coord, (lane, i));
            }
        }

        Ok(Self {
            paths,
            starts,
            index,
        })
    }

    /// Ordered entry-to-terminal coordinates for a lane
    pub fn path(&self, lane: Lane) -> &[Coord] {
        &self.paths[lane.index()]
    }

    /// The lane's entry coordinate (used by generation and placement)
    pub fn start(&self, lane: Lane) -> Coord {
        self.starts[lane.index()]
    }

    /// Which lane and path index a coordinate belongs to, if any
    pub fn locate(&self, coord: Coord) -> Option<(Lane, usize)> {
        self.index.get(&coord).copied()
    }

    /// The four lane columns in lane order (goal detection scans these)
    pub fn lane_columns(&self) -> [usize; 4] {
        let mut cols = [0usize; 4];
        for lane in Lane::ALL {
            cols[lane.index()] = self.starts[lane.index()].col;
        }
        cols
    }
}
