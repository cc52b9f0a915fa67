//! Grid-state keys for the experience history.

use std::hash::{Hash, Hasher};

use ahash::AHasher;

use crate::core::types::Cell;
use crate::grid::Grid;

/// Hashed grid-state identifier
pub type StateKey = u64;

/// Keys a grid by its dot and barrier positions.
///
/// Positions come from the row-major scan, so the sequences are already in
/// a canonical sorted order and two grids with the same entity placement
/// always produce the same key regardless of how they got there.
pub fn state_key(grid: &Grid) -> StateKey {
    let dots = grid.positions_of(Cell::Dot);
    let barriers = grid.positions_of(Cell::Barrier);

    let mut hasher = AHasher::default();
    dots.hash(&mut hasher);
    barriers.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Coord;
    use crate::grid::layout::build_layout;

    #[test]
    fn identical_placements_share_a_key() {
        let base = build_layout(10, 10).unwrap();
        let mut a = base.clone();
        let mut b = base.clone();
        a.set(Coord::new(4, 4), Cell::Dot);
        a.set(Coord::new(2, 5), Cell::Barrier);
        b.set(Coord::new(2, 5), Cell::Barrier);
        b.set(Coord::new(4, 4), Cell::Dot);
        assert_eq!(state_key(&a), state_key(&b));
    }

    #[test]
    fn different_placements_diverge() {
        let base = build_layout(10, 10).unwrap();
        let mut a = base.clone();
        let mut b = base.clone();
        a.set(Coord::new(4, 4), Cell::Dot);
        b.set(Coord::new(4, 5), Cell::Dot);
        assert_ne!(state_key(&a), state_key(&b));
        // a dot and a barrier at the same coordinate are different states
        let mut c = base.clone();
        c.set(Coord::new(4, 4), Cell::Barrier);
        assert_ne!(state_key(&a), state_key(&c));
    }
}
