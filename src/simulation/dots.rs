//! Dot movement with collision and trap resolution.
//!
//! Every dot must advance one adjacency step per cycle. All decisions are
//! made against the pre-move grid and applied together into a write
//! snapshot, so processing order never lets one dot's applied move create
//! or destroy legality for another in the same cycle.

use ahash::AHashSet;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::core::types::{Cell, Coord};
use crate::grid::Grid;

/// Advances every dot by one step. Returns whether at least one dot was
/// trapped (no legal destination); trapped dots stay in place.
///
/// Legal destinations are in-bounds 4-neighbors whose pre-move cell admits
/// a dot, excluding every original dot position and every destination
/// already claimed this cycle. Among legal destinations, any that strictly
/// increase the row index are preferred (toward the far end of the lane);
/// the pick within a set is uniform random.
///
/// Vacated cells are restored to the static layout value of that position,
/// taken from `base`.
pub fn move_dots(grid: &mut Grid, base: &Grid, rng: &mut ChaCha8Rng) -> bool {
    let mut dots = grid.positions_of(Cell::Dot);
    if dots.is_empty() {
        return false;
    }

    let origins: AHashSet<Coord> = dots.iter().copied().collect();
    // randomized processing order avoids positional bias in contention
    dots.shuffle(rng);

    let mut claimed: AHashSet<Coord> = AHashSet::new();
    let mut moves: Vec<(Coord, Coord)> = Vec::with_capacity(dots.len());
    let mut trapped = false;

    for &from in &dots {
        let legal: Vec<Coord> = grid
            .neighbors4(from)
            .into_iter()
            .filter(|&n| {
                grid.get(n).is_some_and(Cell::admits_dot)
                    && !origins.contains(&n)
                    && !claimed.contains(&n)
            })
            .collect();

        if legal.is_empty() {
            tracing::debug!(row = from.row, col = from.col, "dot trapped");
            trapped = true;
            // trapped dots claim their own cell so nothing moves onto them
            claimed.insert(from);
            moves.push((from, from));
            continue;
        }

        let forward: Vec<Coord> = legal.iter().copied().filter(|n| n.row > from.row).collect();
        let dest = forward
            .choose(rng)
            .or_else(|| legal.choose(rng))
            .copied()
            .unwrap_or(from);

        claimed.insert(dest);
        moves.push((from, dest));
    }

    // apply simultaneously: restore vacated cells, then place dots
    let mut next = grid.clone();
    for &(from, to) in &moves {
        if from != to {
            next.set(from, base.get(from).unwrap_or(Cell::Empty));
        }
    }
    for &(_, to) in &moves {
        next.set(to, Cell::Dot);
    }
    *grid = next;

    trapped
}
