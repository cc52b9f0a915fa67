//! Property tests for simultaneous-move resolution
//!
//! The dot mover is the one place where a concurrency-like correctness bug
//! (double-claimed destination cells, cells left as dots after the dot
//! moved away) is plausible, so its invariants are checked over randomized
//! boards and seeds rather than hand-picked scenarios.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dot_circuit::core::config::EngineConfig;
use dot_circuit::core::types::{Action, Cell, Coord, Lane};
use dot_circuit::grid::{build_layout, Grid};
use dot_circuit::simulation::dots::move_dots;
use dot_circuit::simulation::Engine;

const ROWS: usize = 10;
const COLS: usize = 10;

/// Interior coordinates as a proptest index space
fn interior_coord() -> impl Strategy<Value = Coord> {
    ((1..ROWS - 1), (1..COLS - 1)).prop_map(|(row, col)| Coord::new(row, col))
}

fn seeded_board(dots: &[Coord]) -> (Grid, Grid) {
    let base = build_layout(ROWS, COLS).unwrap();
    let mut grid = base.clone();
    for &coord in dots {
        // only cells that admit a dot can hold one; skip the rest
        if grid.get(coord).is_some_and(Cell::admits_dot) {
            grid.set(coord, Cell::Dot);
        }
    }
    (grid, base)
}

proptest! {
    /// Movement never changes the total dot count, whatever the contention.
    #[test]
    fn movement_conserves_dot_count(
        dots in prop::collection::vec(interior_coord(), 0..25),
        seed in any::<u64>(),
    ) {
        let (mut grid, base) = seeded_board(&dots);
        let before = grid.count_of(Cell::Dot);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        move_dots(&mut grid, &base, &mut rng);

        prop_assert_eq!(grid.count_of(Cell::Dot), before);
    }

    /// Every dot ends on a cell whose static value admits dots, and every
    /// cell a dot vacated carries its static value again - no cell is left
    /// as a dot after the dot conceptually moved away.
    #[test]
    fn vacated_cells_return_to_their_static_value(
        dots in prop::collection::vec(interior_coord(), 1..20),
        seed in any::<u64>(),
    ) {
        let (mut grid, base) = seeded_board(&dots);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        move_dots(&mut grid, &base, &mut rng);

        for coord in base.coords() {
            match grid.get(coord) {
                Some(Cell::Dot) => {
                    prop_assert!(base.get(coord).is_some_and(Cell::admits_dot));
                }
                cell => {
                    // anything that is not a dot matches the static layout
                    prop_assert_eq!(cell, base.get(coord));
                }
            }
        }
    }

    /// Each dot moves by at most one adjacency step per cycle: the moved
    /// multiset is reachable, i.e. total displacement is bounded by one
    /// step per dot.
    #[test]
    fn dots_move_at_most_one_step(
        dots in prop::collection::vec(interior_coord(), 1..15),
        seed in any::<u64>(),
    ) {
        let (mut grid, base) = seeded_board(&dots);
        let before = grid.positions_of(Cell::Dot);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        move_dots(&mut grid, &base, &mut rng);

        let after = grid.positions_of(Cell::Dot);
        prop_assert_eq!(before.len(), after.len());
        // every post-move dot is a pre-move dot position or adjacent to one
        for &dest in &after {
            let reachable = before.iter().any(|&src| {
                src.row.abs_diff(dest.row) + src.col.abs_diff(dest.col) <= 1
            });
            prop_assert!(reachable, "dot at {:?} teleported", dest);
        }
    }

    /// Whole-step bookkeeping holds for arbitrary action scripts: the score
    /// is always the running sum of step deltas, and termination is
    /// absorbing.
    #[test]
    fn step_accounting_is_consistent(
        actions in prop::collection::vec(0u8..16, 1..60),
        seed in any::<u64>(),
    ) {
        let config = EngineConfig { seed, ..Default::default() };
        let mut engine = Engine::new(config).unwrap();
        let mut total = 0i64;

        for &bits in &actions {
            let result = engine.step(Action::from_nibble(bits));
            total += result.score_delta;
            prop_assert_eq!(engine.score(), total);
            if result.game_over {
                let after = engine.step(Action::NONE);
                prop_assert!(after.game_over);
                prop_assert_eq!(after.score_delta, 0);
                prop_assert_eq!(engine.score(), total);
                break;
            }
        }
    }

    /// The lane path table is static position data: stepping never changes
    /// it, and entity scans always agree with the grid contents.
    #[test]
    fn paths_survive_arbitrary_steps(
        actions in prop::collection::vec(0u8..16, 1..30),
        seed in any::<u64>(),
    ) {
        let config = EngineConfig { seed, ..Default::default() };
        let mut engine = Engine::new(config).unwrap();
        let starts: Vec<Coord> = Lane::ALL
            .iter()
            .map(|&l| engine.paths().start(l))
            .collect();

        for &bits in &actions {
            if engine.step(Action::from_nibble(bits)).game_over {
                break;
            }
        }

        let paths_after: Vec<Coord> = Lane::ALL
            .iter()
            .map(|&l| engine.paths().start(l))
            .collect();
        prop_assert_eq!(starts, paths_after);
    }
}
