//! Cycle controller: composes the subsystems into one atomic simulation
//! step and owns all mutable simulation state.
//!
//! Step order is load-bearing. Barriers move before dots so an exiting
//! barrier's score is counted before a trap can end the run; dot generation
//! happens after movement so a fresh dot never moves on the cycle it
//! appears.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::{Action, Lane, StepResult};
use crate::grid::{build_layout, Grid, LanePaths};
use crate::simulation::{barriers, dots, generator, goal};

/// Controller state. The terminal state is absorbing: once terminated, no
/// further steps are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated,
}

/// The cycle simulation engine.
///
/// Single-threaded with no suspension points: one [`step`] call advances
/// exactly one cycle, synchronously. The seeded RNG is the only source of
/// non-determinism, so a fixed seed makes runs fully replayable. Callers
/// must not mutate the grid between steps.
///
/// [`step`]: Engine::step
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    pattern: Vec<Lane>,
    grid: Grid,
    // pristine static layout, used to restore vacated cells
    base: Grid,
    paths: LanePaths,
    cycle: u64,
    score: i64,
    phase: Phase,
    rng: ChaCha8Rng,
}

impl Engine {
    /// Deterministic construction from config. Fails with a layout error if
    /// the four lane start coordinates are not derivable, and with a config
    /// error on bad dimensions or generation pattern.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let pattern = config.pattern_lanes()?;
        let base = build_layout(config.rows, config.cols)?;
        let paths = LanePaths::build(&base)?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        tracing::info!(
            rows = config.rows,
            cols = config.cols,
            seed = config.seed,
            "engine initialized"
        );

        Ok(Self {
            grid: base.clone(),
            base,
            paths,
            cycle: 0,
            score: 0,
            phase: Phase::Running,
            rng,
            pattern,
            config,
        })
    }

    /// Advances the simulation by exactly one cycle with the supplied
    /// action. After termination this is a no-op reporting `game_over`.
    pub fn step(&mut self, action: Action) -> StepResult {
        if self.phase == Phase::Terminated {
            return StepResult {
                score_delta: 0,
                trapped: false,
                goal_placed: false,
                game_over: true,
            };
        }

        self.cycle += 1;
        let mut delta = 0i64;

        barriers::place_barriers(&mut self.grid, &self.paths, action);
        let exits = barriers::move_barriers(&mut self.grid, &self.paths);
        delta += exits as i64 * self.config.exit_reward;

        let trapped = dots::move_dots(&mut self.grid, &self.base, &mut self.rng);
        if trapped {
            delta -= self.config.trap_penalty;
            self.phase = Phase::Terminated;
            tracing::info!(cycle = self.cycle, score = self.score + delta, "dot trapped, run over");
        }

        generator::generate_dot(&mut self.grid, &self.paths, &self.pattern, self.cycle);

        let goal_placed = goal::check_goal_row(&mut self.grid, &self.paths);
        if goal_placed {
            delta += self.config.goal_reward;
        }

        self.score += delta;

        StepResult {
            score_delta: delta,
            trapped,
            goal_placed,
            game_over: self.phase == Phase::Terminated,
        }
    }

    /// Read-only grid export for external consumers (state keying, logging).
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Restores the exact initial layout, counters, and RNG stream.
    pub fn reset(&mut self) {
        self.grid = self.base.clone();
        self.cycle = 0;
        self.score = 0;
        self.phase = Phase::Running;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        tracing::info!("engine reset to initial layout");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scenario setup. The engine assumes exclusive
    /// ownership during [`step`]; do not mutate mid-step from another
    /// context.
    ///
    /// [`step`]: Engine::step
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn paths(&self) -> &LanePaths {
        &self.paths
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Terminated
    }
}
