//! Simulation configuration with documented constants
//!
//! All tunable values are collected here with explanations of their purpose.
//! Engine geometry and scoring live in [`EngineConfig`]; run-loop concerns
//! (cycle budget, exploration, reporting) live in [`RunConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::{EngineError, Result};
use crate::core::types::Lane;

/// Configuration for the cycle simulation engine
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Total grid rows including the wall ring. Minimum 3 (one interior row).
    pub rows: usize,

    /// Total grid columns including the wall ring. Minimum 7: two walls,
    /// four lane columns, and room for the centering arithmetic.
    pub cols: usize,

    /// Cyclic dot-generation pattern, as lane numbers 1-4.
    ///
    /// Cycle `n` generates on `pattern[(n - 1) % pattern.len()]`. The default
    /// sweeps the inner lanes more often than the outer ones.
    pub pattern: Vec<u8>,

    /// Seed for the engine RNG. Movement order and tie-breaks are the only
    /// non-determinism; a fixed seed makes runs fully replayable.
    pub seed: u64,

    /// Score awarded per barrier that exits its lane
    pub exit_reward: i64,

    /// Score awarded when a goal row is completed
    pub goal_reward: i64,

    /// Score deducted when a dot is trapped (the run also ends)
    pub trap_penalty: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            pattern: vec![2, 3, 4, 3, 2, 1, 2],
            seed: 12345,
            exit_reward: 1,
            goal_reward: 5,
            trap_penalty: 1,
        }
    }
}

impl EngineConfig {
    /// Checks dimensions and the generation pattern before any grid is built.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 3 {
            return Err(EngineError::InvalidConfig(format!(
                "rows = {} but at least 3 are required (walls + one interior row)",
                self.rows
            )));
        }
        if self.cols < 7 {
            return Err(EngineError::InvalidConfig(format!(
                "cols = {} but at least 7 are required (walls + 4 lanes + sidings)",
                self.cols
            )));
        }
        if self.pattern.is_empty() {
            return Err(EngineError::InvalidConfig(
                "dot generation pattern must not be empty".into(),
            ));
        }
        for &n in &self.pattern {
            if Lane::from_number(n).is_none() {
                return Err(EngineError::InvalidConfig(format!(
                    "pattern entry {n} is not a lane number (1-4)"
                )));
            }
        }
        Ok(())
    }

    /// The generation pattern resolved to lanes. Call after [`validate`].
    ///
    /// [`validate`]: EngineConfig::validate
    pub fn pattern_lanes(&self) -> Result<Vec<Lane>> {
        self.pattern
            .iter()
            .map(|&n| {
                Lane::from_number(n).ok_or_else(|| {
                    EngineError::InvalidConfig(format!("pattern entry {n} is not a lane number"))
                })
            })
            .collect()
    }
}

/// Configuration for the run loop around the engine
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub engine: EngineConfig,

    /// Hard stop after this many cycles even if the run survives
    pub max_cycles: u64,

    /// Epsilon for the epsilon-greedy policy (0.0 = always exploit)
    pub exploration_rate: f64,

    /// Render the board every N cycles (and always on game over)
    pub render_every: u64,

    /// Directory for status.json / log.json; no reporting when unset
    pub report_dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            max_cycles: 1000,
            exploration_rate: 0.1,
            render_every: 5,
            report_dir: None,
        }
    }
}

impl RunConfig {
    /// Loads a run configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RunConfig = toml::from_str(&content)?;
        config.engine.validate()?;
        Ok(config)
    }
}
