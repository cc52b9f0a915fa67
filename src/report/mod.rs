//! Status and cycle-log persistence for external collaborators.
//!
//! The engine owns no wire format; these artifacts are what the host run
//! loop publishes about it. Status is a whole-file JSON snapshot rewritten
//! each cycle; the cycle log is an append-only JSON-lines file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::Cell;
use crate::simulation::Engine;

/// Point-in-time summary of a run
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub cycle: u64,
    pub score: i64,
    pub game_over: bool,
    pub dot_count: usize,
    pub barrier_count: usize,
}

impl StatusReport {
    pub fn capture(engine: &Engine) -> Self {
        let grid = engine.grid();
        Self {
            cycle: engine.cycle(),
            score: engine.score(),
            game_over: engine.game_over(),
            dot_count: grid.count_of(Cell::Dot),
            barrier_count: grid.count_of(Cell::Barrier),
        }
    }
}

/// One cycle's worth of log data, appended as a JSON line
#[derive(Debug, Clone, Serialize)]
pub struct CycleLog {
    pub cycle: u64,
    pub state_key: u64,
    pub action: String,
    pub score_delta: i64,
    pub trapped: bool,
    pub goal_placed: bool,
    pub success: bool,
    pub score: i64,
    pub game_over: bool,
}

/// Rewrites the status file with the current snapshot.
pub fn write_status(path: &Path, status: &StatusReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(file, status)?;
    Ok(())
}

/// Appends one log entry as a JSON line.
pub fn append_log(path: &Path, entry: &CycleLog) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut line = serde_json::to_string(entry)?;
    line.push('\n');
    file.write_all(line.as_bytes())?;
    Ok(())
}
