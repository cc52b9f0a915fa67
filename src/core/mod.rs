pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, RunConfig};
pub use error::{EngineError, Result};
pub use types::{Action, Cell, Coord, Lane, StepResult};
