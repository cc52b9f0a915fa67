//! Decision layer external to the engine core.
//!
//! The engine never learns and never chooses actions; this module does
//! both, consuming only the engine's read-only exports. History is an
//! explicit value owned by the caller and passed by reference into each
//! decision call, never ambient process state.

pub mod decision;
pub mod history;
pub mod state;

pub use decision::choose_action;
pub use history::{ExperienceHistory, Outcome};
pub use state::{state_key, StateKey};
