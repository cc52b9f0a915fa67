//! Dot Circuit - Discrete-Time Dot Circulation Simulation

pub mod core;
pub mod grid;
pub mod policy;
pub mod report;
pub mod simulation;
