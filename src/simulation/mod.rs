pub mod barriers;
pub mod dots;
pub mod engine;
pub mod generator;
pub mod goal;

pub use engine::{Engine, Phase};
