//! Application systems
//!
//! The host loop is split into a simulation phase and a render phase that
//! never overlap.

mod render;
mod simulation;

pub use render::RenderSystem;
pub use simulation::{SimulationResult, SimulationSystem};
