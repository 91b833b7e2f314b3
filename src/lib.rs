//! Gizmoball sandbox
//!
//! Host-side pieces of the sandbox: configuration, the scene builder and
//! the simulation and render systems. The board itself lives in
//! `gizmo_core`.

pub mod config;
pub mod scene;
pub mod systems;
