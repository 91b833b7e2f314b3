//! Board construction utilities
//!
//! This module provides a declarative API for laying out gizmo boards.

mod scene_builder;

pub use scene_builder::SceneBuilder;
