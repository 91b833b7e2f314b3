//! Gizmo layer for the Gizmoball board
//!
//! - [`Color`] - Fill color of an entity
//! - [`ShapeKind`] / [`EntityShape`] - The closed set of gizmo kinds
//! - [`DrawableEntity`] - A body paired with how it looks
//! - [`BodyFactory`] - Builds bodies and entities from grid-unit descriptions
//! - [`Board`] - Physics world plus its entities
//! - [`Scene`] / [`GizmoTemplate`] - Loadable/saveable board layouts

mod color;
mod entity;
mod factory;
mod board;
mod scene;

pub use color::Color;
pub use entity::{DrawableEntity, EntityShape, ShapeKind};
pub use factory::{material_for, BodyFactory, FactoryError};
pub use board::{Board, EntityKey};
pub use scene::{GizmoTemplate, Scene, SceneError};

pub use gizmo_math::{Scale, ScaleError, Vec2};
pub use gizmo_physics::{BodyKey, BodyType, PhysicsConfig, PhysicsMaterial, PhysicsWorld};
