//! 2D Physics boundary for the gizmoball sandbox
//!
//! The simulation itself is rapier2d. This crate narrows it down to what the
//! sandbox needs:
//! - Generational body keys that detect use after removal
//! - Body definitions (static or dynamic, position, angle, tag)
//! - Fixture geometry (squares, circles, convex polygons)
//! - Fixture materials (density, friction, restitution)

pub mod body;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyDef, BodyKey, BodySnapshot, BodyType};
pub use material::{CombineRule, PhysicsMaterial};
pub use shapes::{trapezoid_vertices, triangle_vertices, ShapeDef};
pub use world::{Fixture, PhysicsConfig, PhysicsError, PhysicsWorld};
