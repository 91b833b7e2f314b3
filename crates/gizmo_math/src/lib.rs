//! 2D Mathematics Library
//!
//! Vector and unit-conversion types for the gizmoball sandbox.
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`Scale`] - conversion between real-world, simulation and screen space

mod vec2;
pub mod units;

pub use vec2::Vec2;
pub use units::{Scale, ScaleError};
