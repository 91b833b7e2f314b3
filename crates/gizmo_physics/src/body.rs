//! Rigid body definitions for the 2D simulation

use gizmo_math::Vec2;
use serde::{Serialize, Deserialize};
use slotmap::new_key_type;

// Define generational key type for rigid bodies
new_key_type! {
    /// Key to a rigid body in the physics world
    ///
    /// Uses generational indexing to prevent the ABA problem where a handle
    /// could point to a reused slot. If a body is removed and its slot reused,
    /// old keys will return None instead of pointing to the wrong body.
    pub struct BodyKey;
}

/// Kinematic classification of a body
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    /// Immovable, infinite mass
    #[default]
    Static,
    /// Moved by gravity and collisions
    Dynamic,
}

/// Everything needed to create a body, in simulation space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDef {
    /// Static or dynamic
    pub body_type: BodyType,
    /// Initial position of the body origin (simulation space)
    pub position: Vec2,
    /// Free-form tag stored on the engine body
    pub user_data: u128,
}

impl BodyDef {
    /// Create a body definition at `position` with no rotation
    pub fn new(body_type: BodyType, position: Vec2) -> Self {
        Self {
            body_type,
            position,
            user_data: 0,
        }
    }

    /// Set the user data tag
    pub fn with_user_data(mut self, user_data: u128) -> Self {
        self.user_data = user_data;
        self
    }
}

/// Position, rotation and velocity of a body captured between steps
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySnapshot {
    pub position: Vec2,
    pub angle: f32,
    pub velocity: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_body_type_is_static() {
        assert_eq!(BodyType::default(), BodyType::Static);
    }

    #[test]
    fn test_body_def_builder() {
        let def = BodyDef::new(BodyType::Dynamic, Vec2::new(1.0, 2.0))
            .with_user_data(7);

        assert_eq!(def.body_type, BodyType::Dynamic);
        assert_eq!(def.position, Vec2::new(1.0, 2.0));
        assert_eq!(def.user_data, 7);
    }

    #[test]
    fn test_body_def_defaults() {
        let def = BodyDef::new(BodyType::Static, Vec2::ZERO);
        assert_eq!(def.user_data, 0);
    }
}
