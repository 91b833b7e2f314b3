//! Body factory
//!
//! Turns gizmo descriptions in real-world (grid) units into a physics body
//! with one fixture, plus the [`DrawableEntity`] that renders it.
//!
//! Every kind is placed the same way: the body sits at
//! `to_sim(origin) + extent`, so `origin` is the top-left corner of the
//! shape's bounding box and `extent` is its half side length or radius.

use gizmo_math::{Scale, Vec2};
use gizmo_physics::{BodyDef, BodyType, PhysicsError, PhysicsMaterial, PhysicsWorld, ShapeDef};
use log::debug;
use thiserror::Error;

use crate::{Color, DrawableEntity, EntityShape, ShapeKind};

/// Errors from building a gizmo
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FactoryError {
    /// Size must be finite and strictly positive
    #[error("invalid size {size} for {kind}")]
    InvalidSize { kind: ShapeKind, size: f32 },
    /// Origin must be finite
    #[error("invalid origin {origin:?} for {kind}")]
    InvalidOrigin { kind: ShapeKind, origin: Vec2 },
    #[error("physics error: {0}")]
    Physics(#[from] PhysicsError),
}

/// Material a kind gets for the given body type
pub fn material_for(kind: ShapeKind, body_type: BodyType) -> PhysicsMaterial {
    match kind {
        ShapeKind::Absorber => PhysicsMaterial::ABSORBER,
        _ => PhysicsMaterial::elastic(body_type),
    }
}

/// Creates gizmos in a physics world
///
/// Borrows the world for as long as it lives, so gizmos can be created in
/// a batch:
///
/// ```ignore
/// let mut factory = BodyFactory::new(&mut world, Scale::default());
/// let floor = factory.absorber(Vec2::new(0.0, 19.0), 20.0, Color::GRAY)?;
/// let ball = factory.ball(Vec2::new(10.0, 0.0), 0.5, Color::BLUE)?;
/// ```
pub struct BodyFactory<'w> {
    world: &'w mut PhysicsWorld,
    scale: Scale,
}

impl<'w> BodyFactory<'w> {
    pub fn new(world: &'w mut PhysicsWorld, scale: Scale) -> Self {
        Self { world, scale }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Square of side `size`, static or dynamic
    pub fn square(
        &mut self,
        origin: Vec2,
        size: f32,
        body_type: BodyType,
        color: Color,
    ) -> Result<DrawableEntity, FactoryError> {
        self.build(ShapeKind::Square, origin, size, body_type, color)
    }

    /// Static square with elastic contacts
    pub fn advance_square(
        &mut self,
        origin: Vec2,
        size: f32,
        color: Color,
    ) -> Result<DrawableEntity, FactoryError> {
        self.build(ShapeKind::AdvanceSquare, origin, size, BodyType::Static, color)
    }

    /// Static square that kills the bounce of anything touching it
    pub fn absorber(
        &mut self,
        origin: Vec2,
        size: f32,
        color: Color,
    ) -> Result<DrawableEntity, FactoryError> {
        self.build(ShapeKind::Absorber, origin, size, BodyType::Static, color)
    }

    pub fn circle(
        &mut self,
        origin: Vec2,
        radius: f32,
        body_type: BodyType,
        color: Color,
    ) -> Result<DrawableEntity, FactoryError> {
        self.build(ShapeKind::Circle, origin, radius, body_type, color)
    }

    /// Right triangle with its right angle at the top-left corner
    pub fn triangle(
        &mut self,
        origin: Vec2,
        size: f32,
        body_type: BodyType,
        color: Color,
    ) -> Result<DrawableEntity, FactoryError> {
        self.build(ShapeKind::Triangle, origin, size, body_type, color)
    }

    /// Trapezoid with the long edge on top
    pub fn trapezoid(
        &mut self,
        origin: Vec2,
        size: f32,
        body_type: BodyType,
        color: Color,
    ) -> Result<DrawableEntity, FactoryError> {
        self.build(ShapeKind::Trapezoid, origin, size, body_type, color)
    }

    /// Dynamic ball
    pub fn ball(
        &mut self,
        origin: Vec2,
        radius: f32,
        color: Color,
    ) -> Result<DrawableEntity, FactoryError> {
        self.build(ShapeKind::Ball, origin, radius, BodyType::Dynamic, color)
    }

    /// Create any kind by tag
    ///
    /// Kinds with a fixed body type ignore `body_type`.
    pub fn create(
        &mut self,
        kind: ShapeKind,
        origin: Vec2,
        size: f32,
        body_type: BodyType,
        color: Color,
    ) -> Result<DrawableEntity, FactoryError> {
        self.build(kind, origin, size, body_type, color)
    }

    fn build(
        &mut self,
        kind: ShapeKind,
        origin: Vec2,
        size: f32,
        requested: BodyType,
        color: Color,
    ) -> Result<DrawableEntity, FactoryError> {
        if !origin.is_finite() {
            return Err(FactoryError::InvalidOrigin { kind, origin });
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(FactoryError::InvalidSize { kind, size });
        }

        let extent = if kind.is_circular() {
            self.scale.to_sim_space(size)
        } else {
            self.scale.to_sim_space(size / 2.0)
        };
        let shape = match kind {
            ShapeKind::Square | ShapeKind::AdvanceSquare | ShapeKind::Absorber => {
                ShapeDef::square(extent)
            }
            ShapeKind::Circle | ShapeKind::Ball => ShapeDef::circle(extent),
            ShapeKind::Triangle => ShapeDef::triangle(extent),
            ShapeKind::Trapezoid => ShapeDef::trapezoid(extent),
        };
        // Too small to survive the unit conversion
        if !shape.is_valid() {
            return Err(FactoryError::InvalidSize { kind, size });
        }

        let body_type = kind.fixed_body_type().unwrap_or(requested);
        let position = self.scale.to_sim_point(origin) + extent;
        let key = self
            .world
            .create_body(BodyDef::new(body_type, position).with_user_data(kind.tag()));

        if let Err(err) = self.world.create_fixture(key, shape, material_for(kind, body_type)) {
            self.world.remove_body(key);
            return Err(err.into());
        }

        debug!(
            "created {} {:?} at {:?} (extent {}) as {:?}",
            kind, body_type, position, extent, key
        );
        Ok(DrawableEntity::new(EntityShape::new(kind, extent), key, color))
    }
}
