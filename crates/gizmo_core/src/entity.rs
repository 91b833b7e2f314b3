//! Drawable entities
//!
//! A [`DrawableEntity`] pairs one physics body with what it looks like. It
//! holds the body's key, never the body itself: the physics world owns body
//! lifetimes, and a removed body simply makes the key stale.

use std::fmt;

use gizmo_math::Vec2;
use gizmo_physics::{trapezoid_vertices, triangle_vertices, BodyKey, BodyType};
use serde::{Serialize, Deserialize};

use crate::Color;

/// The closed set of gizmo kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Square,
    /// Static square with perfectly elastic contacts
    AdvanceSquare,
    /// Static square that swallows the energy of anything hitting it
    Absorber,
    Circle,
    Triangle,
    Trapezoid,
    /// Always-dynamic circle
    Ball,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::AdvanceSquare,
        ShapeKind::Absorber,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Trapezoid,
        ShapeKind::Ball,
    ];

    /// Tag stored in the physics body's user data
    pub fn tag(self) -> u128 {
        match self {
            ShapeKind::Square => 1,
            ShapeKind::AdvanceSquare => 2,
            ShapeKind::Absorber => 3,
            ShapeKind::Circle => 4,
            ShapeKind::Triangle => 5,
            ShapeKind::Trapezoid => 6,
            ShapeKind::Ball => 7,
        }
    }

    /// Inverse of [`Self::tag`]
    pub fn from_tag(tag: u128) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::AdvanceSquare => "advance_square",
            ShapeKind::Absorber => "absorber",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Ball => "ball",
        }
    }

    /// Circle and ball are sized by radius, everything else by side length
    pub fn is_circular(self) -> bool {
        matches!(self, ShapeKind::Circle | ShapeKind::Ball)
    }

    /// Whether the silhouette follows the body's rotation when drawn
    pub fn follows_rotation(self) -> bool {
        matches!(self, ShapeKind::Triangle | ShapeKind::Trapezoid)
    }

    /// Body type forced by the kind, if the caller does not get to choose
    pub fn fixed_body_type(self) -> Option<BodyType> {
        match self {
            ShapeKind::AdvanceSquare | ShapeKind::Absorber => Some(BodyType::Static),
            ShapeKind::Ball => Some(BodyType::Dynamic),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of a drawable entity, in simulation units
///
/// Box-like kinds carry their half side length, circular kinds their radius.
/// Either way the value is the distance from the body position to the edge
/// of the bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntityShape {
    Square { half_extent: f32 },
    AdvanceSquare { half_extent: f32 },
    Absorber { half_extent: f32 },
    Circle { radius: f32 },
    Triangle { half_extent: f32 },
    Trapezoid { half_extent: f32 },
    Ball { radius: f32 },
}

impl EntityShape {
    /// Build the shape for `kind` from its half-extent or radius
    pub fn new(kind: ShapeKind, extent: f32) -> Self {
        match kind {
            ShapeKind::Square => EntityShape::Square { half_extent: extent },
            ShapeKind::AdvanceSquare => EntityShape::AdvanceSquare { half_extent: extent },
            ShapeKind::Absorber => EntityShape::Absorber { half_extent: extent },
            ShapeKind::Circle => EntityShape::Circle { radius: extent },
            ShapeKind::Triangle => EntityShape::Triangle { half_extent: extent },
            ShapeKind::Trapezoid => EntityShape::Trapezoid { half_extent: extent },
            ShapeKind::Ball => EntityShape::Ball { radius: extent },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            EntityShape::Square { .. } => ShapeKind::Square,
            EntityShape::AdvanceSquare { .. } => ShapeKind::AdvanceSquare,
            EntityShape::Absorber { .. } => ShapeKind::Absorber,
            EntityShape::Circle { .. } => ShapeKind::Circle,
            EntityShape::Triangle { .. } => ShapeKind::Triangle,
            EntityShape::Trapezoid { .. } => ShapeKind::Trapezoid,
            EntityShape::Ball { .. } => ShapeKind::Ball,
        }
    }

    /// Half-extent or radius
    pub fn extent(&self) -> f32 {
        match *self {
            EntityShape::Square { half_extent }
            | EntityShape::AdvanceSquare { half_extent }
            | EntityShape::Absorber { half_extent }
            | EntityShape::Triangle { half_extent }
            | EntityShape::Trapezoid { half_extent } => half_extent,
            EntityShape::Circle { radius } | EntityShape::Ball { radius } => radius,
        }
    }

    /// Body-local polygon outline for polygonal kinds
    pub fn outline(&self) -> Option<Vec<Vec2>> {
        match *self {
            EntityShape::Triangle { half_extent } => Some(triangle_vertices(half_extent).to_vec()),
            EntityShape::Trapezoid { half_extent } => Some(trapezoid_vertices(half_extent).to_vec()),
            _ => None,
        }
    }
}

/// A gizmo as the renderer sees it
///
/// The body key is fixed at construction; there is no way to re-point an
/// entity at another body.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawableEntity {
    shape: EntityShape,
    body: BodyKey,
    color: Color,
    name: Option<String>,
}

impl DrawableEntity {
    /// Pair a shape with the body that drives it
    pub fn new(shape: EntityShape, body: BodyKey, color: Color) -> Self {
        Self {
            shape,
            body,
            color,
            name: None,
        }
    }

    /// Set the name of this entity (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn shape(&self) -> EntityShape {
        self.shape
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Half-extent or radius in simulation units
    #[inline]
    pub fn extent(&self) -> f32 {
        self.shape.extent()
    }

    /// Key of the physics body this entity mirrors
    #[inline]
    pub fn body(&self) -> BodyKey {
        self.body
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
