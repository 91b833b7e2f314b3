//! Fixture geometry in simulation space
//!
//! Shapes are body-local: the body position is the shape's origin.

use gizmo_math::Vec2;

/// Smallest polygon area accepted as a real shape
const MIN_POLYGON_AREA: f32 = 1e-8;

/// Geometry of a single fixture
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDef {
    /// Axis-aligned square described by its half side length
    Box { half_extent: f32 },
    /// Circle described by its radius
    Circle { radius: f32 },
    /// Convex polygon, vertices in body-local coordinates
    Polygon { vertices: Vec<Vec2> },
}

/// Right isosceles triangle with half-extent `r`
///
/// The right angle sits at `(-r, -r)`.
pub fn triangle_vertices(r: f32) -> [Vec2; 3] {
    [Vec2::new(-r, -r), Vec2::new(-r, r), Vec2::new(r, -r)]
}

/// Isosceles trapezoid with half-extent `r`
///
/// The edge at `y = -r` spans the full `2r`, the edge at `y = r` spans `r`.
pub fn trapezoid_vertices(r: f32) -> [Vec2; 4] {
    [
        Vec2::new(-r, -r),
        Vec2::new(-r / 2.0, r),
        Vec2::new(r / 2.0, r),
        Vec2::new(r, -r),
    ]
}

impl ShapeDef {
    /// A square with the given half side length
    pub fn square(half_extent: f32) -> Self {
        ShapeDef::Box { half_extent }
    }

    pub fn circle(radius: f32) -> Self {
        ShapeDef::Circle { radius }
    }

    /// See [`triangle_vertices`]
    pub fn triangle(half_extent: f32) -> Self {
        ShapeDef::Polygon {
            vertices: triangle_vertices(half_extent).to_vec(),
        }
    }

    /// See [`trapezoid_vertices`]
    pub fn trapezoid(half_extent: f32) -> Self {
        ShapeDef::Polygon {
            vertices: trapezoid_vertices(half_extent).to_vec(),
        }
    }

    /// Polygon vertices, if this is a polygon
    pub fn vertices(&self) -> Option<&[Vec2]> {
        match self {
            ShapeDef::Polygon { vertices } => Some(vertices),
            _ => None,
        }
    }

    /// True if the shape has finite, positive dimensions
    pub fn is_valid(&self) -> bool {
        match self {
            ShapeDef::Box { half_extent } => half_extent.is_finite() && *half_extent > 0.0,
            ShapeDef::Circle { radius } => radius.is_finite() && *radius > 0.0,
            ShapeDef::Polygon { vertices } => {
                vertices.len() >= 3
                    && vertices.iter().all(|v| v.is_finite())
                    && polygon_area(vertices) > MIN_POLYGON_AREA
            }
        }
    }
}

/// Unsigned shoelace area
fn polygon_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() * 0.5
}
