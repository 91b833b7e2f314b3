//! SceneBuilder - Declarative board construction
//!
//! Provides a fluent API for laying out gizmos in grid units.

use gizmo_core::{
    Board, BodyType, Color, GizmoTemplate, PhysicsConfig, Scale, Scene, SceneError, ShapeKind, Vec2,
};

/// Builder for gizmo layouts
///
/// # Example
/// ```ignore
/// let board = SceneBuilder::new("demo")
///     .add_absorber_floor(20, Color::GRAY)
///     .add_triangle(Vec2::new(4.0, 10.0), 2.0, Color::GREEN)
///     .add_ball(Vec2::new(5.0, 1.0), 0.5, Color::BLUE)
///     .build(Scale::default(), PhysicsConfig::default())?;
/// ```
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Create a new builder for an empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scene: Scene::new(name),
        }
    }

    /// Override the configured gravity
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.scene.gravity = Some(gravity);
        self
    }

    /// Add any template
    pub fn add(mut self, template: GizmoTemplate) -> Self {
        self.scene.add_gizmo(template);
        self
    }

    /// Row of one-cell absorbers along the bottom edge of a `grid_count` board
    pub fn add_absorber_floor(mut self, grid_count: u32, color: Color) -> Self {
        let y = grid_count.saturating_sub(1) as f32;
        for x in 0..grid_count {
            self.scene.add_gizmo(
                GizmoTemplate::new(ShapeKind::Absorber, Vec2::new(x as f32, y), 1.0)
                    .with_name(format!("floor_{x}"))
                    .with_color(color),
            );
        }
        self
    }

    pub fn add_square(self, origin: Vec2, size: f32, body_type: BodyType, color: Color) -> Self {
        self.add(
            GizmoTemplate::new(ShapeKind::Square, origin, size)
                .with_body_type(body_type)
                .with_color(color),
        )
    }

    pub fn add_advance_square(self, origin: Vec2, size: f32, color: Color) -> Self {
        self.add(GizmoTemplate::new(ShapeKind::AdvanceSquare, origin, size).with_color(color))
    }

    pub fn add_circle(self, origin: Vec2, radius: f32, color: Color) -> Self {
        self.add(GizmoTemplate::new(ShapeKind::Circle, origin, radius).with_color(color))
    }

    pub fn add_triangle(self, origin: Vec2, size: f32, color: Color) -> Self {
        self.add(GizmoTemplate::new(ShapeKind::Triangle, origin, size).with_color(color))
    }

    pub fn add_trapezoid(self, origin: Vec2, size: f32, color: Color) -> Self {
        self.add(GizmoTemplate::new(ShapeKind::Trapezoid, origin, size).with_color(color))
    }

    /// Add a named dynamic ball
    pub fn add_ball(self, origin: Vec2, radius: f32, color: Color) -> Self {
        self.add(
            GizmoTemplate::new(ShapeKind::Ball, origin, radius)
                .with_name("ball")
                .with_color(color),
        )
    }

    /// The scene described so far
    pub fn build_scene(self) -> Scene {
        self.scene
    }

    /// Instantiate the scene into a board
    pub fn build(self, scale: Scale, config: PhysicsConfig) -> Result<Board, SceneError> {
        self.scene.instantiate(scale, config)
    }

    /// The built-in layout used when no scene file is available
    pub fn demo(grid_count: u32) -> Self {
        Self::new("demo")
            .add_absorber_floor(grid_count, Color::GRAY)
            .add_advance_square(Vec2::new(12.0, 8.0), 2.0, Color::ORANGE)
            .add_square(Vec2::new(2.0, 6.0), 1.0, BodyType::Static, Color::RED)
            .add_circle(Vec2::new(15.0, 4.0), 0.5, Color::YELLOW)
            .add_triangle(Vec2::new(4.0, 12.0), 2.0, Color::GREEN)
            .add_trapezoid(Vec2::new(8.0, 14.0), 2.0, Color::MAGENTA)
            .add_ball(Vec2::new(10.25, 1.0), 0.5, Color::BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder() {
        let scene = SceneBuilder::new("empty").build_scene();
        assert_eq!(scene.name, "empty");
        assert!(scene.gizmos.is_empty());
    }

    #[test]
    fn test_absorber_floor_covers_bottom_row() {
        let scene = SceneBuilder::new("floor").add_absorber_floor(20, Color::GRAY).build_scene();

        assert_eq!(scene.gizmos.len(), 20);
        assert!(scene.gizmos.iter().all(|g| g.kind == ShapeKind::Absorber && g.origin.y == 19.0));
        assert_eq!(scene.gizmos[19].origin.x, 19.0);
    }

    #[test]
    fn test_builder_with_gravity() {
        let board = SceneBuilder::new("float")
            .with_gravity(Vec2::ZERO)
            .build(Scale::default(), PhysicsConfig::default())
            .unwrap();

        assert_eq!(board.physics().config.gravity, Vec2::ZERO);
    }

    #[test]
    fn test_demo_builds() {
        let board = SceneBuilder::demo(20)
            .build(Scale::default(), PhysicsConfig::default())
            .unwrap();

        assert_eq!(board.entity_count(), 26);
        let (_, ball) = board.get_by_name("ball").unwrap();
        assert_eq!(board.physics().body_type(ball.body()), Some(BodyType::Dynamic));
    }

    #[test]
    fn test_ball_lands_on_demo_floor() {
        let mut board = SceneBuilder::demo(20)
            .build(Scale::default(), PhysicsConfig::default())
            .unwrap();
        let body = board.get_by_name("ball").unwrap().1.body();

        for _ in 0..600 {
            board.step_fixed();
        }

        // Floor top at grid row 19 is 1.9 in simulation units
        let position = board.physics().position(body).unwrap();
        assert!(position.y < 1.9, "ball should stay above the floor, y = {}", position.y);
        assert!(position.y > 1.0, "ball should have fallen, y = {}", position.y);
    }
}
