//! Draw surface boundary
//!
//! Entities draw through [`Canvas`] in pixel coordinates with an implicit
//! current color. No raster backend lives here; [`RecordingCanvas`] keeps
//! the calls so a host (or a test) can inspect or replay them.

use gizmo_core::{Color, Vec2};

/// A pixel-space draw surface
pub trait Canvas {
    /// Set the color used by subsequent draw calls
    fn set_color(&mut self, color: Color);

    /// Fill an axis-aligned rectangle with top-left corner (x, y)
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill a circle whose bounding box has top-left corner (x, y)
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32);

    /// Fill a polygon given its vertices in order
    fn draw_polygon(&mut self, points: &[Vec2]);

    /// Fill a trapezoid of full width `width` with top-left corner (x, y),
    /// rotated by `angle` radians about its center
    fn draw_trapezoid(&mut self, x: f32, y: f32, width: f32, angle: f32);
}

/// One recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetColor(Color),
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    Circle { x: f32, y: f32, radius: f32 },
    Polygon { points: Vec<Vec2> },
    Trapezoid { x: f32, y: f32, width: f32, angle: f32 },
}

impl DrawCommand {
    /// Whether this command puts pixels on the surface
    pub fn is_draw(&self) -> bool {
        !matches!(self, DrawCommand::SetColor(_))
    }
}

/// Canvas that records every call
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    color: Color,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of recorded commands that actually draw
    pub fn draw_call_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }

    /// Drop all recorded commands, keeping the current color
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Take the recorded commands, leaving the canvas empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.commands.push(DrawCommand::Circle { x, y, radius });
    }

    fn draw_polygon(&mut self, points: &[Vec2]) {
        self.commands.push(DrawCommand::Polygon { points: points.to_vec() });
    }

    fn draw_trapezoid(&mut self, x: f32, y: f32, width: f32, angle: f32) {
        self.commands.push(DrawCommand::Trapezoid { x, y, width, angle });
    }
}
