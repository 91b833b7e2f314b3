//! Entity rendering
//!
//! Reads each entity's body position and angle from the physics world and
//! turns them into pixel-space draw calls. Nothing here writes to the world.

use gizmo_core::{Board, BodyKey, DrawableEntity, EntityShape, PhysicsWorld, Scale, ShapeKind};
use log::trace;
use thiserror::Error;

use crate::Canvas;

/// Errors from rendering
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The entity's body has been removed from the world
    #[error("{kind} entity refers to removed body {body:?}")]
    StaleBody { kind: ShapeKind, body: BodyKey },
}

/// Something that can draw itself from physics state
pub trait RenderSelf {
    fn render_self(
        &self,
        physics: &PhysicsWorld,
        scale: Scale,
        canvas: &mut dyn Canvas,
    ) -> Result<(), RenderError>;
}

impl RenderSelf for DrawableEntity {
    fn render_self(
        &self,
        physics: &PhysicsWorld,
        scale: Scale,
        canvas: &mut dyn Canvas,
    ) -> Result<(), RenderError> {
        let snapshot = physics.snapshot(self.body()).ok_or(RenderError::StaleBody {
            kind: self.kind(),
            body: self.body(),
        })?;
        let size = self.extent();
        let corner = scale.to_screen_point(snapshot.position - size);
        let full = scale.to_screen_space(2.0 * size);
        let angle = if self.kind().follows_rotation() { snapshot.angle } else { 0.0 };

        canvas.set_color(self.color());
        match self.shape() {
            EntityShape::Square { .. }
            | EntityShape::AdvanceSquare { .. }
            | EntityShape::Absorber { .. } => canvas.fill_rect(corner.x, corner.y, full, full),
            EntityShape::Circle { radius } | EntityShape::Ball { radius } => {
                canvas.draw_circle(corner.x, corner.y, scale.to_screen_space(radius))
            }
            EntityShape::Triangle { .. } => {
                let points: Vec<_> = self
                    .shape()
                    .outline()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|v| scale.to_screen_point(snapshot.position + v.rotated(angle)))
                    .collect();
                canvas.draw_polygon(&points);
            }
            EntityShape::Trapezoid { .. } => {
                canvas.draw_trapezoid(corner.x, corner.y, full, angle)
            }
        }
        Ok(())
    }
}

/// Render every entity on the board, returning how many were drawn
///
/// Stops at the first stale entity.
pub fn render_board(board: &Board, canvas: &mut dyn Canvas) -> Result<usize, RenderError> {
    let mut drawn = 0;
    for (key, entity) in board.iter() {
        trace!("drawing {} {:?}", entity.kind(), key);
        entity.render_self(board.physics(), board.scale(), canvas)?;
        drawn += 1;
    }
    Ok(drawn)
}
