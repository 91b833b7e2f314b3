//! Board rendering system
//!
//! Draws the board once per frame onto a recording canvas. It only ever
//! runs between completed physics steps, so every entity sees a settled
//! position and angle.

use gizmo_core::Board;
use gizmo_render::{render_board, DrawCommand, RecordingCanvas, RenderError};
use log::trace;

/// Manages per-frame rendering
pub struct RenderSystem {
    canvas: RecordingCanvas,
    log_draw_calls: bool,
    frames_rendered: u64,
}

impl RenderSystem {
    pub fn new(log_draw_calls: bool) -> Self {
        Self {
            canvas: RecordingCanvas::new(),
            log_draw_calls,
            frames_rendered: 0,
        }
    }

    /// Render a frame, returning how many entities were drawn
    ///
    /// The previous frame's commands are discarded first.
    pub fn render(&mut self, board: &Board) -> Result<usize, RenderError> {
        self.canvas.clear();
        let drawn = render_board(board, &mut self.canvas)?;
        if self.log_draw_calls {
            for command in self.canvas.commands() {
                trace!("{:?}", command);
            }
        }
        self.frames_rendered += 1;
        Ok(drawn)
    }

    /// Commands of the last rendered frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        self.canvas.commands()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl Default for RenderSystem {
    fn default() -> Self {
        Self::new(false)
    }
}
