//! Pixel-space rendering for gizmos
//!
//! - [`Canvas`] - The draw surface entities render onto
//! - [`RecordingCanvas`] / [`DrawCommand`] - Headless canvas that keeps the calls
//! - [`RenderSelf`] - Per-entity draw dispatch
//! - [`render_board`] - Draw a whole board

mod canvas;
mod drawable;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use drawable::{render_board, RenderError, RenderSelf};
