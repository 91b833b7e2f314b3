//! Unit conversion between real-world, simulation and screen space
//!
//! Real-world values are what callers place gizmos with (board grid units).
//! The physics world works in simulation space, which is real-world space
//! divided by `rate`. Screen pixels are simulation values scaled back by
//! `rate` and then by the pixel size of one grid cell.
//!
//! These functions are the only place the scale relationship lives: the
//! body factory converts placements with [`Scale::to_sim_space`] and the
//! renderer converts body positions with [`Scale::to_screen_space`].

use serde::Serialize;
use thiserror::Error;

use crate::Vec2;

/// Default simulation scale factor
pub const DEFAULT_RATE: f32 = 10.0;
/// Default board edge length in pixels
pub const DEFAULT_BOARD_SIZE: u32 = 600;
/// Default number of grid cells along each board edge
pub const DEFAULT_GRID_COUNT: u32 = 20;

/// Invalid scale parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("rate must be finite and positive, got {0}")]
    InvalidRate(f32),
    #[error("grid count must be positive")]
    ZeroGridCount,
    #[error("board size {board_size} is smaller than grid count {grid_count}")]
    BoardSmallerThanGrid { board_size: u32, grid_count: u32 },
}

/// The scale relationship between the three coordinate spaces
/// Built through [`Scale::new`] so the parameters are always valid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scale {
    rate: f32,
    board_size: u32,
    grid_count: u32,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            board_size: DEFAULT_BOARD_SIZE,
            grid_count: DEFAULT_GRID_COUNT,
        }
    }
}

impl Scale {
    /// Create a validated scale
    pub fn new(rate: f32, board_size: u32, grid_count: u32) -> Result<Self, ScaleError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ScaleError::InvalidRate(rate));
        }
        if grid_count == 0 {
            return Err(ScaleError::ZeroGridCount);
        }
        if board_size < grid_count {
            return Err(ScaleError::BoardSmallerThanGrid { board_size, grid_count });
        }
        Ok(Self { rate, board_size, grid_count })
    }

    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    #[inline]
    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    #[inline]
    pub fn grid_count(&self) -> u32 {
        self.grid_count
    }

    /// Pixels per grid cell
    ///
    /// Integer division: a board that does not divide evenly leaves a margin.
    #[inline]
    pub fn unit_size(&self) -> f32 {
        (self.board_size / self.grid_count) as f32
    }

    /// Real-world value to simulation space
    #[inline]
    pub fn to_sim_space(&self, real: f32) -> f32 {
        real / self.rate
    }

    /// Simulation value back to real-world space (inverse of [`Self::to_sim_space`])
    #[inline]
    pub fn to_real_space(&self, sim: f32) -> f32 {
        sim * self.rate
    }

    /// Simulation value to screen pixels
    #[inline]
    pub fn to_screen_space(&self, sim: f32) -> f32 {
        sim * self.rate * self.unit_size()
    }

    #[inline]
    pub fn to_sim_point(&self, real: Vec2) -> Vec2 {
        Vec2::new(self.to_sim_space(real.x), self.to_sim_space(real.y))
    }

    #[inline]
    pub fn to_real_point(&self, sim: Vec2) -> Vec2 {
        Vec2::new(self.to_real_space(sim.x), self.to_real_space(sim.y))
    }

    #[inline]
    pub fn to_screen_point(&self, sim: Vec2) -> Vec2 {
        Vec2::new(self.to_screen_space(sim.x), self.to_screen_space(sim.y))
    }
}
