//! Board simulation system
//!
//! Feeds variable host frame times into fixed physics steps.

use gizmo_core::Board;
use log::{trace, warn};

/// Result of a simulation update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    /// Physics steps taken this frame
    pub steps: u32,
    /// Fraction of a step left in the accumulator, in [0, 1)
    pub alpha: f32,
}

/// Fixed-timestep accumulator driving a board
pub struct SimulationSystem {
    timestep: f32,
    max_frame_time: f32,
    accumulator: f32,
    total_steps: u64,
}

impl SimulationSystem {
    /// Create a simulation system
    ///
    /// Frame times above `max_frame_time` are clamped so a long stall does
    /// not trigger an unbounded burst of steps. A timestep that is not a
    /// positive finite number never steps the board.
    pub fn new(timestep: f32, max_frame_time: f32) -> Self {
        if !(timestep.is_finite() && timestep > 0.0) {
            warn!("Timestep {} is not positive, simulation will not advance", timestep);
        }
        let max_frame_time = if max_frame_time.is_finite() { max_frame_time.max(0.0) } else { 0.0 };
        Self {
            timestep,
            max_frame_time,
            accumulator: 0.0,
            total_steps: 0,
        }
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Steps taken since creation
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Run one host frame of `frame_time` seconds
    pub fn update(&mut self, board: &mut Board, frame_time: f32) -> SimulationResult {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return SimulationResult { steps: 0, alpha: 0.0 };
        }
        // NaN frame times count as zero
        let dt = frame_time.max(0.0).min(self.max_frame_time);
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= self.timestep {
            board.step(self.timestep);
            self.accumulator -= self.timestep;
            steps += 1;
        }
        self.total_steps += u64::from(steps);
        trace!("frame {:.4}s -> {} step(s)", dt, steps);

        SimulationResult {
            steps,
            alpha: self.accumulator / self.timestep,
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(1.0 / 60.0, 0.25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gizmo_core::{GizmoTemplate, ShapeKind, Vec2};

    #[test]
    fn test_accumulates_partial_frames() {
        let mut board = Board::default();
        let mut sim = SimulationSystem::new(0.25, 1.0);

        assert_eq!(sim.update(&mut board, 0.125).steps, 0);
        let result = sim.update(&mut board, 0.125);
        assert_eq!(result.steps, 1);
        assert_eq!(result.alpha, 0.0);
    }

    #[test]
    fn test_multiple_steps_per_frame() {
        let mut board = Board::default();
        let mut sim = SimulationSystem::new(0.125, 1.0);

        let result = sim.update(&mut board, 0.5);
        assert_eq!(result.steps, 4);
        assert_eq!(sim.total_steps(), 4);
    }

    #[test]
    fn test_frame_time_clamped() {
        let mut board = Board::default();
        let mut sim = SimulationSystem::new(0.125, 0.25);

        assert_eq!(sim.update(&mut board, 10.0).steps, 2);
        assert_eq!(sim.update(&mut board, -1.0).steps, 0);
    }

    #[test]
    fn test_zero_timestep_does_not_step() {
        let mut board = Board::default();
        for timestep in [0.0, -0.5, f32::NAN] {
            let mut sim = SimulationSystem::new(timestep, 0.25);
            let result = sim.update(&mut board, 0.1);
            assert_eq!(result, SimulationResult { steps: 0, alpha: 0.0 });
            assert_eq!(sim.total_steps(), 0);
        }
    }

    #[test]
    fn test_bad_frame_times_do_not_panic() {
        let mut board = Board::default();
        let mut sim = SimulationSystem::new(0.125, f32::NAN);
        assert_eq!(sim.update(&mut board, 1.0).steps, 0);

        let mut sim = SimulationSystem::new(0.125, -1.0);
        assert_eq!(sim.update(&mut board, 1.0).steps, 0);

        let mut sim = SimulationSystem::new(0.125, 0.25);
        assert_eq!(sim.update(&mut board, f32::NAN).steps, 0);
        assert_eq!(sim.update(&mut board, f32::INFINITY).steps, 2);
    }

    #[test]
    fn test_steps_move_the_board() {
        let mut board = Board::default();
        let key = board
            .spawn(&GizmoTemplate::new(ShapeKind::Ball, Vec2::new(5.0, 0.0), 0.5))
            .unwrap();
        let body = board.get_entity(key).unwrap().body();
        let start = board.physics().position(body).unwrap();

        let mut sim = SimulationSystem::default();
        sim.update(&mut board, 0.1);

        assert!(board.physics().position(body).unwrap().y > start.y);
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert_eq!(sim.timestep(), 1.0 / 60.0);
        assert_eq!(sim.total_steps(), 0);
    }
}
