//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GIZMO_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use gizmo_core::{PhysicsConfig, Scale, ScaleError, Vec2};
use gizmo_math::units::{DEFAULT_BOARD_SIZE, DEFAULT_GRID_COUNT, DEFAULT_RATE};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::systems::SimulationSystem;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board geometry and unit scale
    #[serde(default)]
    pub board: BoardConfig,
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsSettings,
    /// Host loop configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Scene to load at startup
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GIZMO_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // GIZMO_BOARD__GRID_COUNT=40 -> board.grid_count = 40
        figment = figment.merge(Env::prefixed("GIZMO_").split("__"));

        Ok(figment.extract()?)
    }

    /// Unit scale described by the board section
    pub fn scale(&self) -> Result<Scale, ConfigError> {
        Ok(Scale::new(self.board.rate, self.board.board_size, self.board.grid_count)?)
    }

    /// Physics world settings described by the physics section
    pub fn physics_config(&self) -> Result<PhysicsConfig, ConfigError> {
        let timestep = self.timestep()?;
        if self.physics.substeps == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }
        Ok(PhysicsConfig::new(Vec2::from(self.physics.gravity))
            .with_timestep(timestep)
            .with_substeps(self.physics.substeps))
    }

    /// Fixed-step driver described by the physics and simulation sections
    pub fn simulation_system(&self) -> Result<SimulationSystem, ConfigError> {
        let timestep = self.timestep()?;
        let max_frame_time = self.simulation.max_frame_time;
        if !(max_frame_time.is_finite() && max_frame_time >= 0.0) {
            return Err(ConfigError::InvalidFrameTime(max_frame_time));
        }
        Ok(SimulationSystem::new(timestep, max_frame_time))
    }

    fn timestep(&self) -> Result<f32, ConfigError> {
        let timestep = self.physics.timestep;
        if timestep.is_finite() && timestep > 0.0 {
            Ok(timestep)
        } else {
            Err(ConfigError::InvalidTimestep(timestep))
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board side length in pixels
    pub board_size: u32,
    /// Grid cells per board side
    pub grid_count: u32,
    /// Real-world units per simulation unit
    pub rate: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            grid_count: DEFAULT_GRID_COUNT,
            rate: DEFAULT_RATE,
        }
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsSettings {
    /// Gravity [x, y] in simulation units (positive y = down the screen)
    pub gravity: [f32; 2],
    /// Fixed step length in seconds
    pub timestep: f32,
    /// Engine passes per fixed step
    pub substeps: u32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: [0.0, 10.0],
            timestep: 1.0 / 60.0,
            substeps: 8,
        }
    }
}

/// Host loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Frames to run before exiting
    pub frames: u32,
    /// Nominal host frame length in seconds
    pub frame_time: f32,
    /// Longest frame time fed to the accumulator, in seconds
    pub max_frame_time: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: 300,
            frame_time: 1.0 / 60.0,
            max_frame_time: 0.25,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// RON scene file, relative to the working directory
    pub path: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("scenes/demo.ron"),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log the draw calls of every rendered frame
    pub log_draw_calls: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_draw_calls: false,
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),
    #[error("Invalid board settings: {0}")]
    Scale(#[from] ScaleError),
    #[error("Invalid timestep {0}: must be a positive number of seconds")]
    InvalidTimestep(f32),
    #[error("Invalid max frame time {0}: must be a non-negative number of seconds")]
    InvalidFrameTime(f32),
    #[error("Physics substeps must be at least 1")]
    ZeroSubsteps,
}
