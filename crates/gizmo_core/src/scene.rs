//! Scene serialization
//!
//! A [`Scene`] is a list of gizmo templates in real-world units, stored as
//! RON. Instantiating a scene builds a fresh [`Board`].

use std::fs;
use std::io;
use std::path::Path;

use gizmo_math::{Scale, Vec2};
use gizmo_physics::{BodyType, PhysicsConfig};
use log::info;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::{Board, Color, FactoryError, ShapeKind};

/// Serializable description of one gizmo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GizmoTemplate {
    #[serde(default)]
    pub name: Option<String>,
    pub kind: ShapeKind,
    /// Top-left corner of the bounding box, in grid units
    pub origin: Vec2,
    /// Side length, or radius for circular kinds, in grid units
    pub size: f32,
    /// Ignored by kinds with a fixed body type
    #[serde(default)]
    pub body_type: BodyType,
    #[serde(default)]
    pub color: Color,
}

impl GizmoTemplate {
    pub fn new(kind: ShapeKind, origin: Vec2, size: f32) -> Self {
        Self {
            name: None,
            kind,
            origin,
            size,
            body_type: kind.fixed_body_type().unwrap_or_default(),
            color: Color::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A serializable board layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    /// Overrides the configured gravity, in simulation units
    #[serde(default)]
    pub gravity: Option<Vec2>,
    #[serde(default)]
    pub gizmos: Vec<GizmoTemplate>,
}

/// Errors loading, saving or instantiating a scene
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    /// A gizmo could not be built; `index` is its position in the scene
    #[error("gizmo {index} ({kind}): {source}")]
    Gizmo {
        index: usize,
        kind: ShapeKind,
        #[source]
        source: FactoryError,
    },
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gravity: None,
            gizmos: Vec::new(),
        }
    }

    /// Parse a scene from RON text
    pub fn from_ron_str(contents: &str) -> Result<Self, SceneError> {
        Ok(ron::from_str(contents)?)
    }

    /// Serialize to pretty RON text
    pub fn to_ron_string(&self) -> Result<String, SceneError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }

    pub fn add_gizmo(&mut self, gizmo: GizmoTemplate) {
        self.gizmos.push(gizmo);
    }

    pub fn with_gizmo(mut self, gizmo: GizmoTemplate) -> Self {
        self.add_gizmo(gizmo);
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = Some(gravity);
        self
    }

    /// Build a board holding every gizmo in the scene
    ///
    /// Fails on the first gizmo the factory rejects; no partial board is
    /// returned.
    pub fn instantiate(&self, scale: Scale, config: PhysicsConfig) -> Result<Board, SceneError> {
        let config = match self.gravity {
            Some(gravity) => PhysicsConfig { gravity, ..config },
            None => config,
        };
        let mut board = Board::new(scale, config);
        for (index, gizmo) in self.gizmos.iter().enumerate() {
            board.spawn(gizmo).map_err(|source| SceneError::Gizmo {
                index,
                kind: gizmo.kind,
                source,
            })?;
        }
        info!("instantiated scene '{}' with {} gizmo(s)", self.name, board.entity_count());
        Ok(board)
    }
}
