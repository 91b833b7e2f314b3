//! The board: physics world plus the entities drawn on it

use gizmo_math::Scale;
use gizmo_physics::{PhysicsConfig, PhysicsWorld};
use log::{debug, warn};
use slotmap::{new_key_type, SlotMap};

use crate::{BodyFactory, DrawableEntity, FactoryError, GizmoTemplate};

new_key_type! {
    /// Key identifying an entity on a board
    pub struct EntityKey;
}

/// A play field
///
/// Owns the physics world and every drawable entity. Each entity points at
/// exactly one body, and gizmos spawned through the board never share one.
pub struct Board {
    physics: PhysicsWorld,
    scale: Scale,
    entities: SlotMap<EntityKey, DrawableEntity>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Scale::default(), PhysicsConfig::default())
    }
}

impl Board {
    /// Create an empty board
    pub fn new(scale: Scale, config: PhysicsConfig) -> Self {
        Self {
            physics: PhysicsWorld::with_config(config),
            scale,
            entities: SlotMap::with_key(),
        }
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    #[inline]
    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    #[inline]
    pub fn physics_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.physics
    }

    /// Factory bound to this board's world and scale
    ///
    /// Entities it returns are not on the board until passed to
    /// [`Board::add_entity`].
    pub fn factory(&mut self) -> BodyFactory<'_> {
        BodyFactory::new(&mut self.physics, self.scale)
    }

    /// Create a gizmo from a template and put it on the board
    pub fn spawn(&mut self, template: &GizmoTemplate) -> Result<EntityKey, FactoryError> {
        let mut entity = self.factory().create(
            template.kind,
            template.origin,
            template.size,
            template.body_type,
            template.color,
        )?;
        if let Some(name) = &template.name {
            entity = entity.with_name(name.clone());
        }
        Ok(self.add_entity(entity))
    }

    /// Add an already built entity
    pub fn add_entity(&mut self, entity: DrawableEntity) -> EntityKey {
        if !self.physics.contains(entity.body()) {
            warn!("adding {} entity whose body {:?} is gone", entity.kind(), entity.body());
        }
        self.entities.insert(entity)
    }

    pub fn get_entity(&self, key: EntityKey) -> Option<&DrawableEntity> {
        self.entities.get(key)
    }

    /// First entity with the given name
    pub fn get_by_name(&self, name: &str) -> Option<(EntityKey, &DrawableEntity)> {
        self.entities.iter().find(|(_, e)| e.name() == Some(name))
    }

    /// Remove an entity and its body
    pub fn despawn(&mut self, key: EntityKey) -> Option<DrawableEntity> {
        let entity = self.entities.remove(key)?;
        self.physics.remove_body(entity.body());
        debug!("despawned {} {:?}", entity.kind(), key);
        Some(entity)
    }

    /// Remove an entity but leave its body in the world
    pub fn remove_entity(&mut self, key: EntityKey) -> Option<DrawableEntity> {
        self.entities.remove(key)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &DrawableEntity)> {
        self.entities.iter()
    }

    /// Advance the physics world by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.physics.step(dt);
    }

    /// Advance the physics world by its configured timestep
    pub fn step_fixed(&mut self) {
        let dt = self.physics.config.timestep;
        self.physics.step(dt);
    }
}
