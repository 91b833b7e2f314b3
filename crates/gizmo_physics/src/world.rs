//! Physics world and simulation
//!
//! [`PhysicsWorld`] owns a rapier2d pipeline and hands out generational
//! [`BodyKey`]s. Callers never see rapier handles: everything that crosses
//! this boundary is in simulation space and uses [`Vec2`].

use gizmo_math::Vec2;
use log::{debug, warn};
use rapier2d::prelude::{
    CCDSolver, ColliderBuilder, ColliderSet, DefaultBroadPhase, ImpulseJointSet,
    IntegrationParameters, IslandManager, MultibodyJointSet, NarrowPhase, PhysicsPipeline, Point,
    QueryPipeline, Real, RigidBody, RigidBodyBuilder, RigidBodyHandle, RigidBodySet, Vector,
};
use slotmap::SlotMap;
use thiserror::Error;

use crate::body::{BodyDef, BodyKey, BodySnapshot, BodyType};
use crate::material::PhysicsMaterial;
use crate::shapes::ShapeDef;

/// Errors from world operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// The key refers to a body that has been removed
    #[error("body {0:?} is no longer in the world")]
    StaleBody(BodyKey),
    /// Non-positive or non-finite dimensions, or a flat polygon
    #[error("invalid fixture shape: {0:?}")]
    InvalidShape(ShapeDef),
    /// The engine could not build a convex hull from the vertices
    #[error("polygon vertices do not form a convex shape")]
    DegeneratePolygon,
}

/// Configuration for the physics simulation
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravity acceleration in simulation space (positive y = down the screen)
    pub gravity: Vec2,
    /// Fixed step length in seconds
    pub timestep: f32,
    /// Engine passes per [`PhysicsWorld::step`]
    ///
    /// Contacts are only detected between passes, so a body moving more than
    /// its own thickness in one pass can tunnel. One-cell gizmos on the
    /// default board are 0.1 units thick.
    pub substeps: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 10.0),
            timestep: 1.0 / 60.0,
            substeps: 8,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Set the fixed step length
    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.timestep = timestep;
        self
    }

    /// Set the number of engine passes per step (at least one is always run)
    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.substeps = substeps;
        self
    }
}

/// A fixture attached to a body
#[derive(Clone, Debug)]
pub struct Fixture {
    /// Body-local geometry
    pub shape: ShapeDef,
    /// Material the fixture was created with
    pub material: PhysicsMaterial,
}

struct BodyRecord {
    handle: RigidBodyHandle,
    body_type: BodyType,
    fixtures: Vec<Fixture>,
}

/// The physics world containing all rigid bodies
pub struct PhysicsWorld {
    /// Our generational keys, mapped to engine handles
    bodies: SlotMap<BodyKey, BodyRecord>,
    rigid_bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    integration_parameters: IntegrationParameters,
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = config.timestep;

        Self {
            bodies: SlotMap::with_key(),
            rigid_bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            integration_parameters,
            config,
        }
    }

    /// Create a body without fixtures and return its key
    pub fn create_body(&mut self, def: BodyDef) -> BodyKey {
        let builder = match def.body_type {
            BodyType::Static => RigidBodyBuilder::fixed(),
            BodyType::Dynamic => RigidBodyBuilder::dynamic(),
        };
        let body = builder
            .translation(to_vector(def.position))
            .user_data(def.user_data)
            .build();
        let handle = self.rigid_bodies.insert(body);

        self.bodies.insert(BodyRecord {
            handle,
            body_type: def.body_type,
            fixtures: Vec::new(),
        })
    }

    /// Attach a fixture to an existing body
    pub fn create_fixture(
        &mut self,
        key: BodyKey,
        shape: ShapeDef,
        material: PhysicsMaterial,
    ) -> Result<(), PhysicsError> {
        let record = self.bodies.get_mut(key).ok_or(PhysicsError::StaleBody(key))?;
        if !shape.is_valid() {
            return Err(PhysicsError::InvalidShape(shape));
        }

        let collider = collider_builder(&shape)
            .ok_or(PhysicsError::DegeneratePolygon)?
            .density(material.density)
            .friction(material.friction)
            .restitution(material.restitution)
            .restitution_combine_rule(material.restitution_rule.into())
            .build();
        self.colliders
            .insert_with_parent(collider, record.handle, &mut self.rigid_bodies);
        record.fixtures.push(Fixture { shape, material });
        Ok(())
    }

    /// Remove a body and its fixtures
    ///
    /// Returns false if the key was already stale.
    pub fn remove_body(&mut self, key: BodyKey) -> bool {
        let Some(record) = self.bodies.remove(key) else {
            warn!("remove_body called with stale key {:?}", key);
            return false;
        };
        self.rigid_bodies.remove(
            record.handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        debug!("removed body {:?} with {} fixture(s)", key, record.fixtures.len());
        true
    }

    /// Check whether a key still refers to a live body
    pub fn contains(&self, key: BodyKey) -> bool {
        self.bodies.contains_key(key)
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get the number of fixtures across all bodies
    pub fn fixture_count(&self) -> usize {
        self.colliders.len()
    }

    /// Iterate over all body keys
    pub fn body_keys(&self) -> impl Iterator<Item = BodyKey> + '_ {
        self.bodies.keys()
    }

    /// Current position of the body origin
    pub fn position(&self, key: BodyKey) -> Option<Vec2> {
        self.rigid_body(key).map(|body| from_vector(body.translation()))
    }

    /// Current rotation in radians
    pub fn angle(&self, key: BodyKey) -> Option<f32> {
        self.rigid_body(key).map(|body| body.rotation().angle())
    }

    /// Current linear velocity
    pub fn linear_velocity(&self, key: BodyKey) -> Option<Vec2> {
        self.rigid_body(key).map(|body| from_vector(body.linvel()))
    }

    /// Position, angle and velocity read together
    pub fn snapshot(&self, key: BodyKey) -> Option<BodySnapshot> {
        self.rigid_body(key).map(|body| BodySnapshot {
            position: from_vector(body.translation()),
            angle: body.rotation().angle(),
            velocity: from_vector(body.linvel()),
        })
    }

    /// Set the linear velocity of a body and wake it up
    pub fn set_linear_velocity(&mut self, key: BodyKey, velocity: Vec2) -> Result<(), PhysicsError> {
        let handle = self.handle(key).ok_or(PhysicsError::StaleBody(key))?;
        let body = self
            .rigid_bodies
            .get_mut(handle)
            .ok_or(PhysicsError::StaleBody(key))?;
        body.set_linvel(to_vector(velocity), true);
        Ok(())
    }

    /// Set the angular velocity of a body in radians per second
    pub fn set_angular_velocity(&mut self, key: BodyKey, omega: f32) -> Result<(), PhysicsError> {
        let handle = self.handle(key).ok_or(PhysicsError::StaleBody(key))?;
        let body = self
            .rigid_bodies
            .get_mut(handle)
            .ok_or(PhysicsError::StaleBody(key))?;
        body.set_angvel(omega, true);
        Ok(())
    }

    /// Kinematic type the body was created with
    pub fn body_type(&self, key: BodyKey) -> Option<BodyType> {
        self.bodies.get(key).map(|record| record.body_type)
    }

    /// User data tag the body was created with
    pub fn user_data(&self, key: BodyKey) -> Option<u128> {
        self.rigid_body(key).map(|body| body.user_data)
    }

    /// Fixtures attached to the body, in creation order
    pub fn fixtures(&self, key: BodyKey) -> Option<&[Fixture]> {
        self.bodies.get(key).map(|record| record.fixtures.as_slice())
    }

    /// Step the physics simulation forward by dt seconds
    ///
    /// The step is split into `config.substeps` equal engine passes.
    pub fn step(&mut self, dt: f32) {
        let substeps = self.config.substeps.max(1);
        self.integration_parameters.dt = dt / substeps as f32;
        let gravity = to_vector(self.config.gravity);

        for _ in 0..substeps {
            self.pipeline.step(
                &gravity,
                &self.integration_parameters,
                &mut self.islands,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.rigid_bodies,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                &mut self.ccd_solver,
                Some(&mut self.query_pipeline),
                &(),
                &(),
            );
        }
    }

    fn handle(&self, key: BodyKey) -> Option<RigidBodyHandle> {
        self.bodies.get(key).map(|record| record.handle)
    }

    fn rigid_body(&self, key: BodyKey) -> Option<&RigidBody> {
        self.handle(key).and_then(|handle| self.rigid_bodies.get(handle))
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn collider_builder(shape: &ShapeDef) -> Option<ColliderBuilder> {
    match shape {
        ShapeDef::Box { half_extent } => Some(ColliderBuilder::cuboid(*half_extent, *half_extent)),
        ShapeDef::Circle { radius } => Some(ColliderBuilder::ball(*radius)),
        ShapeDef::Polygon { vertices } => {
            let points: Vec<Point<Real>> = vertices.iter().map(|v| Point::new(v.x, v.y)).collect();
            ColliderBuilder::convex_hull(&points)
        }
    }
}

#[inline]
fn to_vector(v: Vec2) -> Vector<Real> {
    Vector::new(v.x, v.y)
}

#[inline]
fn from_vector(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}
