//! Physics world management with Rapier3D.

use crate::collision::CollisionGroup;
use engine_core::{BodyState, Entity, Transform, Vec3};
use glam::Quat;
use rapier3d::na::{Isometry3, Quaternion, Translation3, UnitQuaternion};
use rapier3d::prelude::*;

/// Main physics world containing all simulation state.
pub struct PhysicsWorld {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub query_pipeline: QueryPipeline,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn to_rotation(rotation: Quat) -> UnitQuaternion<Real> {
    UnitQuaternion::new_normalize(Quaternion::new(rotation.w, rotation.x, rotation.y, rotation.z))
}

fn to_isometry(transform: &Transform) -> Isometry3<Real> {
    let p = transform.position;
    Isometry3::from_parts(Translation3::new(p.x, p.y, p.z), to_rotation(transform.rotation))
}

/// Pack an entity id into collider user data so ray hits can be mapped back to it.
fn entity_user_data(entity: Entity) -> u128 {
    entity.to_bits().get() as u128
}

impl PhysicsWorld {
    /// Create a new physics world with default gravity.
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            gravity: vector![0.0, -9.81, 0.0],
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Set the integration timestep in seconds.
    pub fn set_timestep(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    /// Step the physics simulation.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Update query pipeline for raycasting. Call after adding or removing colliders.
    pub fn update_query_pipeline(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Add a dynamic capsule body for a character. Rotations are locked so only
    /// the controller turns it; `mass` is the total body mass.
    pub fn add_actor_body(
        &mut self,
        transform: &Transform,
        half_height: f32,
        radius: f32,
        mass: f32,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body = RigidBodyBuilder::dynamic()
            .position(to_isometry(transform))
            .lock_rotations()
            .build();
        let body_handle = self.rigid_body_set.insert(body);
        let collider = ColliderBuilder::capsule_y(half_height, radius)
            .mass(mass)
            .friction(0.0)
            .collision_groups(CollisionGroup::actor())
            .build();
        let collider_handle =
            self.collider_set
                .insert_with_parent(collider, body_handle, &mut self.rigid_body_set);
        (body_handle, collider_handle)
    }

    /// Add a ground plane collider (flat Y=0 half-space).
    pub fn add_ground_plane(&mut self) -> ColliderHandle {
        let collider = ColliderBuilder::halfspace(Vector::y_axis())
            .collision_groups(CollisionGroup::environment())
            .build();
        self.collider_set.insert(collider)
    }

    /// Add a static cuboid of level geometry. No parent body; collider is fixed in world.
    pub fn add_static_cuboid(&mut self, translation: Vec3, half_extents: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![translation.x, translation.y, translation.z])
            .collision_groups(CollisionGroup::environment())
            .build();
        self.collider_set.insert(collider)
    }

    /// Add a fixed cuboid owned by `entity`. Ray hits on it report the entity.
    pub fn add_target_cuboid(
        &mut self,
        translation: Vec3,
        half_extents: Vec3,
        entity: Entity,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![translation.x, translation.y, translation.z])
            .collision_groups(CollisionGroup::target())
            .user_data(entity_user_data(entity))
            .build();
        self.collider_set.insert(collider)
    }

    /// Entity that owns a collider, if one was attached.
    pub fn collider_entity(&self, handle: ColliderHandle) -> Option<Entity> {
        self.collider_set
            .get(handle)
            .and_then(|collider| Entity::from_bits(collider.user_data as u64))
    }

    /// Read position, rotation and linear velocity of a body.
    pub fn read_body(&self, handle: RigidBodyHandle) -> Option<BodyState> {
        self.rigid_body_set.get(handle).map(|body| {
            let pos = body.translation();
            let rot = body.rotation();
            let vel = body.linvel();
            BodyState {
                transform: Transform {
                    position: Vec3::new(pos.x, pos.y, pos.z),
                    rotation: Quat::from_xyzw(rot.i, rot.j, rot.k, rot.w),
                },
                linear_velocity: Vec3::new(vel.x, vel.y, vel.z),
            }
        })
    }

    /// Write a controller's rotation and velocity back to its body. Position stays
    /// owned by the solver.
    pub fn write_body(&mut self, handle: RigidBodyHandle, state: &BodyState) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            let v = state.linear_velocity;
            body.set_rotation(to_rotation(state.transform.rotation), true);
            body.set_linvel(vector![v.x, v.y, v.z], true);
        }
    }

    /// Remove a collider by its handle.
    pub fn remove_collider(&mut self, handle: ColliderHandle) {
        self.collider_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.rigid_body_set,
            true,
        );
    }

    /// Remove a rigid body and its colliders.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }
}
