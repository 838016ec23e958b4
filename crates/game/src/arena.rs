//! A playable space: physics, targets and the local actor, stepped together.

use engine_core::{Entity, Health, Time, Vec3, World};
use input::InputSnapshot;
use physics::{ColliderHandle, PhysicsWorld};
use rand::Rng;

use crate::actor::{Actor, TickReport, TickServices};
use crate::config::ControllerConfig;
use crate::cues::{CueSink, SoundBank};
use crate::error::SetupError;
use crate::hit::{DamageableTarget, ShotOutcome};
use crate::spawner::Spawner;

/// Actor capsule: 0.5 half-height + 0.5 radius puts the body origin 1.0 above its feet.
pub const ACTOR_HALF_HEIGHT: f32 = 0.5;
pub const ACTOR_RADIUS: f32 = 0.5;

/// Collider backing a target entity, removed with it.
struct TargetCollider(ColliderHandle);

pub struct Arena<C> {
    pub physics: PhysicsWorld,
    pub targets: World,
    pub cues: C,
    actor: Option<Actor>,
    time: Time,
}

impl<C: CueSink> Arena<C> {
    /// An arena with a ground plane and nothing on it.
    pub fn new(cues: C) -> Self {
        let mut physics = PhysicsWorld::new();
        physics.add_ground_plane();
        physics.update_query_pipeline();
        Self {
            physics,
            targets: World::new(),
            cues,
            actor: None,
            time: Time::new(),
        }
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Place a shootable box with `health` hit points.
    pub fn add_target(&mut self, position: Vec3, half_extents: Vec3, health: f32) -> Entity {
        let entity = self.targets.reserve_entity();
        let collider = self.physics.add_target_cuboid(position, half_extents, entity);
        self.targets.spawn_at(
            entity,
            (
                DamageableTarget::new(Health::new(health)),
                TargetCollider(collider),
            ),
        );
        self.physics.update_query_pipeline();
        entity
    }

    /// Place a box of level geometry that blocks shots but cannot be damaged.
    pub fn add_obstacle(&mut self, position: Vec3, half_extents: Vec3) -> ColliderHandle {
        let collider = self.physics.add_static_cuboid(position, half_extents);
        self.physics.update_query_pipeline();
        collider
    }

    /// Create the actor at a random spawn point. Replaces any existing actor.
    pub fn spawn_actor<R: Rng + ?Sized>(
        &mut self,
        spawner: &Spawner,
        rng: &mut R,
        config: ControllerConfig,
        sounds: &impl SoundBank,
    ) -> Result<(), SetupError> {
        config.validate()?;
        let point = spawner.choose(rng);
        let (body, _) = self.physics.add_actor_body(
            &point.transform(),
            ACTOR_HALF_HEIGHT,
            ACTOR_RADIUS,
            config.body_mass,
        );
        let actor = match Actor::new(config, body, sounds) {
            Ok(actor) => actor,
            Err(e) => {
                self.physics.remove_body(body);
                return Err(e);
            }
        };
        self.despawn_actor();
        self.actor = Some(actor);
        self.physics.update_query_pipeline();
        log::info!("actor spawned at {:?}", point.position);
        Ok(())
    }

    /// Remove the actor and its body.
    pub fn despawn_actor(&mut self) {
        if let Some(actor) = self.actor.take() {
            self.physics.remove_body(actor.body());
            log::info!("actor despawned");
        }
    }

    /// Run one simulation tick: controller first, then physics.
    pub fn step(&mut self, dt: f32, input: &InputSnapshot) -> TickReport {
        self.time.advance(dt);
        let dt = self.time.delta_seconds();
        let now = self.time.elapsed_seconds();

        let mut report = TickReport::default();
        if let Some(actor) = self.actor.as_mut() {
            if let Some(mut body) = self.physics.read_body(actor.body()) {
                report = actor.tick(
                    dt,
                    now,
                    input,
                    &mut body,
                    TickServices {
                        world: &self.physics,
                        targets: &mut self.targets,
                        cues: &mut self.cues,
                    },
                );
                self.physics.write_body(actor.body(), &body);
            }
        }

        if let Some(ShotOutcome::Damaged { entity, .. }) = report.shot {
            self.remove_if_destroyed(entity);
        }

        if dt > 0.0 {
            self.physics.set_timestep(dt);
            self.physics.step();
        }
        report
    }

    fn remove_if_destroyed(&mut self, entity: Entity) {
        let destroyed = self
            .targets
            .query_one_mut::<&DamageableTarget>(entity)
            .map(|target| target.0.is_destroyed())
            .unwrap_or(false);
        if !destroyed {
            return;
        }
        if let Ok(TargetCollider(collider)) = self.targets.remove_one::<TargetCollider>(entity) {
            self.physics.remove_collider(collider);
            self.physics.update_query_pipeline();
        }
        match self.targets.despawn(entity) {
            Ok(()) => log::info!("target {:?} destroyed", entity),
            Err(e) => log::warn!("target {:?} already gone: {}", entity, e),
        }
    }
}
