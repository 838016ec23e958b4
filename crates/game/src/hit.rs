//! Hitscan resolution: one ray, first collider, damage if it can take it.

use engine_core::{Entity, Health, Vec3, World};
use physics::{RigidBodyHandle, WorldQuery};

/// Where and how hard a shot landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub amount: f32,
}

/// Capability of world entities that can be shot.
pub trait Damageable {
    fn apply_damage(&mut self, hit: &DamageHit);

    /// Whether the target should be removed from the world.
    fn is_destroyed(&self) -> bool {
        false
    }
}

impl Damageable for Health {
    fn apply_damage(&mut self, hit: &DamageHit) {
        self.take_damage(hit.amount);
    }

    fn is_destroyed(&self) -> bool {
        self.is_dead()
    }
}

/// ECS component granting the damageable capability to an entity.
pub struct DamageableTarget(pub Box<dyn Damageable + Send + Sync>);

impl DamageableTarget {
    pub fn new(target: impl Damageable + Send + Sync + 'static) -> Self {
        Self(Box::new(target))
    }
}

/// Looks up the damageable capability of an entity at hit time.
pub trait TargetLookup {
    fn damageable(&mut self, entity: Entity) -> Option<&mut dyn Damageable>;
}

impl TargetLookup for World {
    fn damageable(&mut self, entity: Entity) -> Option<&mut dyn Damageable> {
        self.query_one_mut::<&mut DamageableTarget>(entity)
            .ok()
            .map(|target| target.0.as_mut() as &mut dyn Damageable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOutcome {
    /// Nothing within range.
    Miss,
    /// Hit something that cannot take damage.
    Blocked {
        point: Vec3,
        entity: Option<Entity>,
    },
    /// Damage was delivered to `entity`.
    Damaged { entity: Entity, hit: DamageHit },
}

/// Cast the shot ray and deliver damage to the first collider if it is damageable.
pub fn resolve_hit(
    world: &impl WorldQuery,
    targets: &mut impl TargetLookup,
    origin: Vec3,
    direction: Vec3,
    max_range: f32,
    damage: f32,
    exclude: Option<RigidBodyHandle>,
) -> ShotOutcome {
    let Some(ray_hit) = world.raycast(origin, direction, max_range, exclude) else {
        return ShotOutcome::Miss;
    };

    let target = match ray_hit.entity {
        Some(entity) => targets.damageable(entity).map(|target| (entity, target)),
        None => None,
    };

    match target {
        Some((entity, target)) => {
            let hit = DamageHit {
                point: ray_hit.point,
                normal: ray_hit.normal,
                amount: damage,
            };
            target.apply_damage(&hit);
            ShotOutcome::Damaged { entity, hit }
        }
        None => ShotOutcome::Blocked {
            point: ray_hit.point,
            entity: ray_hit.entity,
        },
    }
}
