//! Test doubles for world queries and damage targets.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use engine_core::{Entity, Vec3};
use physics::{ColliderHandle, RaycastHit, RigidBodyHandle, WorldQuery};

use crate::hit::{DamageHit, Damageable};

type RayCall = (Vec3, Vec3, f32, Option<RigidBodyHandle>);

enum Surface {
    Nothing,
    Floor(f32),
    Wall {
        entity: Entity,
        point: Vec3,
        normal: Vec3,
    },
}

/// A world with at most one surface that records every ray cast into it.
pub(crate) struct ScriptedWorld {
    surface: Surface,
    rays: RefCell<Vec<RayCall>>,
}

impl ScriptedWorld {
    fn with(surface: Surface) -> Self {
        Self {
            surface,
            rays: RefCell::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::with(Surface::Nothing)
    }

    /// Infinite floor at height `y`, only visible to downward rays.
    pub fn floor_at(y: f32) -> Self {
        Self::with(Surface::Floor(y))
    }

    /// A single surface point owned by `entity`, hit by any ray that reaches it.
    pub fn wall(entity: Entity, point: Vec3, normal: Vec3) -> Self {
        Self::with(Surface::Wall {
            entity,
            point,
            normal,
        })
    }

    pub fn rays(&self) -> Vec<RayCall> {
        self.rays.borrow().clone()
    }
}

impl WorldQuery for ScriptedWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: Option<RigidBodyHandle>,
    ) -> Option<RaycastHit> {
        self.rays
            .borrow_mut()
            .push((origin, direction, max_distance, exclude));

        match self.surface {
            Surface::Nothing => None,
            Surface::Floor(y) => {
                let distance = origin.y - y;
                (direction.y < 0.0 && distance >= 0.0 && distance <= max_distance).then(|| {
                    RaycastHit {
                        collider: ColliderHandle::invalid(),
                        entity: None,
                        distance,
                        point: Vec3::new(origin.x, y, origin.z),
                        normal: Vec3::Y,
                    }
                })
            }
            Surface::Wall {
                entity,
                point,
                normal,
            } => {
                let distance = (point - origin).length();
                (distance <= max_distance).then_some(RaycastHit {
                    collider: ColliderHandle::invalid(),
                    entity: Some(entity),
                    distance,
                    point,
                    normal,
                })
            }
        }
    }
}

/// Damage target that shares its hit log with the test.
#[derive(Clone, Default)]
pub(crate) struct DamageLog(Arc<Mutex<Vec<DamageHit>>>);

impl DamageLog {
    pub fn hits(&self) -> Vec<DamageHit> {
        self.0.lock().map(|hits| hits.clone()).unwrap_or_default()
    }
}

impl Damageable for DamageLog {
    fn apply_damage(&mut self, hit: &DamageHit) {
        if let Ok(mut hits) = self.0.lock() {
            hits.push(*hit);
        }
    }
}
