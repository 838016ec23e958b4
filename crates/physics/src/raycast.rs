//! Raycasting for ground checks and hitscan queries.

use crate::PhysicsWorld;
use engine_core::{Entity, Vec3};
use rapier3d::prelude::*;

/// Result of a raycast query.
#[derive(Debug, Clone, Copy)]
pub struct RaycastHit {
    /// The collider that was hit.
    pub collider: ColliderHandle,
    /// Entity attached to the collider, if any.
    pub entity: Option<Entity>,
    /// Distance along the ray to the hit point.
    pub distance: f32,
    /// World position of the hit.
    pub point: Vec3,
    /// Surface normal at the hit point.
    pub normal: Vec3,
}

/// Read-only collision queries against the world.
///
/// Implementations must be deterministic: the same world state and ray always
/// produce the same answer.
pub trait WorldQuery {
    /// Nearest solid hit along `direction` from `origin` within `max_distance`.
    /// Colliders attached to `exclude` are ignored.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: Option<RigidBodyHandle>,
    ) -> Option<RaycastHit>;
}

impl WorldQuery for PhysicsWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: Option<RigidBodyHandle>,
    ) -> Option<RaycastHit> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO || max_distance <= 0.0 {
            return None;
        }

        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            vector![direction.x, direction.y, direction.z],
        );

        let mut filter = QueryFilter::default();
        if let Some(body) = exclude {
            filter = filter.exclude_rigid_body(body);
        }

        self.query_pipeline
            .cast_ray_and_get_normal(
                &self.rigid_body_set,
                &self.collider_set,
                &ray,
                max_distance,
                true,
                filter,
            )
            .map(|(collider, intersection)| {
                let point = ray.point_at(intersection.time_of_impact);
                RaycastHit {
                    collider,
                    entity: self.collider_entity(collider),
                    distance: intersection.time_of_impact,
                    point: Vec3::new(point.x, point.y, point.z),
                    normal: Vec3::new(
                        intersection.normal.x,
                        intersection.normal.y,
                        intersection.normal.z,
                    ),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{Transform, World};

    #[test]
    fn downward_ray_hits_ground_plane() {
        let mut world = PhysicsWorld::new();
        world.add_ground_plane();
        world.update_query_pipeline();

        let hit = world
            .raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, 1.3, None)
            .expect("ground below");
        assert!((hit.distance - 1.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::Y).length() < 1e-4);
        assert!(hit.entity.is_none());
    }

    #[test]
    fn ray_stops_at_max_distance() {
        let mut world = PhysicsWorld::new();
        world.add_ground_plane();
        world.update_query_pipeline();
        assert!(world.raycast(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y, 1.3, None).is_none());
    }

    #[test]
    fn target_hit_reports_owner_entity() {
        let mut entities = World::new();
        let owner = entities.spawn(());

        let mut world = PhysicsWorld::new();
        world.add_target_cuboid(Vec3::new(0.0, 1.0, -10.0), Vec3::ONE, owner);
        world.update_query_pipeline();

        let hit = world
            .raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z, 100.0, None)
            .expect("target ahead");
        assert_eq!(hit.entity, Some(owner));
        assert!((hit.point.z + 9.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn excluded_body_is_transparent() {
        let mut world = PhysicsWorld::new();
        let (body, _) = world.add_actor_body(&Transform::from_position(Vec3::new(0.0, 1.0, 0.0)), 0.5, 0.5, 1.0);
        world.update_query_pipeline();

        let origin = Vec3::new(0.0, 1.0, 0.0);
        assert!(world.raycast(origin, Vec3::NEG_Y, 1.3, None).is_some());
        assert!(world.raycast(origin, Vec3::NEG_Y, 1.3, Some(body)).is_none());
    }
}
