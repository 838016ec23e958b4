//! Ground contact check.

use engine_core::Vec3;
use physics::{RigidBodyHandle, WorldQuery};

/// True iff a solid collider lies within `check_distance` straight below `origin`.
/// The querying body's own colliders are skipped.
pub fn is_grounded(
    world: &impl WorldQuery,
    origin: Vec3,
    check_distance: f32,
    exclude: Option<RigidBodyHandle>,
) -> bool {
    world
        .raycast(origin, Vec3::NEG_Y, check_distance, exclude)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedWorld;

    #[test]
    fn floor_within_reach_is_ground() {
        let world = ScriptedWorld::floor_at(0.0);
        assert!(is_grounded(&world, Vec3::new(0.0, 1.0, 0.0), 1.3, None));
        assert!(is_grounded(&world, Vec3::new(5.0, 1.3, -2.0), 1.3, None));
    }

    #[test]
    fn floor_beyond_reach_is_air() {
        let world = ScriptedWorld::floor_at(0.0);
        assert!(!is_grounded(&world, Vec3::new(0.0, 1.31, 0.0), 1.3, None));
    }

    #[test]
    fn empty_world_has_no_ground() {
        let world = ScriptedWorld::empty();
        assert!(!is_grounded(&world, Vec3::ZERO, 1.3, None));
    }
}
