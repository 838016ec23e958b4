//! Collision groups and filtering.

use rapier3d::prelude::*;

/// Collision groups for different entity types.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroup {
    /// Static environment (ground, walls)
    Environment = 1 << 0,
    /// Player-controlled actors
    Actor = 1 << 1,
    /// Shootable targets
    Target = 1 << 2,
}

impl CollisionGroup {
    /// Static geometry collides with everything.
    pub fn environment() -> InteractionGroups {
        InteractionGroups::new(Group::from_bits_retain(Self::Environment as u32), Group::ALL)
    }

    /// Actors stand on the environment and bump into targets, never into each other.
    pub fn actor() -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_retain(Self::Actor as u32),
            Group::from_bits_retain(Self::Environment as u32 | Self::Target as u32),
        )
    }

    /// Targets block actors and rest on the environment.
    pub fn target() -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_retain(Self::Target as u32),
            Group::from_bits_retain(Self::Environment as u32 | Self::Actor as u32),
        )
    }
}
