//! Common components used across the engine.

use glam::Vec3;

use crate::Transform;

/// Snapshot of a simulated body: where it is, how it is oriented, how fast it moves.
///
/// Read from the physics world before a controller tick and written back after it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    pub transform: Transform,
    pub linear_velocity: Vec3,
}

impl BodyState {
    pub fn new(transform: Transform, linear_velocity: Vec3) -> Self {
        Self {
            transform,
            linear_velocity,
        }
    }

    /// Horizontal (x, z) part of the linear velocity.
    pub fn horizontal_velocity(&self) -> Vec3 {
        Vec3::new(self.linear_velocity.x, 0.0, self.linear_velocity.z)
    }
}

/// Health component for damageable entities.
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: f32,
}

impl Health {
    pub fn new(hit_points: f32) -> Self {
        Self {
            current: hit_points,
        }
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}
