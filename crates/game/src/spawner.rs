//! Spawn point selection.

use engine_core::{Quat, Transform, Vec3};
use rand::Rng;

use crate::error::SetupError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub position: Vec3,
    pub rotation: Quat,
}

impl SpawnPoint {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_position_rotation(self.position, self.rotation)
    }
}

/// Picks where a new actor enters the world.
#[derive(Debug, Clone)]
pub struct Spawner {
    points: Vec<SpawnPoint>,
}

impl Spawner {
    /// At least one spawn point is required.
    pub fn new(points: Vec<SpawnPoint>) -> Result<Self, SetupError> {
        if points.is_empty() {
            return Err(SetupError::NoSpawnPoints);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[SpawnPoint] {
        &self.points
    }

    /// Uniformly random configured spawn point.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> SpawnPoint {
        self.points[rng.gen_range(0..self.points.len())]
    }
}
