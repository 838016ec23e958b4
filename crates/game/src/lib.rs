//! First-person controller core: locomotion, mouse look, jumping and a
//! rate-limited hitscan weapon, driven by an explicit per-tick entry point.

pub mod actor;
pub mod arena;
pub mod config;
pub mod cues;
pub mod error;
pub mod fire;
pub mod ground;
pub mod hit;
pub mod jump;
pub mod locomotion;
pub mod orientation;
pub mod spawner;

#[cfg(test)]
mod testing;

pub use actor::{Actor, TickReport, TickServices};
pub use arena::Arena;
pub use config::ControllerConfig;
pub use cues::{CueSink, LogCues, ShotCue, SoundBank, SoundId, SoundTable};
pub use error::SetupError;
pub use fire::{FireController, FireState};
pub use hit::{DamageHit, Damageable, DamageableTarget, ShotOutcome, TargetLookup};
pub use spawner::{SpawnPoint, Spawner};
