//! Core engine types shared by the controller crates.
//!
//! This crate provides the foundational types used across all systems:
//! - Transform and body state
//! - Deterministic simulation time
//! - Common component types for ECS

pub mod components;
pub mod time;
pub mod transform;

pub use components::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Quat, Vec2, Vec3};
pub use hecs::{Entity, World};
