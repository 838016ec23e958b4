//! Controller tuning. Loaded from `controller.ron` at startup and frozen into the actor.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::SetupError;

/// Movement, look and weapon constants for one actor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ControllerConfig {
    /// Horizontal speed in units per second.
    #[serde(default = "default_movement_speed")]
    pub movement_speed: f32,
    /// Look sensitivity in degrees per input unit per second.
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    /// Minimum time between shots in seconds.
    #[serde(default = "default_fire_interval")]
    pub fire_interval: f64,
    /// Upward impulse applied on jump.
    #[serde(default = "default_jump_impulse")]
    pub jump_impulse: f32,
    /// Body mass; a jump changes vertical velocity by `jump_impulse / body_mass`.
    #[serde(default = "default_body_mass")]
    pub body_mass: f32,
    /// Length of the downward ground check from the body origin.
    #[serde(default = "default_ground_check_distance")]
    pub ground_check_distance: f32,
    /// Pitch limit in degrees, applied symmetrically.
    #[serde(default = "default_pitch_clamp")]
    pub pitch_clamp_degrees: f32,
    /// Hitscan cutoff distance.
    #[serde(default = "default_max_fire_range")]
    pub max_fire_range: f32,
    /// Damage delivered per hit.
    #[serde(default = "default_shot_damage")]
    pub shot_damage: f32,
    /// Sound bank entry played on every shot.
    #[serde(default = "default_shot_sound")]
    pub shot_sound: String,
    /// Shot sound volume (0.0 to 1.0).
    #[serde(default = "default_shot_volume")]
    pub shot_volume: f32,
    /// Camera height above the body origin.
    #[serde(default = "default_eye_height")]
    pub eye_height: f32,
}

fn default_movement_speed() -> f32 {
    10.0
}
fn default_rotation_speed() -> f32 {
    15.0
}
fn default_fire_interval() -> f64 {
    0.3
}
fn default_jump_impulse() -> f32 {
    6.0
}
fn default_body_mass() -> f32 {
    1.0
}
fn default_ground_check_distance() -> f32 {
    1.3
}
fn default_pitch_clamp() -> f32 {
    89.0
}
fn default_max_fire_range() -> f32 {
    250.0
}
fn default_shot_damage() -> f32 {
    25.0
}
fn default_shot_sound() -> String {
    "shoot".to_string()
}
fn default_shot_volume() -> f32 {
    0.5
}
fn default_eye_height() -> f32 {
    0.6
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            movement_speed: default_movement_speed(),
            rotation_speed: default_rotation_speed(),
            fire_interval: default_fire_interval(),
            jump_impulse: default_jump_impulse(),
            body_mass: default_body_mass(),
            ground_check_distance: default_ground_check_distance(),
            pitch_clamp_degrees: default_pitch_clamp(),
            max_fire_range: default_max_fire_range(),
            shot_damage: default_shot_damage(),
            shot_sound: default_shot_sound(),
            shot_volume: default_shot_volume(),
            eye_height: default_eye_height(),
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SetupError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SetupError::InvalidConfig {
            field,
            reason: "must be finite and greater than zero",
        });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f32) -> Result<(), SetupError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SetupError::InvalidConfig {
            field,
            reason: "must be finite and not negative",
        });
    }
    Ok(())
}

impl ControllerConfig {
    /// Load config from `controller.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from `path`.
    pub fn load_from(path: &Path) -> Result<Self, SetupError> {
        let data = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = ron::from_str(&data).map_err(|source| SetupError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would leave the controller in a broken state.
    pub fn validate(&self) -> Result<(), SetupError> {
        positive("movement_speed", self.movement_speed)?;
        positive("rotation_speed", self.rotation_speed)?;
        positive("jump_impulse", self.jump_impulse)?;
        positive("body_mass", self.body_mass)?;
        positive("ground_check_distance", self.ground_check_distance)?;
        positive("max_fire_range", self.max_fire_range)?;
        non_negative("shot_damage", self.shot_damage)?;
        non_negative("eye_height", self.eye_height)?;

        if !self.fire_interval.is_finite() || self.fire_interval <= 0.0 {
            return Err(SetupError::InvalidConfig {
                field: "fire_interval",
                reason: "must be finite and greater than zero",
            });
        }
        if !(self.pitch_clamp_degrees > 0.0 && self.pitch_clamp_degrees < 90.0) {
            return Err(SetupError::InvalidConfig {
                field: "pitch_clamp_degrees",
                reason: "must be between 0 and 90 degrees",
            });
        }
        if !(0.0..=1.0).contains(&self.shot_volume) {
            return Err(SetupError::InvalidConfig {
                field: "shot_volume",
                reason: "must be between 0 and 1",
            });
        }
        Ok(())
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("controller.ron")
}
