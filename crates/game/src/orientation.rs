//! Mouse look: yaw turns the body, pitch tilts only the camera.

use engine_core::{BodyState, Quat, Vec2};

/// Accumulated camera pitch for one actor.
///
/// Pitch is stored in degrees; positive values look down, negative look up.
/// It is clamped on every update so it is never stored out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pitch_degrees: f32,
    clamp_degrees: f32,
}

impl Orientation {
    pub fn new(clamp_degrees: f32) -> Self {
        Self {
            pitch_degrees: 0.0,
            clamp_degrees,
        }
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch_degrees
    }

    /// Apply one tick of look input. Yaw (degrees, right positive) is composed
    /// after the body's current rotation; pitch is accumulated and clamped.
    pub fn apply_look(&mut self, body: &mut BodyState, look_delta: Vec2, rotation_speed: f32, dt: f32) {
        let yaw_degrees = look_delta.x * rotation_speed * dt;
        if yaw_degrees.is_finite() {
            // Turning right is a negative rotation about +Y in a right-handed frame.
            body.transform.rotate_local_y(-yaw_degrees.to_radians());
        }

        let pitch = self.pitch_degrees - look_delta.y * rotation_speed * dt;
        if !pitch.is_nan() {
            self.pitch_degrees = pitch.clamp(-self.clamp_degrees, self.clamp_degrees);
        }
    }

    /// Camera rotation relative to the body. Rebuilt from the accumulator each
    /// call, so it never carries yaw or roll.
    pub fn camera_rotation(&self) -> Quat {
        Quat::from_rotation_x(-self.pitch_degrees.to_radians())
    }
}
