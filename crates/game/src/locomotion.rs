//! Ground movement: input axes to a horizontal velocity command.

use engine_core::{BodyState, Vec2, Vec3};

/// Horizontal velocity for a movement input relative to the body's basis.
///
/// The direction is composed first and normalized after, so diagonal input is
/// no faster than straight input. Zero input is a full stop.
pub fn movement_velocity(movement: Vec2, forward: Vec3, right: Vec3, movement_speed: f32) -> Vec3 {
    let mut direction = forward * movement.y + right * movement.x;
    // Rescale first so the squared length neither overflows nor underflows.
    let largest = direction.abs().max_element();
    if largest > 0.0 && largest.is_finite() {
        direction /= largest;
    }
    direction.normalize_or_zero() * movement_speed
}

/// Replace the body's horizontal velocity with the movement command.
/// Vertical velocity (gravity, jumps) is left untouched.
pub fn apply_movement(body: &mut BodyState, movement: Vec2, movement_speed: f32) {
    let forward = body.transform.forward();
    let right = body.transform.right();
    let target = movement_velocity(movement, forward, right, movement_speed);
    body.linear_velocity.x = target.x;
    body.linear_velocity.z = target.z;
}
