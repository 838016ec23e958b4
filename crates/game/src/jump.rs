//! One-shot jump impulse.

use engine_core::{BodyState, Vec3};

/// Apply a jump if the body is grounded. Returns whether the jump happened.
///
/// An airborne request is dropped, not buffered. The impulse adds to the
/// current vertical velocity instead of replacing it.
pub fn try_jump(body: &mut BodyState, grounded: bool, jump_impulse: f32, body_mass: f32) -> bool {
    if !grounded {
        return false;
    }
    body.linear_velocity += Vec3::Y * (jump_impulse / body_mass);
    true
}
