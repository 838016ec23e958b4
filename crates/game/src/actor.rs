//! First-person actor: one body, one camera, one trigger.
//!
//! `tick` runs the controller stages in a fixed order against explicit state:
//! movement and look, then the ground check and jump, then the trigger and
//! hitscan. Nothing here is shared between actors except the world queries.

use engine_core::{BodyState, Transform, Vec3};
use input::InputSnapshot;
use physics::{RigidBodyHandle, WorldQuery};

use crate::config::ControllerConfig;
use crate::cues::{CueSink, ShotCue, SoundBank};
use crate::error::SetupError;
use crate::fire::FireController;
use crate::ground::is_grounded;
use crate::hit::{resolve_hit, ShotOutcome, TargetLookup};
use crate::jump::try_jump;
use crate::locomotion::apply_movement;
use crate::orientation::Orientation;

/// External collaborators one tick talks to.
pub struct TickServices<'a, W, T, C> {
    pub world: &'a W,
    pub targets: &'a mut T,
    pub cues: &'a mut C,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub jumped: bool,
    pub shot: Option<ShotOutcome>,
}

pub struct Actor {
    config: ControllerConfig,
    body: RigidBodyHandle,
    orientation: Orientation,
    fire: FireController,
    shot_cue: ShotCue,
}

impl Actor {
    /// Build an actor around an existing physics body. Fails if the config is
    /// invalid or the shot sound is missing from `sounds`.
    pub fn new(
        config: ControllerConfig,
        body: RigidBodyHandle,
        sounds: &impl SoundBank,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let shot_cue = ShotCue::resolve(sounds, &config.shot_sound, config.shot_volume)?;
        Ok(Self {
            orientation: Orientation::new(config.pitch_clamp_degrees),
            fire: FireController::new(config.fire_interval),
            shot_cue,
            body,
            config,
        })
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Camera frame in world space: eye offset and pitch riding on the body.
    pub fn camera_transform(&self, body: &BodyState) -> Transform {
        let local = Transform::from_position_rotation(
            Vec3::Y * self.config.eye_height,
            self.orientation.camera_rotation(),
        );
        body.transform.mul_transform(&local)
    }

    pub fn camera_origin(&self, body: &BodyState) -> Vec3 {
        self.camera_transform(body).position
    }

    /// Direction through the center of the view.
    pub fn camera_forward(&self, body: &BodyState) -> Vec3 {
        self.camera_transform(body).forward()
    }

    /// Advance the actor by `dt` seconds at simulation time `now`.
    pub fn tick<W, T, C>(
        &mut self,
        dt: f32,
        now: f64,
        input: &InputSnapshot,
        body: &mut BodyState,
        services: TickServices<'_, W, T, C>,
    ) -> TickReport
    where
        W: WorldQuery,
        T: TargetLookup,
        C: CueSink,
    {
        let mut report = TickReport::default();

        apply_movement(body, input.movement, self.config.movement_speed);
        self.orientation
            .apply_look(body, input.look_delta, self.config.rotation_speed, dt);

        if input.jump_pressed {
            let grounded = is_grounded(
                services.world,
                body.transform.position,
                self.config.ground_check_distance,
                Some(self.body),
            );
            report.jumped = try_jump(
                body,
                grounded,
                self.config.jump_impulse,
                self.config.body_mass,
            );
        }

        if self.fire.handle_input(input.fire, now) {
            self.shot_cue.play(services.cues);
            let outcome = resolve_hit(
                services.world,
                services.targets,
                self.camera_origin(body),
                self.camera_forward(body),
                self.config.max_fire_range,
                self.config.shot_damage,
                Some(self.body),
            );
            log::debug!("shot at t={:.3}: {:?}", now, outcome);
            report.shot = Some(outcome);
        }

        report
    }
}
