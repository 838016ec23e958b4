//! fpscore - headless run of the first-person controller against a small target range.

use anyhow::{Context, Result};
use game::{Arena, ControllerConfig, LogCues, ShotOutcome, SoundTable, SpawnPoint, Spawner};
use glam::{Quat, Vec3};
use input::{ElementState, InputSampler, InputState, KeyCode, MouseButton};
use rand::SeedableRng;

/// Simulated seconds to run.
const RUN_SECONDS: f32 = 3.0;
const TICK_RATE_HZ: f32 = 60.0;

fn build_arena(config: ControllerConfig) -> Result<Arena<LogCues>> {
    let mut sounds = SoundTable::new();
    sounds.register(&config.shot_sound);

    let mut arena = Arena::new(LogCues::default());
    arena.add_target(Vec3::new(0.0, 1.6, -12.0), Vec3::new(0.5, 0.5, 0.5), 100.0);
    arena.add_target(Vec3::new(6.0, 1.0, -20.0), Vec3::new(1.0, 1.0, 1.0), 50.0);
    arena.add_obstacle(Vec3::new(-6.0, 1.5, -10.0), Vec3::new(2.0, 1.5, 0.5));

    let spawner = Spawner::new(vec![
        SpawnPoint::new(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY),
        SpawnPoint::new(Vec3::new(2.0, 1.0, 1.0), Quat::IDENTITY),
        SpawnPoint::new(Vec3::new(-2.0, 1.0, 1.0), Quat::IDENTITY),
    ])?;
    let mut rng = rand::rngs::StdRng::from_entropy();
    arena
        .spawn_actor(&spawner, &mut rng, config, &sounds)
        .context("actor setup failed")?;
    Ok(arena)
}

/// Scripted player: walk forward, jump once, hold fire, sweep right.
fn feed_input(input: &mut InputState, tick: u32) {
    match tick {
        0 => {
            input.set_cursor_locked(true);
            input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        }
        30 => input.process_keyboard(KeyCode::Space, ElementState::Pressed),
        31 => input.process_keyboard(KeyCode::Space, ElementState::Released),
        60 => {
            input.process_keyboard(KeyCode::KeyW, ElementState::Released);
            input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        }
        120..=150 => input.process_mouse_motion((2.0, 0.0)),
        170 => input.process_mouse_button(MouseButton::Left, ElementState::Released),
        _ => {}
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting fpscore");

    let config = ControllerConfig::load();
    let mut arena = build_arena(config)?;
    let mut input = InputState::new();

    let dt = 1.0 / TICK_RATE_HZ;
    let ticks = (RUN_SECONDS * TICK_RATE_HZ) as u32;
    let (mut shots, mut hits, mut jumps) = (0u32, 0u32, 0u32);

    for tick in 0..ticks {
        feed_input(&mut input, tick);
        let report = arena.step(dt, &input.sample());

        if report.jumped {
            jumps += 1;
        }
        if let Some(outcome) = report.shot {
            shots += 1;
            if let ShotOutcome::Damaged { entity, hit } = outcome {
                hits += 1;
                log::info!("hit {:?} at {:?} for {}", entity, hit.point, hit.amount);
            }
        }
    }

    if let Some(actor) = arena.actor() {
        if let Some(body) = arena.physics.read_body(actor.body()) {
            log::info!(
                "final position {:?}, pitch {:.1}",
                body.transform.position,
                actor.orientation().pitch_degrees()
            );
        }
    }
    log::info!(
        "{} ticks: {} jumps, {} shots, {} hits, {} cues",
        arena.time().frame_count(),
        jumps,
        shots,
        hits,
        arena.cues.sounds_played
    );
    Ok(())
}
