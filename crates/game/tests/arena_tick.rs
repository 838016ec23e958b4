use game::{Arena, ControllerConfig, LogCues, ShotOutcome, SoundTable, SpawnPoint, Spawner};
use glam::{Quat, Vec2, Vec3};
use input::{ButtonLatch, InputSnapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn arena_with_actor_at(position: Vec3) -> Arena<LogCues> {
    let mut sounds = SoundTable::new();
    sounds.register("shoot");
    let mut arena = Arena::new(LogCues::default());
    let spawner = Spawner::new(vec![SpawnPoint::new(position, Quat::IDENTITY)]).expect("point");
    let mut rng = StdRng::seed_from_u64(11);
    arena
        .spawn_actor(&spawner, &mut rng, ControllerConfig::default(), &sounds)
        .expect("actor spawns");
    arena
}

fn actor_velocity(arena: &Arena<LogCues>) -> Vec3 {
    let actor = arena.actor().expect("actor");
    arena.physics.read_body(actor.body()).expect("body").linear_velocity
}

fn actor_position(arena: &Arena<LogCues>) -> Vec3 {
    let actor = arena.actor().expect("actor");
    arena.physics.read_body(actor.body()).expect("body").transform.position
}

fn hold_fire(tick: usize) -> InputSnapshot {
    InputSnapshot {
        fire: if tick == 0 { ButtonLatch::press() } else { ButtonLatch::hold() },
        ..Default::default()
    }
}

#[test]
fn held_fire_destroys_target_then_misses() {
    let mut arena = arena_with_actor_at(Vec3::new(0.0, 1.0, 0.0));
    let target = arena.add_target(Vec3::new(0.0, 1.6, -10.0), Vec3::splat(0.5), 50.0);

    let mut outcomes = Vec::new();
    for tick in 0..60 {
        if let Some(outcome) = arena.step(DT, &hold_fire(tick)).shot {
            outcomes.push(outcome);
        }
    }

    assert_eq!(outcomes.len(), 4, "one shot per 0.3s over 1s of holding");
    assert!(matches!(outcomes[0], ShotOutcome::Damaged { entity, .. } if entity == target));
    assert!(matches!(outcomes[1], ShotOutcome::Damaged { entity, .. } if entity == target));
    assert_eq!(outcomes[2], ShotOutcome::Miss);
    assert!(!arena.targets.contains(target));
    assert_eq!(arena.cues.sounds_played, 4);
}

#[test]
fn obstacle_blocks_the_shot() {
    let mut arena = arena_with_actor_at(Vec3::new(0.0, 1.0, 0.0));
    arena.add_obstacle(Vec3::new(0.0, 1.5, -5.0), Vec3::new(2.0, 1.5, 0.2));
    let target = arena.add_target(Vec3::new(0.0, 1.6, -10.0), Vec3::splat(0.5), 50.0);

    let report = arena.step(DT, &hold_fire(0));
    assert!(matches!(report.shot, Some(ShotOutcome::Blocked { entity: None, .. })));
    assert!(arena.targets.contains(target));
}

#[test]
fn entity_without_capability_takes_no_damage() {
    let mut arena = arena_with_actor_at(Vec3::new(0.0, 1.0, 0.0));
    let prop = arena.targets.spawn(("prop",));
    arena
        .physics
        .add_target_cuboid(Vec3::new(0.0, 1.6, -6.0), Vec3::splat(0.5), prop);
    arena.physics.update_query_pipeline();

    let report = arena.step(DT, &hold_fire(0));
    assert!(matches!(report.shot, Some(ShotOutcome::Blocked { entity: Some(e), .. }) if e == prop));
}

#[test]
fn grounded_actor_jumps() {
    let mut arena = arena_with_actor_at(Vec3::new(0.0, 1.0, 0.0));
    let input = InputSnapshot {
        jump_pressed: true,
        ..Default::default()
    };
    let report = arena.step(DT, &input);
    assert!(report.jumped);
    assert!(actor_velocity(&arena).y > 4.0);
}

#[test]
fn airborne_actor_cannot_jump() {
    let mut arena = arena_with_actor_at(Vec3::new(0.0, 10.0, 0.0));
    let input = InputSnapshot {
        jump_pressed: true,
        ..Default::default()
    };
    let report = arena.step(DT, &input);
    assert!(!report.jumped);
    assert!(actor_velocity(&arena).y <= 0.0);
}

#[test]
fn walking_forward_moves_along_negative_z() {
    let mut arena = arena_with_actor_at(Vec3::new(0.0, 1.0, 0.0));
    let input = InputSnapshot {
        movement: Vec2::new(0.0, 1.0),
        ..Default::default()
    };
    for _ in 0..30 {
        arena.step(DT, &input);
    }
    let position = actor_position(&arena);
    assert!(position.z < -2.0, "z = {}", position.z);
    assert!(position.x.abs() < 0.1);

    let horizontal = Vec3::new(actor_velocity(&arena).x, 0.0, actor_velocity(&arena).z);
    assert!(horizontal.length() <= 10.0 + 1e-3);
}

#[test]
fn looking_right_turns_the_body() {
    let mut arena = arena_with_actor_at(Vec3::new(0.0, 1.0, 0.0));
    let input = InputSnapshot {
        look_delta: Vec2::new(6.0, 0.0),
        ..Default::default()
    };
    // 6 units * 15 deg/s * 1s = 90 degrees to the right.
    for _ in 0..60 {
        arena.step(DT, &input);
    }
    let actor = arena.actor().expect("actor");
    let body = arena.physics.read_body(actor.body()).expect("body");
    assert!((body.transform.forward() - Vec3::X).length() < 0.05);
    assert_eq!(actor.orientation().pitch_degrees(), 0.0);
}
