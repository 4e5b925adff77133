//! Tests for spawner systems.

use bevy::prelude::*;
use std::time::Duration;

use crate::components::{DespawnAfter, Target, TargetAppearance, ViewerPose, WorldPosition};
use crate::DeterministicRng;

use super::systems::{expire_targets, random_in_unit_sphere, spawn_targets};
use super::{RemovalReason, SpawnTimer, SpawnerConfig, TargetRemoved, TargetSpawned};

fn test_app() -> App {
    let mut app = App::new();
    // Время двигаем вручную — никакого TimePlugin
    app.init_resource::<Time>();
    app.insert_resource(DeterministicRng::new(7));
    app.init_resource::<SpawnerConfig>();
    app.init_resource::<SpawnTimer>();
    app.insert_resource(ViewerPose {
        position: Vec3::new(0.0, 1.6, 0.0),
        forward: Vec3::Z,
        is_known: true,
    });
    app.add_event::<TargetSpawned>();
    app.add_event::<TargetRemoved>();
    app.add_systems(Update, (spawn_targets, expire_targets).chain());
    app
}

fn tick(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.update();
}

fn target_count(app: &mut App) -> usize {
    app.world_mut().query::<&Target>().iter(app.world()).len()
}

#[test]
fn test_no_spawn_before_interval() {
    let mut app = test_app();

    tick(&mut app, 1.0);
    tick(&mut app, 0.9);

    assert_eq!(target_count(&mut app), 0);
}

#[test]
fn test_spawn_after_interval_within_jitter() {
    let mut app = test_app();

    for _ in 0..4 {
        tick(&mut app, 0.5); // суммарно 2.0 s = spawn_interval
    }

    assert_eq!(target_count(&mut app), 1);

    let world = app.world_mut();
    let (position, despawn_after) = {
        let mut query = world.query::<(&WorldPosition, &DespawnAfter)>();
        let (p, d) = query.single(world).expect("spawned dot");
        (p.0, d.despawn_time)
    };

    // viewer + forward × 3 = (0, 1.6, 3), jitter ≤ 2
    let anchor = Vec3::new(0.0, 1.6, 3.0);
    assert!(position.distance(anchor) <= 2.0 + 1e-4);

    // lifetime = 3 s от момента спавна (elapsed = 2.0)
    assert!((despawn_after - 5.0).abs() < 1e-4);
}

#[test]
fn test_spawn_event_matches_appearance() {
    let mut app = test_app();

    for _ in 0..4 {
        tick(&mut app, 0.5);
    }

    let spawned: Vec<TargetSpawned> = app
        .world_mut()
        .resource_mut::<Events<TargetSpawned>>()
        .drain()
        .collect();
    assert_eq!(spawned.len(), 1);

    let event = &spawned[0];
    let world = app.world_mut();
    let appearance = {
        let mut query = world.query::<&TargetAppearance>();
        *query.single(world).expect("spawned dot")
    };

    assert_eq!(event.shade, appearance.shade);
    assert_eq!(event.color, appearance.color);
    // emission = color × intensity (default 2.0)
    assert_eq!(event.emission, appearance.color * 2.0);
    assert_eq!(event.prefab, "Prefabs/Dot");
}

#[test]
fn test_dot_expires_after_lifetime() {
    let mut app = test_app();

    // До первого спавна (2.0 s)
    for _ in 0..4 {
        tick(&mut app, 0.5);
    }
    assert_eq!(target_count(&mut app), 1);

    // Ещё 3.0 s: lifetime истёк. Второй dot спавнится на 4.0 s — тоже
    // истечёт только на 7.0 s, поэтому после 5.0 s живым остаётся один.
    for _ in 0..6 {
        tick(&mut app, 0.5);
    }

    let removed: Vec<TargetRemoved> = app
        .world_mut()
        .resource_mut::<Events<TargetRemoved>>()
        .drain()
        .collect();

    assert!(removed
        .iter()
        .any(|r| r.reason == RemovalReason::Expired));
    assert_eq!(target_count(&mut app), 1);
}

#[test]
fn test_expiry_of_already_removed_dot_is_noop() {
    let mut app = test_app();

    for _ in 0..4 {
        tick(&mut app, 0.5);
    }

    let entity = {
        let world = app.world_mut();
        let mut query = world.query_filtered::<Entity, With<Target>>();
        query.single(world).expect("spawned dot")
    };

    // Удаляем dot вне спавнера (аналог "сбит выстрелом")
    app.world_mut().despawn(entity);

    // Прогон через момент expiry — не паникует и не шлёт Expired
    for _ in 0..8 {
        tick(&mut app, 0.5);
    }

    let removed: Vec<TargetRemoved> = app
        .world_mut()
        .resource_mut::<Events<TargetRemoved>>()
        .drain()
        .collect();
    assert!(!removed.iter().any(|r| r.entity == entity));
}

#[test]
fn test_unknown_viewer_pose_falls_back_to_origin() {
    let mut app = test_app();
    app.insert_resource(ViewerPose::default()); // is_known = false

    for _ in 0..4 {
        tick(&mut app, 0.5);
    }

    let world = app.world_mut();
    let position = {
        let mut query = world.query::<(&WorldPosition, &Target)>();
        query.single(world).expect("spawned dot").0 .0
    };

    // origin + Z × 3 ± jitter
    assert!(position.distance(Vec3::new(0.0, 0.0, 3.0)) <= 2.0 + 1e-4);
}

#[test]
fn test_random_in_unit_sphere_bounded_and_deterministic() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut rng_a = ChaCha8Rng::seed_from_u64(11);
    let mut rng_b = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..1000 {
        let a = random_in_unit_sphere(&mut rng_a);
        let b = random_in_unit_sphere(&mut rng_b);
        assert!(a.length() <= 1.0 + 1e-6);
        assert_eq!(a, b);
    }
}
