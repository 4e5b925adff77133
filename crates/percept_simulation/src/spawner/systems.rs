//! Spawner системы: периодический спавн + lifetime expiry

use bevy::prelude::*;
use rand::Rng;

use crate::components::{
    DespawnAfter, PrefabPath, Shade, Target, TargetAppearance, ViewerPose, WorldPosition,
};
use crate::{logger, DeterministicRng};

use super::{RemovalReason, SpawnTimer, SpawnerConfig, TargetRemoved, TargetSpawned};

/// Система: спавн одного dot'а каждые spawn_interval секунд
///
/// Позиция: viewer + forward × spawn_radius + random-in-unit-sphere × jitter.
/// Appearance: 50/50 чёрный/белый, emission = color × intensity.
/// Неизвестная viewer pose — warning + спавн относительно world origin.
pub fn spawn_targets(
    mut commands: Commands,
    config: Res<SpawnerConfig>,
    mut timer: ResMut<SpawnTimer>,
    viewer: Res<ViewerPose>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time>,
    mut spawned: EventWriter<TargetSpawned>,
) {
    timer.remaining -= time.delta_secs();
    if timer.remaining > 0.0 {
        return;
    }
    timer.remaining += config.spawn_interval;
    if timer.remaining <= 0.0 {
        // Интервал короче тика — не копим долг, один спавн за тик
        timer.remaining = config.spawn_interval.max(time.delta_secs());
    }

    if !viewer.is_known {
        logger::log_warning("dot spawn: viewer pose unknown, spawning relative to world origin");
    }

    let position = viewer.position
        + viewer.forward * config.spawn_radius
        + random_in_unit_sphere(&mut rng.rng) * config.jitter_radius;

    let is_white = rng.rng.gen_bool(0.5);
    let shade = if is_white { Shade::White } else { Shade::Black };
    let color = if is_white {
        config.white_color
    } else {
        config.black_color
    };
    let emission = color * config.emission_intensity;

    let now = time.elapsed_secs();
    let entity = commands
        .spawn((
            Target {
                radius: config.target_radius,
                spawned_at: now,
            },
            TargetAppearance {
                shade,
                color,
                emission,
                alpha_cutoff: config.alpha_cutoff,
            },
            WorldPosition(position),
            PrefabPath {
                path: config.dot_prefab.clone(),
            },
            DespawnAfter {
                despawn_time: now + config.dot_lifetime,
            },
        ))
        .id();

    spawned.write(TargetSpawned {
        entity,
        position,
        shade,
        color,
        emission,
        prefab: config.dot_prefab.clone(),
    });

    logger::log(&format!(
        "Spawned {:?} dot {:?} at {:?}",
        shade, entity, position
    ));
}

/// Система: деспавн dots с истёкшим lifetime
///
/// Идемпотентно: уже сбитые выстрелом entity в query не попадают
/// (commands предыдущих систем применены) — destroy не повторяется.
pub fn expire_targets(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter), With<Target>>,
    time: Res<Time>,
    mut removed: EventWriter<TargetRemoved>,
) {
    let now = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if now >= despawn_after.despawn_time {
            commands.entity(entity).despawn();
            removed.write(TargetRemoved {
                entity,
                reason: RemovalReason::Expired,
            });
            logger::log(&format!("Dot {:?} expired", entity));
        }
    }
}

/// Uniform точка в unit sphere (rejection sampling, детерминированно от rng)
pub fn random_in_unit_sphere(rng: &mut impl Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if v.length_squared() <= 1.0 {
            return v;
        }
    }
}
