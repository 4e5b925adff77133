//! Shooting системы: обработка trigger press

use bevy::prelude::*;

use crate::components::{Target, WorldPosition};
use crate::logger;
use crate::score::{Score, ScoreChanged};
use crate::spawner::{RemovalReason, TargetRemoved};

use super::{nearest_target_hit, HostInputEvent, ShootingConfig, TargetHit};

/// Очки за выстрел: clamp(100 − 50 × accuracy, 0, 100)
///
/// accuracy — дистанция hit point → центр dot'а: попадание точно в центр
/// даёт 100, промах на 2 м от центра и дальше — 0.
pub fn calculate_score(accuracy: f32) -> f32 {
    (100.0 - accuracy * 50.0).clamp(0.0, 100.0)
}

/// Система: raycast по каждому discrete trigger press
///
/// Первое пересечение: начисляем очки, despawn dot (идемпотентно — уже
/// истёкший или сбитый в этом же тике dot повторно не уничтожается),
/// события host'у. Нет попадания — никаких изменений состояния.
pub fn process_trigger_presses(
    mut commands: Commands,
    config: Res<ShootingConfig>,
    mut score: ResMut<Score>,
    mut inputs: EventReader<HostInputEvent>,
    targets: Query<(Entity, &WorldPosition, &Target)>,
    mut hits: EventWriter<TargetHit>,
    mut removed: EventWriter<TargetRemoved>,
    mut score_changed: EventWriter<ScoreChanged>,
) {
    // Сбитые в этом тике: commands ещё не применены, query их всё ещё видит
    let mut consumed: Vec<Entity> = Vec::new();

    for event in inputs.read() {
        let HostInputEvent::TriggerPressed { origin, direction } = event;

        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            logger::log_warning("trigger press with zero direction, ignoring");
            continue;
        }

        let candidates = targets
            .iter()
            .filter(|(entity, _, _)| !consumed.contains(entity))
            .map(|(entity, position, target)| (entity, position.0, target.radius));

        let Some((entity, hit, center)) =
            nearest_target_hit(*origin, direction, config.max_distance, candidates)
        else {
            continue; // промах — состояние не меняется
        };

        let accuracy = hit.point.distance(center);
        let points = calculate_score(accuracy);

        score.add_points(points);
        score_changed.write(ScoreChanged {
            total: score.total(),
            display: score.display_text(),
        });

        hits.write(TargetHit {
            target: entity,
            hit_point: hit.point,
            accuracy,
            score: points,
        });
        removed.write(TargetRemoved {
            entity,
            reason: RemovalReason::Shot,
        });

        // Уже убранный dot — no-op
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
        consumed.push(entity);

        logger::log(&format!(
            "Dot {:?} hit: accuracy {:.3} m → {:.1} points ({})",
            entity,
            accuracy,
            points,
            score.display_text()
        ));
    }
}
