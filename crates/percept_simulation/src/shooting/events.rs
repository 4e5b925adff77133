//! Shooting события: host input + результаты выстрелов

use bevy::prelude::*;

/// Input события от host XR runtime
///
/// Host поллит контроллер и присылает discrete press edges —
/// по одному event на нажатие, не per-frame удержание.
#[derive(Event, Debug, Clone)]
pub enum HostInputEvent {
    /// Нажат триггер: луч из позиции контроллера вдоль его forward
    TriggerPressed { origin: Vec3, direction: Vec3 },
}

/// Event: dot сбит выстрелом (ECS → host для VFX/звука)
#[derive(Event, Debug, Clone)]
pub struct TargetHit {
    pub target: Entity,
    /// Точка пересечения луча с hit-сферой
    pub hit_point: Vec3,
    /// Дистанция hit point → центр dot'а (метры)
    pub accuracy: f32,
    /// Начисленные очки (0..=100)
    pub score: f32,
}
