//! Dot spawner — периодический спавн shootable dots мини-игры
//!
//! Активное множество dots = ECS query по `Target` (arena по Bevy `Entity` id).
//! Инвариант: membership в active set ≡ dot можно застрелить или он истечёт;
//! удаление + destroy атомарны относительно single-threaded FixedUpdate chain
//! (commands применяются между системами — double-despawn невозможен).
//!
//! ECS ответственность: тайминги, позиции, appearance, lifetime.
//! Host ответственность: инстанцирование dot prefab и material property block.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod events;
pub mod systems;

// Re-export основных типов
pub use events::*;
pub use systems::*;

#[cfg(test)]
mod systems_tests;

/// Конфигурация dot spawner'а
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Интервал между спавнами (секунды)
    pub spawn_interval: f32,
    /// Время жизни dot'а до авто-удаления (секунды)
    pub dot_lifetime: f32,
    /// Дистанция точки спавна перед камерой (метры)
    pub spawn_radius: f32,
    /// Радиус случайного разброса вокруг точки спавна (метры)
    pub jitter_radius: f32,
    /// Радиус hit-сферы dot'а (метры)
    pub target_radius: f32,
    /// Цвет чёрного dot'а (linear RGB)
    pub black_color: Vec3,
    /// Цвет белого dot'а (linear RGB)
    pub white_color: Vec3,
    /// Множитель emission
    pub emission_intensity: f32,
    /// Alpha cutoff для dot-шейдера
    pub alpha_cutoff: f32,
    /// Prefab для host-визуала dot'а
    pub dot_prefab: String,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            spawn_interval: 2.0,
            dot_lifetime: 3.0,
            spawn_radius: 3.0,
            jitter_radius: 2.0,
            target_radius: 0.25,
            black_color: Vec3::ZERO,
            white_color: Vec3::ONE,
            emission_intensity: 2.0,
            alpha_cutoff: 0.5,
            dot_prefab: "Prefabs/Dot".to_string(),
        }
    }
}

/// Обратный отсчёт до следующего спавна
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnTimer {
    pub remaining: f32,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        // Первый dot после полного интервала (default spawn_interval)
        Self { remaining: 2.0 }
    }
}

/// Spawner Plugin
///
/// Спавн в фазе `SimulationSet::Spawn`, expiry в `SimulationSet::Expire` —
/// между ними выстрелы, поэтому dot истекает только если его не успели сбить
/// в том же тике.
pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnerConfig>()
            .init_resource::<SpawnTimer>()
            .init_resource::<crate::components::ViewerPose>()
            .add_event::<TargetSpawned>()
            .add_event::<TargetRemoved>()
            .add_systems(
                FixedUpdate,
                (
                    systems::spawn_targets.in_set(crate::SimulationSet::Spawn),
                    systems::expire_targets.in_set(crate::SimulationSet::Expire),
                ),
            );
    }
}
