//! Shooting controller — trigger press → raycast → score
//!
//! ECS ответственность: hit-детекция по Target hit-сферам (physics engine
//! host'а не используется — active set и есть target-only collision filter),
//! формула счёта, despawn сбитого dot'а.
//! Host ответственность: XR input polling — присылает `TriggerPressed`
//! с ray origin/direction контроллера (discrete press edges).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod events;
pub mod raycast;
pub mod systems;

// Re-export основных типов
pub use events::*;
pub use raycast::*;
pub use systems::*;


/// Конфигурация стрельбы
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShootingConfig {
    /// Максимальная дистанция луча (метры)
    pub max_distance: f32,
}

impl Default for ShootingConfig {
    fn default() -> Self {
        Self { max_distance: 10.0 }
    }
}

/// Shooting Plugin
///
/// Обработка trigger press'ов в фазе `SimulationSet::Shoot`:
/// после спавна текущего тика, до lifetime expiry.
pub struct ShootingPlugin;

impl Plugin for ShootingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShootingConfig>()
            .init_resource::<crate::score::Score>()
            .add_event::<HostInputEvent>()
            .add_event::<TargetHit>()
            .add_event::<crate::spawner::TargetRemoved>()
            .add_event::<crate::score::ScoreChanged>()
            .add_systems(
                FixedUpdate,
                systems::process_trigger_presses.in_set(crate::SimulationSet::Shoot),
            );
    }
}
