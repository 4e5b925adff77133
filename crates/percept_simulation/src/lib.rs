//! PERCEPT Simulation Core
//!
//! ECS-симуляция VR психофизического эксперимента на Bevy 0.16 (strategic layer):
//! trial-цикл стимулов, dot-shooting мини-игра, счёт.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (trial sequencing, target lifecycle, scoring, placement RNG)
//! - VR host (Unity/OpenXR runtime) = tactical layer (rendering, audio playback,
//!   XR input polling, UI text)
//!
//! Граница — Bevy events: host пишет `HostPoseEvent`/`HostInputEvent`,
//! читает `StimulusPresented`, `TargetSpawned`, `CueRequested`, `ScoreChanged` и т.д.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod audio;
pub mod components;
pub mod logger;
pub mod score;
pub mod shooting;
pub mod spawner;
pub mod trial;

// Re-export базовых типов для удобства
pub use audio::{CueClip, CueRequested, CueTone, CUE_SAMPLE_RATE};
pub use components::*;
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use score::{Score, ScoreChanged, ScorePlugin};
pub use shooting::{
    calculate_score, HostInputEvent, ShootingConfig, ShootingPlugin, TargetHit,
};
pub use spawner::{
    RemovalReason, SpawnTimer, SpawnerConfig, SpawnerPlugin, TargetRemoved, TargetSpawned,
};
pub use trial::{
    PlacementStrategy, SessionComplete, StimulusCleared, StimulusPresented, TrialConfig,
    TrialPlugin, TrialStarted, TrialState,
};

/// Seed по умолчанию (headless запуск без явного seed)
pub const DEFAULT_SEED: u64 = 42;

/// Порядок FixedUpdate фаз
///
/// Общий DeterministicRng требует фиксированного порядка систем,
/// иначе два запуска с одним seed разойдутся.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Применение host событий (viewer pose)
    HostSync,
    /// Trial FSM tick
    Trial,
    /// Спавн dots
    Spawn,
    /// Обработка trigger press'ов
    Shoot,
    /// Lifetime expiry dots
    Expire,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(DEFAULT_SEED))
            // Viewer pose — host authoritative, синхронизация через events
            .init_resource::<ViewerPose>()
            .add_event::<HostPoseEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::HostSync,
                    SimulationSet::Trial,
                    SimulationSet::Spawn,
                    SimulationSet::Shoot,
                    SimulationSet::Expire,
                )
                    .chain(), // Последовательное выполнение для детерминизма
            )
            .add_systems(
                FixedUpdate,
                components::viewer::apply_viewer_pose.in_set(SimulationSet::HostSync),
            )
            // Подсистемы (ECS strategic layer)
            .add_plugins((TrialPlugin, SpawnerPlugin, ShootingPlugin, ScorePlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Все рандомные решения симуляции (placement, jitter, чёрный/белый)
/// тянут из него — один seed воспроизводит сессию.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);
    // Перекрываем seed по умолчанию из SimulationPlugin
    app.insert_resource(DeterministicRng::new(seed));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Собирает все компоненты типа T в детерминированный байтовый формат
/// (сортировка по Entity ID). Два запуска с одним seed обязаны давать
/// идентичные snapshots.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
