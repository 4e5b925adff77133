//! Trial события (ECS → host visual/audio layer)

use bevy::prelude::*;

/// Event: начался очередной trial
#[derive(Event, Debug, Clone)]
pub struct TrialStarted {
    /// Номер trial (1..=N)
    pub trial: u32,
    /// Позиция stimulus этого trial
    pub position: Vec3,
}

/// Event: stimulus создан — host инстанцирует prefab (ECS → host)
#[derive(Event, Debug, Clone)]
pub struct StimulusPresented {
    pub entity: Entity,
    pub position: Vec3,
    pub orientation: Quat,
    /// Prefab для host-визуала
    pub prefab: String,
}

/// Event: stimulus убран — host удаляет визуал (ECS → host)
#[derive(Event, Debug, Clone)]
pub struct StimulusCleared {
    pub entity: Entity,
    pub trial: u32,
}

/// Event: все trials завершены
#[derive(Event, Debug, Clone)]
pub struct SessionComplete {
    pub trials_run: u32,
}
