//! World positioning компоненты: WorldPosition, PrefabPath

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Позиция entity в world space (ECS authoritative)
///
/// Stimuli и dots неподвижны всю свою жизнь: host читает позицию
/// один раз при spawn event'е и не пишет обратно.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct WorldPosition(pub Vec3);

impl Default for WorldPosition {
    fn default() -> Self {
        Self(Vec3::ZERO)
    }
}

/// Prefab path for visual representation (data-driven)
///
/// Host инстанцирует этот prefab при `TargetSpawned` / `StimulusPresented`.
/// Позволяет разные визуалы для stimulus и dots без изменения симуляции.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct PrefabPath {
    pub path: String,
}

impl Default for PrefabPath {
    fn default() -> Self {
        Self {
            path: "Prefabs/Dot".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_position_default_is_origin() {
        assert_eq!(WorldPosition::default().0, Vec3::ZERO);
    }
}
