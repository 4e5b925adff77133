//! Spawner события (ECS → host visual layer)

use bevy::prelude::*;

use crate::components::Shade;

/// Event: dot создан — host инстанцирует prefab и применяет appearance
#[derive(Event, Debug, Clone)]
pub struct TargetSpawned {
    pub entity: Entity,
    pub position: Vec3,
    pub shade: Shade,
    /// Базовый цвет (linear RGB) для material property block
    pub color: Vec3,
    /// Emission = color × intensity
    pub emission: Vec3,
    pub prefab: String,
}

/// Причина удаления dot'а
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// Lifetime истёк
    Expired,
    /// Сбит выстрелом
    Shot,
}

/// Event: dot удалён — host убирает визуал
#[derive(Event, Debug, Clone)]
pub struct TargetRemoved {
    pub entity: Entity,
    pub reason: RemovalReason,
}
