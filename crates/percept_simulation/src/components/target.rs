//! Компоненты targets (dots) и trial stimulus

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Shootable dot мини-игры
///
/// Активное множество dots = ECS query по этому компоненту:
/// membership в query ≡ dot можно застрелить или он истечёт по lifetime.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Target {
    /// Радиус hit-сферы (метры)
    pub radius: f32,
    /// Время спавна (секунды от старта симуляции)
    pub spawned_at: f32,
}

/// Чёрный или белый dot (рандом 50/50 при спавне)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum Shade {
    Black,
    White,
}

/// Внешний вид dot'а — host применяет через material property block
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TargetAppearance {
    pub shade: Shade,
    /// Базовый цвет (linear RGB)
    pub color: Vec3,
    /// Emission = color × intensity
    pub emission: Vec3,
    /// Alpha cutoff для dot-шейдера
    pub alpha_cutoff: f32,
}

/// Маркер: живой trial stimulus
///
/// Trial FSM строго последовательный, поэтому живых stimulus
/// одновременно максимум один.
#[derive(Component, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct Stimulus;

/// Компонент: деспавн entity после указанного времени
///
/// Система `expire_targets` проверяет время и удаляет entity;
/// host убирает визуал по `TargetRemoved` event.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DespawnAfter {
    /// Время деспавна (в секундах от старта симуляции)
    pub despawn_time: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_equality() {
        assert_eq!(Shade::Black, Shade::Black);
        assert_ne!(Shade::Black, Shade::White);
    }
}
