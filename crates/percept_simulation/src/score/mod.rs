//! Score accumulator — running total мини-игры
//!
//! ECS ответственность: total + формат строки для UI.
//! Host ответственность: сам UI text widget (обновляется по `ScoreChanged`).

use bevy::prelude::*;

/// Суммарный счёт сессии
///
/// Только растёт: нет decay, нет reset в пределах сессии.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Score {
    total: f32,
}

impl Score {
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Добавить очки (отрицательные не ожидаются — clamp на 0)
    pub fn add_points(&mut self, points: f32) {
        self.total += points.max(0.0);
    }

    /// Строка для UI text widget: целое с округлением, "Score: 36"
    pub fn display_text(&self) -> String {
        format!("Score: {}", self.total.round() as i64)
    }
}

/// Event: счёт изменился — host немедленно обновляет UI text
#[derive(Event, Debug, Clone)]
pub struct ScoreChanged {
    pub total: f32,
    /// Готовая строка для text widget
    pub display: String,
}

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>().add_event::<ScoreChanged>();
    }
}
