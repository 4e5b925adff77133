//! Trial FSM — состояния и тайминги цикла

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::placement::PlacementStrategy;

/// Конфигурация trial-сессии
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Общее число trials
    pub number_of_trials: u32,
    /// Сколько секунд stimulus видим
    pub stimulus_duration: f32,
    /// Перерыв между trials (секунды)
    pub break_duration: f32,
    /// Стратегия рандомизации позиции stimulus
    pub placement: PlacementStrategy,
    /// Prefab для host-визуала stimulus
    pub stimulus_prefab: String,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            number_of_trials: 500,
            stimulus_duration: 0.24, // 240 ms
            break_duration: 0.5,     // 500 ms
            placement: PlacementStrategy::default(),
            stimulus_prefab: "Prefabs/DoGStimulus".to_string(),
        }
    }
}

/// FSM состояния trial-цикла
///
/// Idle → (Presenting → Break) × N → Complete
///
/// Остаток dt переносится между фазами: суммарные длительности сходятся
/// к конфигу точно, без дрейфа от дискретного fixed тика.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum TrialState {
    /// Старт сессии (до первого тика)
    Idle,
    /// Stimulus на экране
    Presenting { trial: u32, remaining: f32 },
    /// Перерыв между trials
    Break { trial: u32, remaining: f32 },
    /// Все trials завершены (терминальное состояние)
    Complete,
}

impl Default for TrialState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Переход FSM за один тик
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialTransition {
    /// Начался trial (1..=N): cue + spawn stimulus
    TrialStarted { trial: u32 },
    /// Visible duration истёк: despawn stimulus
    StimulusOver { trial: u32 },
    /// Последний break завершён — сессия окончена
    SessionComplete,
}

impl TrialState {
    /// Продвинуть FSM на dt секунд
    ///
    /// Максимум один переход за вызов: dt тика много меньше любой
    /// длительности фазы.
    pub fn advance(&mut self, dt: f32, config: &TrialConfig) -> Option<TrialTransition> {
        match self {
            TrialState::Idle => {
                if config.number_of_trials == 0 {
                    *self = TrialState::Complete;
                    return Some(TrialTransition::SessionComplete);
                }

                *self = TrialState::Presenting {
                    trial: 1,
                    remaining: config.stimulus_duration,
                };
                Some(TrialTransition::TrialStarted { trial: 1 })
            }

            TrialState::Presenting { trial, remaining } => {
                *remaining -= dt;
                if *remaining > 0.0 {
                    return None;
                }

                let trial = *trial;
                let leftover = *remaining; // ≤ 0, переносим в break
                *self = TrialState::Break {
                    trial,
                    remaining: config.break_duration + leftover,
                };
                Some(TrialTransition::StimulusOver { trial })
            }

            TrialState::Break { trial, remaining } => {
                *remaining -= dt;
                if *remaining > 0.0 {
                    return None;
                }

                let done = *trial;
                let leftover = *remaining;
                if done < config.number_of_trials {
                    *self = TrialState::Presenting {
                        trial: done + 1,
                        remaining: config.stimulus_duration + leftover,
                    };
                    Some(TrialTransition::TrialStarted { trial: done + 1 })
                } else {
                    *self = TrialState::Complete;
                    Some(TrialTransition::SessionComplete)
                }
            }

            TrialState::Complete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, TrialState::Complete)
    }

    /// Номер текущего trial (None в Idle/Complete)
    pub fn current_trial(&self) -> Option<u32> {
        match self {
            TrialState::Presenting { trial, .. } | TrialState::Break { trial, .. } => Some(*trial),
            _ => None,
        }
    }
}
