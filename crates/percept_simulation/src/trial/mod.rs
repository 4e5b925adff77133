//! Trial runner — последовательный цикл предъявления стимулов
//!
//! Каждый trial: cue tone → stimulus в случайной позиции → visible duration →
//! destroy → break duration → следующий. Строго последовательно, без overlap:
//! FSM гарантирует максимум один живой `Stimulus`.
//!
//! ECS ответственность: FSM, тайминги, placement, события для host.
//! Host ответственность: визуал stimulus prefab, audio playback.

use bevy::prelude::*;

pub mod events;
pub mod placement;
pub mod state;
pub mod systems;

// Re-export основных типов
pub use events::*;
pub use placement::*;
pub use state::*;

#[cfg(test)]
mod state_tests;

/// Trial Plugin
///
/// Регистрирует trial FSM в FixedUpdate (фаза `SimulationSet::Trial`).
/// Cue clip синтезируется на Startup, если host не вставил свой.
pub struct TrialPlugin;

impl Plugin for TrialPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrialConfig>()
            .init_resource::<TrialState>()
            .init_resource::<crate::audio::CueTone>()
            .init_resource::<crate::components::ViewerPose>()
            .add_event::<TrialStarted>()
            .add_event::<StimulusPresented>()
            .add_event::<StimulusCleared>()
            .add_event::<SessionComplete>()
            .add_event::<crate::audio::CueRequested>()
            .add_systems(Startup, crate::audio::ensure_cue_clip)
            .add_systems(
                FixedUpdate,
                systems::trial_fsm_tick.in_set(crate::SimulationSet::Trial),
            );
    }
}
