//! Trial FSM tick system

use bevy::prelude::*;

use crate::audio::CueRequested;
use crate::components::{PrefabPath, Stimulus, ViewerPose, WorldPosition};
use crate::{logger, DeterministicRng};

use super::{
    PlacementStrategy, SessionComplete, StimulusCleared, StimulusPresented, TrialConfig,
    TrialStarted, TrialState, TrialTransition,
};

/// Система: один тик trial FSM
///
/// Переходы:
/// - TrialStarted: cue в позиции stimulus + spawn Stimulus entity
/// - StimulusOver: despawn живых Stimulus (идемпотентно: query видит только живые)
/// - SessionComplete: терминальный лог + event для host
pub fn trial_fsm_tick(
    mut commands: Commands,
    mut state: ResMut<TrialState>,
    config: Res<TrialConfig>,
    viewer: Res<ViewerPose>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time>,
    stimuli: Query<Entity, With<Stimulus>>,
    mut trial_started: EventWriter<TrialStarted>,
    mut presented: EventWriter<StimulusPresented>,
    mut cleared: EventWriter<StimulusCleared>,
    mut cue_requested: EventWriter<CueRequested>,
    mut session_complete: EventWriter<SessionComplete>,
) {
    let Some(transition) = state.advance(time.delta_secs(), &config) else {
        return;
    };

    match transition {
        TrialTransition::TrialStarted { trial } => {
            if matches!(config.placement, PlacementStrategy::GazeAnnulus { .. }) && !viewer.is_known
            {
                logger::log_warning(
                    "trial placement: viewer pose unknown, annulus around world origin",
                );
            }

            let placement = config.placement.sample(&viewer, &mut rng.rng);

            // Cue в позиции stimulus (spatial playback hint для host)
            cue_requested.write(CueRequested {
                position: placement.position,
            });

            let entity = commands
                .spawn((
                    Stimulus,
                    WorldPosition(placement.position),
                    PrefabPath {
                        path: config.stimulus_prefab.clone(),
                    },
                ))
                .id();

            presented.write(StimulusPresented {
                entity,
                position: placement.position,
                orientation: placement.orientation,
                prefab: config.stimulus_prefab.clone(),
            });
            trial_started.write(TrialStarted {
                trial,
                position: placement.position,
            });

            logger::log_info(&format!("Trial {} at position {:?}", trial, placement.position));
        }

        TrialTransition::StimulusOver { trial } => {
            for entity in stimuli.iter() {
                commands.entity(entity).despawn();
                cleared.write(StimulusCleared { entity, trial });
            }
        }

        TrialTransition::SessionComplete => {
            logger::log_info("All trials complete");
            session_complete.write(SessionComplete {
                trials_run: config.number_of_trials,
            });
        }
    }
}
