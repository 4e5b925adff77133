//! Tests for trial FSM timing.

use super::state::{TrialConfig, TrialState, TrialTransition};

const DT: f32 = 1.0 / 60.0;

fn config(trials: u32) -> TrialConfig {
    TrialConfig {
        number_of_trials: trials,
        stimulus_duration: 0.24,
        break_duration: 0.5,
        ..Default::default()
    }
}

/// Прогоняет FSM до Complete, возвращает (starts, overs, ticks_to_complete)
fn run_to_completion(config: &TrialConfig, dt: f32) -> (u32, u32, u32) {
    let mut state = TrialState::default();
    let mut starts = 0;
    let mut overs = 0;

    for tick in 1..=1_000_000 {
        match state.advance(dt, config) {
            Some(TrialTransition::TrialStarted { .. }) => starts += 1,
            Some(TrialTransition::StimulusOver { .. }) => overs += 1,
            Some(TrialTransition::SessionComplete) => return (starts, overs, tick),
            None => {}
        }
    }
    panic!("FSM never completed");
}

#[test]
fn test_runs_exactly_number_of_trials() {
    let config = config(20);
    let (starts, overs, _) = run_to_completion(&config, DT);

    assert_eq!(starts, 20);
    assert_eq!(overs, 20);
}

#[test]
fn test_trial_numbers_are_sequential() {
    let config = config(5);
    let mut state = TrialState::default();
    let mut seen = Vec::new();

    for _ in 0..100_000 {
        if let Some(TrialTransition::TrialStarted { trial }) = state.advance(DT, &config) {
            seen.push(trial);
        }
        if state.is_complete() {
            break;
        }
    }

    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_session_duration_matches_config() {
    let config = config(5);
    let (_, _, ticks) = run_to_completion(&config, DT);

    // 5 × (0.24 + 0.5) = 3.7 s; остаток dt переносится между фазами,
    // поэтому завершение на первом тике после 3.7 s (+1 тик на Idle-переход)
    let total = ticks as f32 * DT;
    let expected = 5.0 * (0.24 + 0.5);
    assert!(total >= expected, "completed early: {} < {}", total, expected);
    assert!(
        total <= expected + 2.0 * DT,
        "completed late: {} > {}",
        total,
        expected
    );
}

#[test]
fn test_presenting_duration_in_ticks() {
    let config = config(1);
    let mut state = TrialState::default();

    // Первый тик: Idle → Presenting
    assert_eq!(
        state.advance(DT, &config),
        Some(TrialTransition::TrialStarted { trial: 1 })
    );

    let mut presenting_ticks = 1; // тик перехода — stimulus уже видим
    loop {
        match state.advance(DT, &config) {
            None => presenting_ticks += 1,
            Some(TrialTransition::StimulusOver { trial: 1 }) => break,
            other => panic!("unexpected transition {:?}", other),
        }
    }

    // 0.24 / (1/60) = 14.4 → StimulusOver на 15-м тике фазы
    assert_eq!(presenting_ticks, 15);
}

#[test]
fn test_leftover_dt_carries_into_break() {
    // dt не делит длительности нацело: без переноса остатка сессия
    // дрейфовала бы на тик за каждую фазу
    let config = config(10);
    let dt = 0.013;
    let (_, _, ticks) = run_to_completion(&config, dt);

    let total = ticks as f32 * dt;
    let expected = 10.0 * (0.24 + 0.5);
    assert!(total >= expected);
    assert!(total <= expected + 2.0 * dt);
}

#[test]
fn test_zero_trials_completes_immediately() {
    let config = config(0);
    let mut state = TrialState::default();

    assert_eq!(
        state.advance(DT, &config),
        Some(TrialTransition::SessionComplete)
    );
    assert!(state.is_complete());
}

#[test]
fn test_complete_is_terminal() {
    let config = config(1);
    let mut state = TrialState::Complete;

    for _ in 0..100 {
        assert_eq!(state.advance(DT, &config), None);
    }
    assert!(state.is_complete());
}

#[test]
fn test_no_overlap_between_trials() {
    // Между StimulusOver и следующим TrialStarted всегда break-пауза
    let config = config(3);
    let mut state = TrialState::default();
    let mut stimulus_visible = false;

    for _ in 0..100_000 {
        match state.advance(DT, &config) {
            Some(TrialTransition::TrialStarted { .. }) => {
                assert!(!stimulus_visible, "trial started while stimulus visible");
                stimulus_visible = true;
            }
            Some(TrialTransition::StimulusOver { .. }) => {
                assert!(stimulus_visible);
                stimulus_visible = false;
            }
            Some(TrialTransition::SessionComplete) => {
                assert!(!stimulus_visible);
                return;
            }
            None => {}
        }
    }
    panic!("FSM never completed");
}

#[test]
fn test_current_trial_reporting() {
    let config = config(2);
    let mut state = TrialState::default();

    assert_eq!(state.current_trial(), None);
    state.advance(DT, &config);
    assert_eq!(state.current_trial(), Some(1));
}
