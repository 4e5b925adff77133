//! Headless запуск PERCEPT симуляции
//!
//! Короткая сессия без host'а: фиксированный viewer pose, синтетические
//! trigger press'ы раз в секунду. Для проверки таймингов и детерминизма.

use bevy::prelude::*;
use percept_simulation::{
    create_headless_app, world_snapshot, HostInputEvent, HostPoseEvent, Score, TrialConfig,
    TrialState, WorldPosition,
};

fn main() {
    let seed = 42;
    println!("Starting PERCEPT headless session (seed: {})", seed);

    let mut app = create_headless_app(seed);

    // Короткая сессия вместо полных 500 trials
    app.insert_resource(TrialConfig {
        number_of_trials: 5,
        ..Default::default()
    });

    // Host обычно шлёт pose каждый кадр; для статичной камеры хватает одного
    app.world_mut().send_event(HostPoseEvent::ViewerMoved {
        position: Vec3::new(0.0, 1.6, 0.0),
        forward: Vec3::Z,
    });

    let viewer_origin = Vec3::new(0.0, 1.6, 0.0);
    let started = std::time::Instant::now();
    let mut last_press = started;
    let mut ticks: u64 = 0;
    let mut completed = false;

    // FixedUpdate идёт по wall clock: крутим update пока сессия не
    // завершится (guard на 60 s — 5 trials занимают ~3.7 s)
    while started.elapsed().as_secs() < 60 {
        app.update();
        ticks += 1;

        if last_press.elapsed().as_secs_f32() >= 1.0 {
            // Раз в секунду жмём триггер вперёд
            last_press = std::time::Instant::now();
            app.world_mut().send_event(HostInputEvent::TriggerPressed {
                origin: viewer_origin,
                direction: Vec3::Z,
            });
        }

        if app.world().resource::<TrialState>().is_complete() {
            completed = true;
            break;
        }
    }

    if completed {
        println!(
            "Session complete after {} updates ({:.1} s)",
            ticks,
            started.elapsed().as_secs_f32()
        );
    } else {
        println!("Session did not complete within the time limit");
    }

    let snapshot = world_snapshot::<WorldPosition>(app.world_mut());
    println!("World snapshot: {} bytes", snapshot.len());

    let score = app.world().resource::<Score>();
    println!("Final {}", score.display_text());
}
