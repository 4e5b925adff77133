//! Cue tone synthesis — бип в начале каждого trial
//!
//! ECS ответственность: PCM данные (sine wave), если host не дал свой клип.
//! Host ответственность: собственно playback (audio output — tactical layer).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Стандартный audio sample rate
pub const CUE_SAMPLE_RATE: u32 = 44_100;

/// Параметры генерируемого бипа
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CueTone {
    /// Частота в герцах
    pub frequency_hz: f32,
    /// Длительность в секундах
    pub duration_secs: f32,
}

impl Default for CueTone {
    fn default() -> Self {
        Self {
            frequency_hz: 1000.0,
            duration_secs: 0.1, // 100 ms
        }
    }
}

impl CueTone {
    /// Синтез mono PCM: sin(2π·f·i / rate), ceil(rate × duration) сэмплов
    pub fn synthesize(&self) -> CueClip {
        let sample_len = (CUE_SAMPLE_RATE as f32 * self.duration_secs).ceil() as usize;
        let mut samples = Vec::with_capacity(sample_len);

        for i in 0..sample_len {
            let t = i as f32 / CUE_SAMPLE_RATE as f32;
            samples.push((2.0 * std::f32::consts::PI * self.frequency_hz * t).sin());
        }

        CueClip {
            samples,
            sample_rate: CUE_SAMPLE_RATE,
        }
    }
}

/// PCM клип cue-бипа
///
/// Host может вставить свой ресурс до старта (записанный asset) —
/// тогда синтез не выполняется.
#[derive(Resource, Debug, Clone)]
pub struct CueClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// Event: проиграть cue в указанной позиции (ECS → host audio)
///
/// Host берёт PCM из ресурса `CueClip` и играет spatial в `position`.
#[derive(Event, Debug, Clone)]
pub struct CueRequested {
    pub position: Vec3,
}

/// Startup система: синтезирует CueClip, если host не предоставил свой
pub fn ensure_cue_clip(
    mut commands: Commands,
    tone: Res<CueTone>,
    clip: Option<Res<CueClip>>,
) {
    if clip.is_some() {
        return;
    }

    commands.insert_resource(tone.synthesize());
    crate::logger::log(&format!(
        "Cue clip not supplied by host, synthesized {} Hz / {} s sine beep",
        tone.frequency_hz, tone.duration_secs
    ));
}
