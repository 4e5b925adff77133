//! Stimulus placement — две стратегии рандомизации позиции
//!
//! `BoundedBox`: uniform по каждой оси в world-space box (absolute режим).
//! `GazeAnnulus`: кольцо вокруг gaze point в плоскости, перпендикулярной
//! forward камеры; stimulus ориентирован лицом к камере (gaze-relative режим).
//!
//! Два режима — два варианта эксперимента, общий FSM.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::components::ViewerPose;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// Uniform в world-space box: каждая ось независимо в [min, max]
    BoundedBox { min: Vec3, max: Vec3 },

    /// Uniform-in-annulus вокруг точки взгляда
    ///
    /// Радиус uniform в [min_radius, max_radius], угол uniform в [0, 2π),
    /// offset в плоскости, перпендикулярной forward камеры.
    GazeAnnulus {
        /// Дистанция gaze point от камеры вдоль forward
        distance: f32,
        min_radius: f32,
        max_radius: f32,
    },
}

impl Default for PlacementStrategy {
    fn default() -> Self {
        Self::BoundedBox {
            min: Vec3::new(-2.0, 1.0, 2.0),
            max: Vec3::new(2.0, 3.0, 5.0),
        }
    }
}

/// Результат размещения: позиция + ориентация prefab'а
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StimulusPlacement {
    pub position: Vec3,
    /// Identity для BoundedBox; поворот +Z → камера для GazeAnnulus
    pub orientation: Quat,
}

impl PlacementStrategy {
    /// Сэмпл позиции stimulus (детерминированно от rng)
    pub fn sample(&self, viewer: &ViewerPose, rng: &mut ChaCha8Rng) -> StimulusPlacement {
        match *self {
            PlacementStrategy::BoundedBox { min, max } => {
                let position = Vec3::new(
                    sample_range(rng, min.x, max.x),
                    sample_range(rng, min.y, max.y),
                    sample_range(rng, min.z, max.z),
                );

                StimulusPlacement {
                    position,
                    orientation: Quat::IDENTITY,
                }
            }

            PlacementStrategy::GazeAnnulus {
                distance,
                min_radius,
                max_radius,
            } => {
                let center = viewer.gaze_point(distance);
                let (right, up) = facing_plane_basis(viewer.forward);

                let radius = sample_range(rng, min_radius, max_radius);
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let position = center + (right * angle.cos() + up * angle.sin()) * radius;

                let to_viewer = (viewer.position - position).normalize_or_zero();
                let orientation = if to_viewer == Vec3::ZERO {
                    Quat::IDENTITY
                } else {
                    Quat::from_rotation_arc(Vec3::Z, to_viewer)
                };

                StimulusPlacement {
                    position,
                    orientation,
                }
            }
        }
    }
}

/// `gen_range` паникует на пустом диапазоне — допускаем min == max (degenerate)
fn sample_range(rng: &mut ChaCha8Rng, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}

/// Ортонормальный базис плоскости, перпендикулярной forward
///
/// right = forward × world-up, fallback на X если forward вертикален.
pub(crate) fn facing_plane_basis(forward: Vec3) -> (Vec3, Vec3) {
    let forward = forward.normalize_or_zero();
    let forward = if forward == Vec3::ZERO { Vec3::Z } else { forward };

    let cross = forward.cross(Vec3::Y);
    let right = if cross.length_squared() < 1e-6 {
        Vec3::X
    } else {
        cross.normalize()
    };
    let up = right.cross(forward).normalize();

    (right, up)
}
