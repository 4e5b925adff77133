//! Viewer (HMD camera) pose — host authoritative

use bevy::prelude::*;

/// Поза камеры viewer'а, синхронизируется host'ом через `HostPoseEvent`
///
/// Пока host не прислал ни одного event — pose неизвестна (`is_known = false`):
/// системы используют fallback (world origin, +Z forward), пишут warning
/// и НЕ прерывают сессию.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ViewerPose {
    pub position: Vec3,
    /// Unit-вектор взгляда
    pub forward: Vec3,
    /// false = host ещё не синхронизировал pose
    pub is_known: bool,
}

impl Default for ViewerPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
            is_known: false,
        }
    }
}

impl ViewerPose {
    /// Точка взгляда на дистанции `distance` вдоль forward
    pub fn gaze_point(&self, distance: f32) -> Vec3 {
        self.position + self.forward * distance
    }
}

/// Pose события от host (камера двигалась)
///
/// Host присылает каждый кадр или реже — симуляции достаточно
/// последнего значения на момент FixedUpdate тика.
#[derive(Event, Debug, Clone)]
pub enum HostPoseEvent {
    ViewerMoved { position: Vec3, forward: Vec3 },
}

/// Система: применение HostPoseEvent к ViewerPose
///
/// Forward нормализуется; нулевой вектор от host'а игнорируем
/// (оставляем предыдущий forward).
pub fn apply_viewer_pose(
    mut pose: ResMut<ViewerPose>,
    mut events: EventReader<HostPoseEvent>,
) {
    for event in events.read() {
        let HostPoseEvent::ViewerMoved { position, forward } = event;

        let forward = forward.normalize_or_zero();
        if forward == Vec3::ZERO {
            crate::logger::log_warning("viewer pose update with zero forward, keeping previous");
            pose.position = *position;
            pose.is_known = true;
            continue;
        }

        pose.position = *position;
        pose.forward = forward;
        pose.is_known = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pose_is_unknown_origin() {
        let pose = ViewerPose::default();
        assert!(!pose.is_known);
        assert_eq!(pose.position, Vec3::ZERO);
        assert_eq!(pose.forward, Vec3::Z);
    }

    #[test]
    fn test_gaze_point_along_forward() {
        let pose = ViewerPose {
            position: Vec3::new(0.0, 1.6, 0.0),
            forward: Vec3::Z,
            is_known: true,
        };

        assert_eq!(pose.gaze_point(3.0), Vec3::new(0.0, 1.6, 3.0));
    }
}
