//! ECS Components для experiment entities
//!
//! Организация по доменам:
//! - world: позиционирование и визуал (WorldPosition, PrefabPath)
//! - viewer: камера host'а (ViewerPose, HostPoseEvent)
//! - target: shootable dots и trial stimulus (Target, TargetAppearance, Stimulus, DespawnAfter)

pub mod target;
pub mod viewer;
pub mod world;

// Re-exports для удобного импорта
pub use target::*;
pub use viewer::*;
pub use world::*;
