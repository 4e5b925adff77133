//! Ray–sphere пересечение против active set dots

use bevy::prelude::*;

/// Результат пересечения луча со сферой
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Дистанция вдоль луча до точки пересечения
    pub distance: f32,
    /// Точка пересечения (на поверхности сферы)
    pub point: Vec3,
}

/// Пересечение луча (origin, unit direction) со сферой (center, radius)
///
/// Возвращает ближайшее неотрицательное t: луч изнутри сферы попадает
/// в заднюю стенку. None — мимо или сфера целиком позади origin.
/// direction обязан быть нормализован.
pub fn ray_sphere_intersection(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<RayHit> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;

    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t_near = -b - sqrt_d;
    let t = if t_near >= 0.0 { t_near } else { -b + sqrt_d };
    if t < 0.0 {
        return None;
    }

    Some(RayHit {
        distance: t,
        point: origin + direction * t,
    })
}

/// Ближайший hit среди targets в пределах max_distance
///
/// targets: (entity, центр hit-сферы, радиус). Возвращает также центр —
/// он нужен для accuracy (дистанция hit point → центр).
pub fn nearest_target_hit(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    targets: impl Iterator<Item = (Entity, Vec3, f32)>,
) -> Option<(Entity, RayHit, Vec3)> {
    let mut nearest: Option<(Entity, RayHit, Vec3)> = None;

    for (entity, center, radius) in targets {
        let Some(hit) = ray_sphere_intersection(origin, direction, center, radius) else {
            continue;
        };
        if hit.distance > max_distance {
            continue;
        }

        if nearest
            .as_ref()
            .map_or(true, |(_, best, _)| hit.distance < best.distance)
        {
            nearest = Some((entity, hit, center));
        }
    }

    nearest
}
