use std::fmt;

use glam::Vec3;
use tracing::warn;

/// A plane through `point` with unit `normal`. `d` is `normal · point`, so the
/// plane is every `p` with `normal · p = d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        let normal = normalize_or_keep(normal);
        Self {
            point,
            normal,
            d: normal.dot(point),
        }
    }

    /// Positive on the side the normal points to.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p - self.point)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})x+({})y+({})z={}",
            self.normal.x, self.normal.y, self.normal.z, self.d
        )
    }
}

/// Unit vector in the direction of `v`, or `v` itself if it has no usable
/// direction (zero length, infinite or NaN).
pub fn normalize_or_keep(v: Vec3) -> Vec3 {
    match v.try_normalize() {
        Some(n) => n,
        None => {
            warn!(vector = ?v, "cannot normalize degenerate vector, keeping it as is");
            v
        }
    }
}

/// Clamps a movement vector to unit length and drops its vertical component.
///
/// A vector that points straight up or down has nothing left once flattened;
/// it is returned unchanged.
pub fn flatten_onto_ground(v: Vec3) -> Vec3 {
    let clamped = v.clamp_length_max(1.0);
    let flat = Vec3::new(clamped.x, 0.0, clamped.z);

    if flat.length_squared() <= f32::EPSILON && clamped.y != 0.0 {
        warn!(vector = ?v, "movement is parallel to the vertical axis, leaving it unflattened");
        return v;
    }

    flat
}
