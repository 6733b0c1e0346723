use glam::Vec3;

use crate::math::Plane;

/// What the plane extractor needs to know about a camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrustumParams {
    pub position: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub near: f32,
    pub far: f32,
    pub fov_y: f32, // Degrees.
    pub aspect: f32,
}

/// The six bounding planes `[near, far, left, right, top, bottom]`.
///
/// Every normal points into the frustum, so a point is inside a plane's half
/// space when its signed distance is positive. The side planes all pass
/// through the camera position.
pub fn frustum_planes(params: &FrustumParams) -> [Plane; 6] {
    let FrustumParams {
        position,
        forward,
        right,
        up,
        near,
        far,
        fov_y,
        aspect,
    } = *params;

    let half_v_side = far * (fov_y.to_radians() / 2.0).tan();
    let half_h_side = half_v_side * aspect;
    let front_mult_far = forward * far;

    [
        Plane::new(position + forward * near, forward),
        Plane::new(position + front_mult_far, -forward),
        Plane::new(position, up.cross(front_mult_far + right * half_h_side)),
        Plane::new(position, (front_mult_far - right * half_h_side).cross(up)),
        Plane::new(position, right.cross(front_mult_far - up * half_v_side)),
        Plane::new(position, (front_mult_far + up * half_v_side).cross(right)),
    ]
}

/// Whether a sphere is at least partly inside all six planes.
///
/// Conservative: a sphere is only rejected when it lies wholly outside one of
/// the planes, so spheres just beyond a corner of the frustum still pass.
/// A sphere centred on a plane counts as inside it, even with zero radius.
pub fn test_bounding_sphere(planes: &[Plane; 6], center: Vec3, radius: f32) -> bool {
    planes
        .iter()
        .all(|plane| plane.signed_distance(center) >= -radius)
}

/// A snapshot of a camera's frustum for culling one frame's worth of objects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CullingFrustum {
    planes: [Plane; 6],
}

impl CullingFrustum {
    pub fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    pub fn from_params(params: &FrustumParams) -> Self {
        Self::new(frustum_planes(params))
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    pub fn contains_sphere(&self, center: Vec3, radius: f32) -> bool {
        test_bounding_sphere(&self.planes, center, radius)
    }

    /// Keeps the positions whose bounding spheres of `radius` may be visible.
    pub fn filter_visible<I>(&self, positions: I, radius: f32) -> impl Iterator<Item = Vec3>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let planes = self.planes;
        positions
            .into_iter()
            .filter(move |&center| test_bounding_sphere(&planes, center, radius))
    }
}
