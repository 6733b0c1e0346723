use glam::{Mat4, Quat, Vec3};

use crate::{
    frustum::{self, FrustumParams},
    math::Plane,
};

/// A perspective camera with lazily derived matrices and frustum planes.
///
/// Setters only record the new value and mark the camera dirty. The view and
/// projection matrices and the frustum planes are rebuilt on the next read.
#[derive(Clone, Debug)]
pub struct Camera {
    position: Vec3,
    rotation: Vec3, // Pitch, yaw and roll in degrees.
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    near: f32,
    far: f32,
    fov_y: f32, // Degrees.
    aspect: f32,
    view: Mat4,
    projection: Mat4,
    frustum_planes: [Plane; 6],
    is_dirty: bool,
}

impl Camera {
    pub fn new(near: f32, far: f32, fov_y: f32, aspect: f32) -> Self {
        let placeholder = Plane::new(Vec3::ZERO, Vec3::Z);
        let mut camera = Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            near,
            far,
            fov_y,
            aspect,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            frustum_planes: [placeholder; 6],
            is_dirty: true,
        };
        camera.clean();
        camera
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.is_dirty = true;
    }

    /// Yaw turns about the world Y axis first, then pitch tilts about the
    /// turned X axis, then roll spins about the view direction.
    pub fn set_rotation(&mut self, pitch: f32, yaw: f32, roll: f32) {
        self.rotation = Vec3::new(pitch, yaw, roll);

        let rotation = Quat::from_rotation_y(yaw.to_radians())
            * Quat::from_rotation_x(pitch.to_radians())
            * Quat::from_rotation_z(roll.to_radians());
        self.forward = rotation * Vec3::NEG_Z;
        self.right = rotation * Vec3::X;
        self.up = rotation * Vec3::Y;

        self.is_dirty = true;
    }

    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.is_dirty = true;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Pitch, yaw and roll in degrees.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view_matrix(&mut self) -> Mat4 {
        self.clean();
        self.view
    }

    pub fn projection_matrix(&mut self) -> Mat4 {
        self.clean();
        self.projection
    }

    /// `[near, far, left, right, top, bottom]`.
    pub fn frustum_planes(&mut self) -> [Plane; 6] {
        self.clean();
        self.frustum_planes
    }

    pub fn frustum_params(&self) -> FrustumParams {
        FrustumParams {
            position: self.position,
            forward: self.forward,
            right: self.right,
            up: self.up,
            near: self.near,
            far: self.far,
            fov_y: self.fov_y,
            aspect: self.aspect,
        }
    }

    fn clean(&mut self) {
        if !self.is_dirty {
            return;
        }

        self.view = Mat4::look_at_rh(self.position, self.position + self.forward, self.up);
        self.projection =
            Mat4::perspective_rh_gl(self.fov_y.to_radians(), self.aspect, self.near, self.far);
        self.frustum_planes = frustum::frustum_planes(&self.frustum_params());
        self.is_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec4, vec3};

    use super::*;
    use crate::frustum::test_bounding_sphere;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a} != {b}");
    }

    #[test]
    fn test_default_basis_looks_down_negative_z() {
        let camera = Camera::new(1.0, 10.0, 90.0, 1.0);
        assert_eq!(camera.forward(), Vec3::NEG_Z);
        assert_eq!(camera.right(), Vec3::X);
        assert_eq!(camera.up(), Vec3::Y);
    }

    #[test]
    fn test_yaw_turns_left_and_pitch_looks_up() {
        let mut camera = Camera::new(1.0, 10.0, 90.0, 1.0);

        camera.set_rotation(0.0, 90.0, 0.0);
        assert_close(camera.forward(), Vec3::NEG_X);
        assert_close(camera.right(), Vec3::NEG_Z);

        camera.set_rotation(30.0, 0.0, 0.0);
        assert!(camera.forward().y > 0.0);
        assert_close(camera.right(), Vec3::X);

        // Pitch happens in the turned frame, so the right vector stays level.
        camera.set_rotation(-40.0, 135.0, 0.0);
        assert!(camera.right().y.abs() < 1e-6);
        assert!((camera.forward().dot(camera.up())).abs() < 1e-6);
    }

    #[test]
    fn test_frustum_planes_follow_position_lazily() {
        let mut camera = Camera::new(1.0, 10.0, 90.0, 1.0);
        let target = vec3(0.0, 0.0, -5.0);

        assert!(test_bounding_sphere(&camera.frustum_planes(), target, 1.0));

        camera.set_position(vec3(0.0, 0.0, -12.0));
        assert!(!test_bounding_sphere(&camera.frustum_planes(), target, 1.0));

        camera.set_rotation(0.0, 180.0, 0.0);
        assert!(test_bounding_sphere(&camera.frustum_planes(), target, 1.0));
    }

    #[test]
    fn test_frustum_planes_match_extractor() {
        let mut camera = Camera::new(0.5, 30.0, 60.0, 1.5);
        camera.set_position(vec3(3.0, 1.0, 2.0));
        camera.set_rotation(-10.0, 25.0, 0.0);

        let expected = frustum::frustum_planes(&camera.frustum_params());
        assert_eq!(camera.frustum_planes(), expected);
    }

    #[test]
    fn test_view_matrix_moves_camera_to_origin() {
        let mut camera = Camera::new(1.0, 10.0, 90.0, 1.0);
        camera.set_position(vec3(2.0, 3.0, 4.0));

        let view = camera.view_matrix();
        let eye = view * Vec4::new(2.0, 3.0, 4.0, 1.0);
        assert_close(eye.truncate(), Vec3::ZERO);

        let ahead = view * Vec4::new(2.0, 3.0, 0.0, 1.0);
        assert_close(ahead.truncate(), vec3(0.0, 0.0, -4.0));
    }

    #[test]
    fn test_projection_tracks_aspect_ratio() {
        let mut camera = Camera::new(1.0, 10.0, 90.0, 1.0);
        let square = camera.projection_matrix();

        camera.set_aspect_ratio(2.0);
        let wide = camera.projection_matrix();

        assert!((square.x_axis.x - 1.0).abs() < 1e-5);
        assert!((wide.x_axis.x - 0.5).abs() < 1e-5);
        assert_eq!(square.y_axis.y, wide.y_axis.y);
    }
}
