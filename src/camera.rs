//! Fixed look-at camera.
//!
//! # Coordinate System
//!
//! Uses a **right-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer (the camera looks down -Z)

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// A camera defined by an eye position, a target point and an up hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAtCamera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
}

impl Default for LookAtCamera {
    /// Camera at the origin looking down -Z with +Y up.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::UP)
    }
}

impl LookAtCamera {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit vector from the eye toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// World space -> view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = LookAtCamera::default();
        assert_relative_eq!(camera.forward().z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.forward().x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn default_view_leaves_points_in_place() {
        let view = LookAtCamera::default().view_matrix();
        let p = view * Vec4::point(1.0, 2.0, -7.0);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, -7.0, epsilon = 1e-6);
    }

    #[test]
    fn view_matrix_places_target_in_front() {
        let camera = LookAtCamera::new(Vec3::new(3.0, 0.0, 0.0), Vec3::ZERO, Vec3::UP);
        let target = camera.view_matrix() * Vec4::point(0.0, 0.0, 0.0);

        // Three units in front of the camera, on the optical axis
        assert_relative_eq!(target.z, -3.0, epsilon = 1e-5);
        assert_relative_eq!(target.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target.y, 0.0, epsilon = 1e-5);
    }
}
