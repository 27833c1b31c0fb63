//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - View and projection matrices follow the right-handed OpenGL convention
//!   (camera looks down -Z, clip-space depth in [-w, w])
//!
//! # Example
//! ```ignore
//! let model = Mat4::translation(0.0, 0.0, -7.0) * Mat4::scaling(2.0, 2.0, 2.0);
//! let clip = projection * view * model * vertex;
//! ```

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]` with column-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last column (column-major convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a right-handed view matrix.
    ///
    /// The camera sits at `eye` and looks toward `target`; after the transform
    /// the viewing direction is -Z and `up` is projected onto +Y.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - The up direction of the camera.
    pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        // Basis vectors as rows, forward negated so the camera looks down -Z
        Self::new([
            [right.x, right.y, right.z, -right.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates an off-axis perspective frustum (OpenGL `glFrustum` layout).
    ///
    /// `left`/`right`/`bottom`/`top` are the extents of the near plane in view
    /// space; `near` and `far` are positive distances along -Z. Points on the near
    /// plane map to clip-space depth `-w`, points on the far plane to `+w`.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Mat4::new([
            [2.0 * near / width, 0.0, (right + left) / width, 0.0],
            [0.0, 2.0 * near / height, (top + bottom) / height, 0.0],
            [0.0, 0.0, -(far + near) / depth, -2.0 * far * near / depth],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-major convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x
                + self.data[r][1] * v.y
                + self.data[r][2] * v.z
                + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_leaves_point_untouched() {
        let p = Vec4::point(1.0, -2.0, 3.0);
        assert_eq!(Mat4::identity() * p, p);
    }

    #[test]
    fn multiplication_applies_right_to_left() {
        // Scale first, then translate
        let m = Mat4::translation(0.0, 0.0, -7.0) * Mat4::scaling(2.0, 2.0, 2.0);
        let p = m * Vec4::point(0.0, 0.0, 1.0);
        assert_relative_eq!(p.z, -5.0);
        assert_relative_eq!(p.w, 1.0);
    }

    #[test]
    fn look_at_down_negative_z_is_identity() {
        let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::UP);
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_relative_eq!(view.get(row, col), expected, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn look_at_moves_target_onto_negative_z() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UP);
        let origin = view * Vec4::point(0.0, 0.0, 0.0);
        assert_relative_eq!(origin.z, -5.0, epsilon = 1e-5);
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn frustum_maps_near_and_far_planes_to_clip_bounds() {
        let proj = Mat4::frustum(-0.1, 0.1, -0.1, 0.1, 0.1, 1000.0);

        let near = proj * Vec4::point(0.0, 0.0, -0.1);
        assert_relative_eq!(near.z / near.w, -1.0, epsilon = 1e-4);

        let far = proj * Vec4::point(0.0, 0.0, -1000.0);
        assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn frustum_maps_near_plane_corner_to_ndc_corner() {
        let proj = Mat4::frustum(-0.1, 0.1, -0.2, 0.2, 0.1, 10.0);
        let corner = proj * Vec4::point(0.1, 0.2, -0.1);
        assert_relative_eq!(corner.x / corner.w, 1.0, epsilon = 1e-5);
        assert_relative_eq!(corner.y / corner.w, 1.0, epsilon = 1e-5);
    }
}
