//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the off-axis
//! frustum (near-plane extents plus near/far distances) and generates the
//! projection matrix from it.

use crate::math::mat4::Mat4;

/// Off-axis perspective frustum.
///
/// The extents describe the near plane rectangle in view space; the viewport
/// aspect ratio is deliberately not folded in, so a non-square window stretches
/// the image the same way a fixed `glFrustum` would.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::symmetric(0.1, 0.1, 0.1, 1000.0)
    }
}

impl Projection {
    /// Creates a frustum from explicit near-plane extents.
    ///
    /// # Arguments
    /// * `left`, `right` - Horizontal extents of the near plane
    /// * `bottom`, `top` - Vertical extents of the near plane
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            z_near,
            z_far,
        }
    }

    /// Creates a frustum centred on the optical axis.
    pub fn symmetric(half_width: f32, half_height: f32, z_near: f32, z_far: f32) -> Self {
        Self::frustum(
            -half_width,
            half_width,
            -half_height,
            half_height,
            z_near,
            z_far,
        )
    }

    /// Returns `(left, right, bottom, top)` of the near plane.
    pub fn extents(&self) -> (f32, f32, f32, f32) {
        (self.left, self.right, self.bottom, self.top)
    }

    /// Returns the near clipping plane distance.
    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    /// Returns the far clipping plane distance.
    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Returns the vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        (self.top / self.z_near).atan() - (self.bottom / self.z_near).atan()
    }

    /// Generates the right-handed perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::frustum(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.z_near,
            self.z_far,
        )
    }
}
