//! Model transform for the rendered object.
//!
//! Provides a [`Transform`] struct with a fluent API for position and scale.
//! The sphere never rotates, so there is no orientation component.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// A model transform with position and scale.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xyz(0.0, 0.0, -7.0)
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Position ============

    /// Get the position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the position.
    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    /// Set the position from x, y, z components.
    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    // ============ Scale ============

    /// Get the scale.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set uniform scale (same value for x, y, z).
    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    // ============ Matrix Generation ============

    /// Generate the model matrix.
    ///
    /// Order: Translation * Scale (scale applied first, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }
}
