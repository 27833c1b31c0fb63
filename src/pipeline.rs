//! Vertex transform pipeline: model -> view -> clip -> screen.
//!
//! Clip space is never clipped against. Perspective division is applied
//! unconditionally, so a vertex with `w == 0` yields non-finite screen
//! coordinates and a vertex behind the eye lands at a mirrored position. The
//! rasterizer is responsible for discarding non-finite triangles.

use crate::camera::LookAtCamera;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::projection::Projection;
use crate::transform::Transform;
use crate::viewport::Viewport;

/// The fixed model, view and projection matrices, plus their product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPipeline {
    model: Mat4,
    view: Mat4,
    projection: Mat4,
    model_view_projection: Mat4,
}

impl TransformPipeline {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model,
            view,
            projection,
            model_view_projection: projection * view * model,
        }
    }

    pub fn from_scene(model: &Transform, camera: &LookAtCamera, projection: &Projection) -> Self {
        Self::new(model.to_matrix(), camera.view_matrix(), projection.matrix())
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// `projection * view * model * vertex`
    #[inline]
    pub fn to_clip(&self, vertex: Vec4) -> Vec4 {
        self.model_view_projection * vertex
    }

    /// Model space straight to screen space.
    #[inline]
    pub fn project(&self, vertex: Vec4, viewport: Viewport) -> Vec3 {
        viewport_transform(self.to_clip(vertex), viewport)
    }
}

impl Default for TransformPipeline {
    /// Sphere of radius 2 seven units in front of a camera at the origin.
    fn default() -> Self {
        let mut model = Transform::new();
        model.set_position_xyz(0.0, 0.0, -7.0).set_scale_uniform(2.0);
        Self::from_scene(&model, &LookAtCamera::default(), &Projection::default())
    }
}

/// Map a clip-space vertex to pixel coordinates.
///
/// x and y go from NDC `[-1, 1]` to `[0, width]` and `[0, height]`; y is not
/// flipped, so row 0 is the bottom of the image. z keeps the NDC depth
/// (`clip.z / clip.w`) as the depth-test key.
#[inline]
pub fn viewport_transform(clip: Vec4, viewport: Viewport) -> Vec3 {
    let ndc = clip.perspective_divide();
    Vec3::new(
        (ndc.x * 0.5 + 0.5) * viewport.width() as f32,
        (ndc.y * 0.5 + 0.5) * viewport.height() as f32,
        ndc.z,
    )
}
