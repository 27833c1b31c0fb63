//! Triangle rasterization.
//!
//! A [`Rasterizer`] turns one screen-space [`Triangle`] into depth-tested
//! pixel writes on a [`FrameBuffer`]. The only implementation is
//! [`BarycentricRasterizer`], a bounding-box walk with a barycentric inside test.

mod barycentric;

pub use barycentric::{barycentric, Barycentric, BarycentricRasterizer};

use super::framebuffer::FrameBuffer;
use crate::colors::Color;
use crate::math::vec3::Vec3;

/// A triangle ready for rasterization in screen space.
///
/// `points[i].x/y` are pixel coordinates and `points[i].z` is the NDC depth
/// used for the depth test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub color: Color,
}

impl Triangle {
    pub fn new(points: [Vec3; 3], color: Color) -> Self {
        Self { points, color }
    }
}

/// Per-triangle result of a fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coverage {
    /// The triangle had zero area or non-finite coordinates and touched nothing.
    Skipped,
    /// The triangle was walked. `covered` pixels passed the inside test and
    /// `written` of those also passed the depth test.
    Drawn { covered: usize, written: usize },
}

impl Coverage {
    pub fn covered(&self) -> usize {
        match self {
            Coverage::Skipped => 0,
            Coverage::Drawn { covered, .. } => *covered,
        }
    }

    pub fn written(&self) -> usize {
        match self {
            Coverage::Skipped => 0,
            Coverage::Drawn { written, .. } => *written,
        }
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a pixel buffer, which keeps
/// the render loop and the benchmarks independent of the coverage algorithm.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer with `triangle.color`.
    ///
    /// # Arguments
    /// * `triangle` - The triangle to rasterize
    /// * `buffer` - The frame buffer to draw into
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) -> Coverage;
}
