//! Bounding-box rasterization with barycentric coverage.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's screen-space bounding box and clip it to the buffer
//! 2. For each pixel center `P` in the box, solve for barycentric weights
//!    `(u, v, w)` of `P` with respect to triangle `ABC`
//! 3. The pixel is covered iff all three weights are `>= 0`
//! 4. Depth is `u·zA + v·zB + w·zC`, then tested against the depth buffer
//!
//! # Barycentric Solve
//!
//! With `v0 = B - A`, `v1 = C - A` and `v2 = P - A` (x/y only):
//!
//! ```text
//! d00 = v0·v0   d01 = v0·v1   d11 = v1·v1
//! d20 = v2·v0   d21 = v2·v1
//! denom = d00·d11 - d01²
//! v = (d11·d20 - d01·d21) / denom
//! w = (d00·d21 - d01·d20) / denom
//! u = 1 - v - w
//! ```
//!
//! `denom` is `(2·area)²`, so it is zero for collinear or coincident vertices.
//! Those triangles are skipped before any pixel is visited.
//!
//! # Fill Convention
//!
//! Edges are inclusive on all three sides and no top-left tie-break is applied.
//! A pixel center lying exactly on an edge shared by two triangles is covered by
//! both; the depth test keeps whichever wrote first unless the second is nearer.
//! Winding order does not matter.

use super::{Coverage, Rasterizer, Triangle};
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBuffer;

/// Relative tolerance on `denom / (d00·d11)`, i.e. on `sin²` of the angle at A.
const DEGENERATE_TOLERANCE: f32 = f32::EPSILON;

/// Barycentric weights of a point with respect to a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentric {
    pub u: f32,
    pub v: f32,
    pub w: f32,
}

impl Barycentric {
    /// Inclusive inside test: every weight is non-negative.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.u >= 0.0 && self.v >= 0.0 && self.w >= 0.0
    }

    /// Weighted sum of three per-vertex values.
    #[inline]
    pub fn interpolate(&self, a: f32, b: f32, c: f32) -> f32 {
        self.u * a + self.v * b + self.w * c
    }
}

/// Per-triangle terms of the barycentric solve that don't depend on the pixel.
struct BarycentricSolver {
    origin: Vec3,
    v0: Vec3,
    v1: Vec3,
    d00: f32,
    d01: f32,
    d11: f32,
    inv_denom: f32,
}

impl BarycentricSolver {
    /// Returns `None` for degenerate or non-finite triangles.
    fn new(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return None;
        }

        let v0 = b - a;
        let v1 = c - a;
        let d00 = v0.dot_xy(v0);
        let d01 = v0.dot_xy(v1);
        let d11 = v1.dot_xy(v1);
        let denom = d00 * d11 - d01 * d01;

        if !denom.is_finite() || denom <= DEGENERATE_TOLERANCE * d00 * d11 {
            return None;
        }

        Some(Self {
            origin: a,
            v0,
            v1,
            d00,
            d01,
            d11,
            inv_denom: 1.0 / denom,
        })
    }

    #[inline]
    fn solve(&self, p: Vec3) -> Barycentric {
        let v2 = p - self.origin;
        let d20 = v2.dot_xy(self.v0);
        let d21 = v2.dot_xy(self.v1);

        let v = (self.d11 * d20 - self.d01 * d21) * self.inv_denom;
        let w = (self.d00 * d21 - self.d01 * d20) * self.inv_denom;
        Barycentric {
            u: 1.0 - v - w,
            v,
            w,
        }
    }
}

/// Barycentric weights of `p` in triangle `abc`, using x/y only.
///
/// Returns `None` when the triangle is degenerate (zero area) or any input
/// coordinate is not finite, instead of producing NaN weights.
pub fn barycentric(a: Vec3, b: Vec3, c: Vec3, p: Vec3) -> Option<Barycentric> {
    BarycentricSolver::new(a, b, c).map(|solver| solver.solve(p))
}

/// Triangle rasterizer using a bounding box walk and barycentric inside test.
///
/// Every pixel center in the clipped bounding box is tested, which is simple and
/// exact at the cost of visiting many outside pixels for thin triangles.
#[derive(Debug, Default, Clone, Copy)]
pub struct BarycentricRasterizer;

impl BarycentricRasterizer {
    /// Creates a new barycentric rasterizer instance.
    pub fn new() -> Self {
        BarycentricRasterizer
    }
}

impl Rasterizer for BarycentricRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) -> Coverage {
        let [a, b, c] = triangle.points;

        let Some(solver) = BarycentricSolver::new(a, b, c) else {
            return Coverage::Skipped;
        };

        // ─────────────────────────────────────────────────────────────────────
        // Step 1: Bounding box, clipped to the buffer
        // ─────────────────────────────────────────────────────────────────────
        let min_x = (a.x.min(b.x).min(c.x).floor() as i32).max(0);
        let max_x = (a.x.max(b.x).max(c.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (a.y.min(b.y).min(c.y).floor() as i32).max(0);
        let max_y = (a.y.max(b.y).max(c.y).ceil() as i32).min(buffer.height() as i32 - 1);

        // ─────────────────────────────────────────────────────────────────────
        // Step 2: Test every pixel center, depth-test the covered ones
        // ─────────────────────────────────────────────────────────────────────
        let mut covered = 0;
        let mut written = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);
                let weights = solver.solve(p);
                if !weights.is_inside() {
                    continue;
                }

                covered += 1;
                let depth = weights.interpolate(a.z, b.z, c.z);
                if buffer.set_pixel_with_depth(x, y, depth, triangle.color) {
                    written += 1;
                }
            }
        }

        Coverage::Drawn { covered, written }
    }
}
