//! Core rendering engine.
//!
//! The [`Engine`] is the render context: it owns the sphere mesh, the fixed
//! transform pipeline and the color/depth buffers, and redraws the full image
//! whenever the viewport changes. Nothing is shared globally; the display layer
//! holds the engine and feeds it [`ViewportEvent`]s.

use log::{debug, info, trace};

use crate::colors::{self, Color};
use crate::config::ViewerConfig;
use crate::error::RenderError;
use crate::mesh::Mesh;
use crate::pipeline::TransformPipeline;
use crate::render::{
    BarycentricRasterizer, BufferState, Coverage, Rasterizer, Renderer, Triangle,
};
use crate::viewport::{Viewport, ViewportEvent};

/// Counters for one render pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    /// Triangles submitted to the rasterizer.
    pub triangles: usize,
    /// Triangles skipped as degenerate or non-finite.
    pub skipped: usize,
    /// Pixels that passed the inside test, summed over triangles.
    pub covered: usize,
    /// Pixels that also passed the depth test.
    pub written: usize,
}

impl RenderStats {
    fn record(&mut self, coverage: Coverage) {
        self.triangles += 1;
        match coverage {
            Coverage::Skipped => self.skipped += 1,
            Coverage::Drawn { covered, written } => {
                self.covered += covered;
                self.written += written;
            }
        }
    }
}

pub struct Engine {
    mesh: Mesh,
    pipeline: TransformPipeline,
    renderer: Renderer,
    rasterizer: BarycentricRasterizer,
    background: Color,
    fill: Color,
    stats: RenderStats,
}

impl Engine {
    /// Build the mesh once, size the buffers for the configured window and draw
    /// the first frame.
    pub fn new(config: &ViewerConfig) -> Result<Self, RenderError> {
        let viewport = config.viewport()?;
        let mesh = Mesh::uv_sphere(config.sphere)?;
        info!(
            "generated sphere {}x{}: {} vertices, {} triangles",
            config.sphere.longitude(),
            config.sphere.latitude(),
            mesh.vertex_count(),
            mesh.face_count()
        );

        let mut engine =
            Self::with_mesh(mesh, config.pipeline()).with_colors(config.background, config.fill);
        engine.resize(viewport);
        Ok(engine)
    }

    /// A context with no buffers yet. Nothing is drawn until the first resize.
    pub fn with_mesh(mesh: Mesh, pipeline: TransformPipeline) -> Self {
        Self {
            mesh,
            pipeline,
            renderer: Renderer::new(),
            rasterizer: BarycentricRasterizer::new(),
            background: colors::BACKGROUND,
            fill: colors::FILL,
            stats: RenderStats::default(),
        }
    }

    pub fn with_colors(mut self, background: Color, fill: Color) -> Self {
        self.background = background;
        self.fill = fill;
        self
    }

    /// Apply a display event. Invalid dimensions are rejected and leave the
    /// current buffers and image untouched.
    pub fn handle_event(&mut self, event: ViewportEvent) -> Result<RenderStats, RenderError> {
        match event {
            ViewportEvent::Resized { width, height } => {
                let viewport = Viewport::from_signed(width, height)?;
                Ok(self.resize(viewport))
            }
        }
    }

    /// Reallocate the buffers for `viewport` and redraw from scratch.
    pub fn resize(&mut self, viewport: Viewport) -> RenderStats {
        info!("viewport resized to {}x{}", viewport.width(), viewport.height());
        self.renderer.resize(viewport, self.background);
        self.render()
    }

    /// Redraw the whole image. Does nothing before the first resize.
    pub fn render(&mut self) -> RenderStats {
        let Some(viewport) = self.renderer.viewport() else {
            return RenderStats::default();
        };

        self.renderer.clear(self.background);
        let mut stats = RenderStats::default();
        let mut fb = self.renderer.as_framebuffer();

        for (index, face) in self.mesh.faces().iter().enumerate() {
            let points = self
                .mesh
                .face_vertices(face)
                .map(|vertex| self.pipeline.project(vertex, viewport));
            let coverage = self
                .rasterizer
                .fill_triangle(&Triangle::new(points, self.fill), &mut fb);
            if coverage == Coverage::Skipped {
                trace!("skipped degenerate triangle {index}: {points:?}");
            }
            stats.record(coverage);
        }

        self.renderer.mark_rendered();
        debug!(
            "rendered {}x{}: {} triangles ({} skipped), {} pixels covered, {} written",
            viewport.width(),
            viewport.height(),
            stats.triangles,
            stats.skipped,
            stats.covered,
            stats.written
        );
        self.stats = stats;
        stats
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn pipeline(&self) -> &TransformPipeline {
        &self.pipeline
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.renderer.viewport()
    }

    pub fn state(&self) -> BufferState {
        self.renderer.state()
    }

    /// Statistics of the most recent render pass.
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// The rendered image: RGB floats, `width * height * 3`, bottom row first.
    pub fn color_buffer(&self) -> &[f32] {
        self.renderer.color_buffer()
    }

    pub fn depth_buffer(&self) -> &[f32] {
        self.renderer.depth_buffer()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.renderer.pixel(x, y)
    }

    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        self.renderer.depth(x, y)
    }

    /// Pack the current image for the display (ARGB8888, top row first).
    pub fn write_argb8888(&self, out: &mut Vec<u8>) {
        self.renderer.write_argb8888(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BACKGROUND, FILL};
    use crate::math::mat4::Mat4;
    use crate::math::vec4::Vec4;
    use crate::mesh::Face;

    fn engine() -> Engine {
        Engine::new(&ViewerConfig::default()).unwrap()
    }

    fn resized(width: i32, height: i32) -> ViewportEvent {
        ViewportEvent::Resized { width, height }
    }

    #[test]
    fn sphere_covers_center_and_not_corner() {
        let engine = engine();
        assert_eq!(engine.viewport(), Some(Viewport::new(512, 512).unwrap()));

        assert_eq!(engine.pixel(256, 256), Some(FILL));
        let center_depth = engine.depth(256, 256).unwrap();
        assert!(center_depth.is_finite());
        assert!(center_depth > -1.0 && center_depth < 1.0);

        assert_eq!(engine.pixel(0, 0), Some(BACKGROUND));
        assert_eq!(engine.depth(0, 0), Some(f32::INFINITY));
    }

    #[test]
    fn sphere_silhouette_is_bounded() {
        let engine = engine();
        // Radius 2 at distance 7 subtends ~0.30 NDC, about 76 pixels at 512
        assert_eq!(engine.pixel(256 + 70, 256), Some(FILL));
        assert_eq!(engine.pixel(256 + 85, 256), Some(BACKGROUND));
        assert_eq!(engine.pixel(256, 256 - 70), Some(FILL));
        assert_eq!(engine.pixel(256, 256 - 85), Some(BACKGROUND));
    }

    #[test]
    fn every_pixel_is_background_or_fill() {
        let engine = engine();
        for y in 0..512 {
            for x in 0..512 {
                let color = engine.pixel(x, y).unwrap();
                let depth = engine.depth(x, y).unwrap();
                assert!(!depth.is_nan());
                if depth.is_infinite() {
                    assert_eq!(color, BACKGROUND);
                } else {
                    assert_eq!(color, FILL);
                }
            }
        }
    }

    #[test]
    fn first_frame_is_rendered() {
        let engine = engine();
        let stats = engine.stats();

        assert_eq!(engine.state(), BufferState::Rendered);
        assert_eq!(stats.triangles, engine.mesh().face_count());
        assert!(stats.written > 0);
        assert!(stats.covered >= stats.written);
    }

    #[test]
    fn rerender_is_byte_identical() {
        let mut engine = engine();
        let color = engine.color_buffer().to_vec();
        let depth = engine.depth_buffer().to_vec();

        let stats = engine.render();
        assert_eq!(engine.color_buffer(), color.as_slice());
        assert_eq!(engine.depth_buffer(), depth.as_slice());
        assert_eq!(stats, engine.stats());
    }

    #[test]
    fn resize_round_trip_matches_fresh_render() {
        let mut engine = engine();
        engine.handle_event(resized(300, 200)).unwrap();
        assert_eq!(engine.color_buffer().len(), 300 * 200 * 3);
        assert_eq!(engine.depth_buffer().len(), 300 * 200);
        assert_eq!(engine.state(), BufferState::Rendered);

        engine.handle_event(resized(512, 512)).unwrap();
        let fresh = self::engine();
        assert_eq!(engine.color_buffer(), fresh.color_buffer());
        assert_eq!(engine.depth_buffer(), fresh.depth_buffer());
    }

    #[test]
    fn resize_renders_before_returning() {
        let mut engine = engine();
        let stats = engine.handle_event(resized(128, 64)).unwrap();

        assert_eq!(engine.state(), BufferState::Rendered);
        assert!(stats.written > 0);
        assert_eq!(engine.pixel(64, 32), Some(FILL));
    }

    #[test]
    fn invalid_resize_keeps_previous_frame() {
        let mut engine = engine();
        let before = engine.color_buffer().to_vec();

        assert_eq!(
            engine.handle_event(resized(0, 512)),
            Err(RenderError::InvalidViewport {
                width: 0,
                height: 512
            })
        );
        assert!(engine.handle_event(resized(512, -1)).is_err());

        assert_eq!(engine.viewport(), Some(Viewport::new(512, 512).unwrap()));
        assert_eq!(engine.color_buffer(), before.as_slice());
        assert_eq!(engine.state(), BufferState::Rendered);
    }

    #[test]
    fn context_without_viewport_draws_nothing() {
        let mut engine = Engine::with_mesh(
            Mesh::uv_sphere(Default::default()).unwrap(),
            TransformPipeline::default(),
        );
        assert_eq!(engine.state(), BufferState::Uninitialized);
        assert_eq!(engine.render(), RenderStats::default());
        assert!(engine.color_buffer().is_empty());
        assert_eq!(engine.pixel(0, 0), None);
    }

    #[test]
    fn invalid_configured_viewport_is_rejected() {
        let config = ViewerConfig {
            width: 0,
            ..ViewerConfig::default()
        };
        assert!(matches!(
            Engine::new(&config),
            Err(RenderError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn overlapping_faces_resolve_to_nearer_regardless_of_order() {
        let vertices = vec![
            // Lower-left half of the viewport at depth 0.2, lower-right half at 0.8
            Vec4::new(-1.0, -1.0, 0.2, 1.0),
            Vec4::new(1.0, -1.0, 0.2, 1.0),
            Vec4::new(-1.0, 1.0, 0.2, 1.0),
            Vec4::new(-1.0, -1.0, 0.8, 1.0),
            Vec4::new(1.0, -1.0, 0.8, 1.0),
            Vec4::new(1.0, 1.0, 0.8, 1.0),
        ];
        let near = Face::new(0, 1, 2);
        let far = Face::new(3, 4, 5);
        let identity = TransformPipeline::new(Mat4::identity(), Mat4::identity(), Mat4::identity());

        let render = |faces: Vec<Face>| {
            let mesh = Mesh::new(vertices.clone(), faces).unwrap();
            let mut engine = Engine::with_mesh(mesh, identity);
            engine.resize(Viewport::new(16, 16).unwrap());
            engine
        };

        let near_first = render(vec![near, far]);
        let far_first = render(vec![far, near]);

        assert_eq!(near_first.color_buffer(), far_first.color_buffer());
        assert_eq!(near_first.depth_buffer(), far_first.depth_buffer());

        // (4, 4) lies inside both triangles
        let depth = near_first.depth(4, 4).unwrap();
        approx::assert_relative_eq!(depth, 0.2, epsilon = 1e-6);
        // (12, 4) only inside the far one
        let depth = near_first.depth(12, 4).unwrap();
        approx::assert_relative_eq!(depth, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn argb_output_matches_viewport() {
        let engine = engine();
        let mut bytes = Vec::new();
        engine.write_argb8888(&mut bytes);
        assert_eq!(bytes.len(), 512 * 512 * 4);

        // Top-left byte row is the buffer's last row, left pixel: background
        let first = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        assert_eq!(first, BACKGROUND.to_argb8888());
    }
}
