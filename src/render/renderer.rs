//! Owning storage for the color and depth buffers.
//!
//! Provides the [`Renderer`] struct which owns both buffers, tracks their
//! lifecycle, and hands out [`FrameBuffer`] views for rasterization.

use super::framebuffer::FrameBuffer;
use crate::colors::{self, Color};
use crate::viewport::Viewport;

/// Lifecycle of the buffers.
///
/// `Uninitialized -> Sized` on allocation, `Sized -> Rendered` once a full pass
/// has been drawn. Every resize goes back through a fresh allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    Uninitialized,
    Sized,
    Rendered,
}

pub struct Renderer {
    color_buffer: Vec<f32>,
    depth_buffer: Vec<f32>,
    viewport: Option<Viewport>,
    state: BufferState,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// An unallocated renderer. Call [`Renderer::resize`] before drawing.
    pub fn new() -> Self {
        Self {
            color_buffer: Vec::new(),
            depth_buffer: Vec::new(),
            viewport: None,
            state: BufferState::Uninitialized,
        }
    }

    /// Reallocate both buffers for `viewport` and fill them with `background`
    /// and `+inf` depth. Any previous image is discarded.
    pub fn resize(&mut self, viewport: Viewport, background: Color) {
        let size = viewport.pixel_count();
        let rgb = background.to_array();
        self.color_buffer = rgb.iter().copied().cycle().take(size * 3).collect();
        self.depth_buffer = vec![f32::INFINITY; size];
        self.viewport = Some(viewport);
        self.state = BufferState::Sized;
    }

    /// Reset both buffers in place for a new pass.
    pub fn clear(&mut self, background: Color) {
        let rgb = background.to_array();
        for pixel in self.color_buffer.chunks_exact_mut(3) {
            pixel.copy_from_slice(&rgb);
        }
        self.depth_buffer.fill(f32::INFINITY);
        if self.state == BufferState::Rendered {
            self.state = BufferState::Sized;
        }
    }

    pub fn mark_rendered(&mut self) {
        debug_assert_ne!(self.state, BufferState::Uninitialized);
        self.state = BufferState::Rendered;
    }

    pub fn state(&self) -> BufferState {
        self.state
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn width(&self) -> u32 {
        self.viewport.map_or(0, |vp| vp.width())
    }

    pub fn height(&self) -> u32 {
        self.viewport.map_or(0, |vp| vp.height())
    }

    /// Flat RGB floats, `width * height * 3` long, bottom row first.
    pub fn color_buffer(&self) -> &[f32] {
        &self.color_buffer
    }

    /// One depth value per pixel; `+inf` where nothing was drawn.
    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth_buffer
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        let vp = self.viewport?;
        (x < vp.width() && y < vp.height()).then(|| y as usize * vp.width() as usize + x as usize)
    }

    /// Color at (x, y), row 0 at the bottom. None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let idx = self.index(x, y)?;
        Color::from_slice(&self.color_buffer[idx * 3..idx * 3 + 3])
    }

    /// Depth at (x, y). None if out of bounds.
    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        let (width, height) = (self.width(), self.height());
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            width,
            height,
        )
    }

    /// Pack the color buffer into top-down ARGB8888 bytes for presentation.
    pub fn write_argb8888(&self, out: &mut Vec<u8>) {
        colors::pack_argb8888_flipped(&self.color_buffer, self.width(), self.height(), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BACKGROUND, FILL};

    #[test]
    fn starts_uninitialized_and_empty() {
        let renderer = Renderer::new();
        assert_eq!(renderer.state(), BufferState::Uninitialized);
        assert!(renderer.color_buffer().is_empty());
        assert!(renderer.depth_buffer().is_empty());
        assert_eq!(renderer.viewport(), None);
    }

    #[test]
    fn resize_allocates_cleared_buffers() {
        let mut renderer = Renderer::new();
        renderer.resize(Viewport::new(4, 3).unwrap(), Color::new(0.5, 0.5, 0.5));

        assert_eq!(renderer.state(), BufferState::Sized);
        assert_eq!(renderer.color_buffer().len(), 4 * 3 * 3);
        assert_eq!(renderer.depth_buffer().len(), 4 * 3);
        assert!(renderer.color_buffer().iter().all(|&c| c == 0.5));
        assert!(renderer.depth_buffer().iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn resize_discards_previous_contents() {
        let mut renderer = Renderer::new();
        renderer.resize(Viewport::new(2, 2).unwrap(), BACKGROUND);
        renderer.as_framebuffer().set_pixel_with_depth(0, 0, 0.1, FILL);
        renderer.mark_rendered();

        renderer.resize(Viewport::new(2, 2).unwrap(), BACKGROUND);
        assert_eq!(renderer.state(), BufferState::Sized);
        assert!(renderer.color_buffer().iter().all(|&c| c == 0.0));
        assert!(renderer.depth_buffer().iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn clear_resets_rendered_state() {
        let mut renderer = Renderer::new();
        renderer.resize(Viewport::new(1, 1).unwrap(), BACKGROUND);
        renderer.as_framebuffer().set_pixel_with_depth(0, 0, 0.1, FILL);
        renderer.mark_rendered();

        renderer.clear(BACKGROUND);
        assert_eq!(renderer.state(), BufferState::Sized);
        assert_eq!(renderer.color_buffer(), &[0.0, 0.0, 0.0]);
        assert_eq!(renderer.depth_buffer(), &[f32::INFINITY]);
    }

    #[test]
    fn argb_output_has_four_bytes_per_pixel() {
        let mut renderer = Renderer::new();
        renderer.resize(Viewport::new(3, 2).unwrap(), BACKGROUND);
        let mut bytes = Vec::new();
        renderer.write_argb8888(&mut bytes);
        assert_eq!(bytes.len(), 3 * 2 * 4);
    }
}
