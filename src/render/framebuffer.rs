//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into color and depth buffers with bounds-checked access.
//! The depth buffer enables hidden surface removal via the z-buffer algorithm.

use crate::colors::Color;

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass buffers + dimensions together.
///
/// # Layout
///
/// The color buffer holds three `f32` channels per pixel, row-major, row 0 at
/// the bottom of the image. The depth buffer holds one NDC depth per pixel;
/// `+inf` means nothing has been drawn there and smaller values are closer.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [f32],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if buffer lengths don't match width * height
    pub fn new(
        color_buffer: &'a mut [f32],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        let pixels = width as usize * height as usize;
        debug_assert_eq!(
            color_buffer.len(),
            pixels * 3,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            pixels,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is strictly less than the stored
    /// depth (closer to the camera). Ties keep the first writer. Returns whether
    /// the pixel was written; out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: Color) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.color_buffer[idx * 3..idx * 3 + 3].copy_from_slice(&color.to_array());
            true
        } else {
            false
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let idx = self.index(x, y)?;
        Color::from_slice(&self.color_buffer[idx * 3..idx * 3 + 3])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BACKGROUND, FILL};

    #[test]
    fn nearer_depth_overwrites() {
        let mut color = vec![0.0; 2 * 2 * 3];
        let mut depth = vec![f32::INFINITY; 4];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 2, 2);

        assert!(fb.set_pixel_with_depth(1, 0, 0.5, FILL));
        assert!(!fb.set_pixel_with_depth(1, 0, 0.7, BACKGROUND));
        assert!(!fb.set_pixel_with_depth(1, 0, 0.5, BACKGROUND));

        assert_eq!(fb.get_pixel(1, 0), Some(FILL));
        assert_eq!(fb.get_depth(1, 0), Some(0.5));
        assert_eq!(fb.get_depth(0, 0), Some(f32::INFINITY));
    }

    #[test]
    fn pixel_layout_is_row_major_rgb() {
        let mut color = vec![0.0; 3 * 2 * 3];
        let mut depth = vec![f32::INFINITY; 6];
        {
            let mut fb = FrameBuffer::new(&mut color, &mut depth, 3, 2);
            fb.set_pixel_with_depth(2, 1, 0.0, Color::new(0.25, 0.5, 0.75));
        }
        let idx = (3 + 2) * 3;
        assert_eq!(&color[idx..idx + 3], &[0.25, 0.5, 0.75]);
        assert_eq!(depth[5], 0.0);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut color = vec![0.0; 3];
        let mut depth = vec![f32::INFINITY; 1];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 1, 1);

        assert!(!fb.set_pixel_with_depth(-1, 0, 0.0, FILL));
        assert!(!fb.set_pixel_with_depth(0, 1, 0.0, FILL));
        assert_eq!(fb.get_pixel(1, 0), None);
        assert_eq!(fb.get_depth(0, -1), None);
    }
}
