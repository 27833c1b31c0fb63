//! Flat RGB colors and conversion to the display's pixel format.
//!
//! The frame buffer stores three `f32` channels per pixel in the normalized
//! `[0, 1]` range. The SDL texture expects ARGB8888, top row first.

/// An RGB color with normalized float channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0);
pub const FILL: Color = Color::new(1.0, 1.0, 1.0);

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Read a color back from an RGB triple.
    pub fn from_slice(rgb: &[f32]) -> Option<Self> {
        match *rgb {
            [r, g, b] => Some(Self::new(r, g, b)),
            _ => None,
        }
    }

    /// Pack into ARGB8888 with full alpha. Channels are clamped to `[0, 1]`.
    pub fn to_argb8888(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        0xFF00_0000 | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

/// Pack a bottom-up RGB float image into top-down ARGB8888 bytes.
///
/// Row 0 of `rgb` is the bottom scanline (NDC y points up); SDL textures start at
/// the top, so rows are emitted in reverse. `out` is cleared and reused.
pub fn pack_argb8888_flipped(rgb: &[f32], width: u32, height: u32, out: &mut Vec<u8>) {
    let row_len = width as usize * 3;
    debug_assert_eq!(rgb.len(), row_len * height as usize);

    out.clear();
    if row_len == 0 {
        return;
    }
    out.reserve(width as usize * height as usize * 4);
    for row in rgb.chunks_exact(row_len).rev() {
        for pixel in row.chunks_exact(3) {
            let color = Color::new(pixel[0], pixel[1], pixel[2]);
            out.extend_from_slice(&color.to_argb8888().to_ne_bytes());
        }
    }
}
