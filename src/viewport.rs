//! Viewport dimensions and the events that change them.

use crate::error::RenderError;

/// Validated output dimensions in pixels.
///
/// Both dimensions are non-zero and `width * height * 3` fits in a `usize`, so
/// buffers sized from a `Viewport` can always be allocated and indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport {
                width: width.into(),
                height: height.into(),
            });
        }

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or(RenderError::ViewportTooLarge { width, height })?;

        Ok(Self { width, height })
    }

    /// Build a viewport from signed dimensions as reported by windowing events.
    ///
    /// Zero or negative values are rejected instead of being wrapped.
    pub fn from_signed(width: i32, height: i32) -> Result<Self, RenderError> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => Self::new(w, h),
            _ => Err(RenderError::InvalidViewport {
                width: width.into(),
                height: height.into(),
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels covered by the viewport.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Messages the display layer sends to the render context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    /// The drawable area changed; buffers must be rebuilt and re-rendered
    /// before the next frame is shown.
    Resized { width: i32, height: i32 },
}
