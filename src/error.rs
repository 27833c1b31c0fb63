//! Error types for the rendering core.

use thiserror::Error;

/// Errors raised while building the mesh or (re)sizing the render context.
///
/// Nothing here is raised mid-render: once a pass starts it always runs to
/// completion, and degenerate triangles are skipped rather than reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid viewport {width}x{height}: both dimensions must be positive")]
    InvalidViewport { width: i64, height: i64 },

    #[error("viewport {width}x{height} is too large to allocate")]
    ViewportTooLarge { width: u32, height: u32 },

    #[error(
        "invalid sphere resolution {longitude}x{latitude}: both segment counts must be at least 3"
    )]
    InvalidSphereResolution { longitude: u32, latitude: u32 },

    #[error("face {face} references vertex {index}, but the mesh only has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}
