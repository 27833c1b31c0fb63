//! A CPU-rasterized sphere viewer.
//!
//! Generates a UV sphere once, transforms it through a fixed model-view-projection
//! pipeline, and fills every triangle into a software color/depth buffer with a
//! barycentric rasterizer. SDL2 is used only to open the window and show the
//! finished image.
//!
//! # Quick Start
//!
//! ```ignore
//! use sphere_viewer::prelude::*;
//!
//! let config = ViewerConfig::default();
//! let engine = Engine::new(&config)?;
//! let center = engine.pixel(256, 256);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod transform;
pub mod viewport;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::ViewerConfig;
pub use engine::{Engine, RenderStats};
pub use error::RenderError;
pub use mesh::{Mesh, SphereResolution};
pub use render::{barycentric, Barycentric, BufferState, Coverage};
pub use viewport::{Viewport, ViewportEvent};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use sphere_viewer::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::LookAtCamera;
    pub use crate::projection::Projection;
    pub use crate::transform::Transform;

    // Engine
    pub use crate::config::ViewerConfig;
    pub use crate::engine::{Engine, RenderStats};
    pub use crate::error::RenderError;
    pub use crate::mesh::{Face, Mesh, SphereResolution};
    pub use crate::pipeline::TransformPipeline;
    pub use crate::viewport::{Viewport, ViewportEvent};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{BarycentricRasterizer, FrameBuffer, Rasterizer, Triangle};
}
