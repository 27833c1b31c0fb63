//! CPU-side buffers and triangle rasterization.

pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{
    barycentric, Barycentric, BarycentricRasterizer, Coverage, Rasterizer, Triangle,
};
pub use renderer::{BufferState, Renderer};
