//! Minimal linear algebra for the transform pipeline.

pub mod mat4;
pub mod vec3;
pub mod vec4;
