//! Procedural latitude/longitude sphere mesh.
//!
//! The sphere is built from `latitude - 2` interior rings of `longitude`
//! vertices each, plus one vertex per pole. The first and last vertex of every
//! ring coincide (phi = 0 and phi = 2π), so the surface closes without
//! wrap-around indexing.

use std::f32::consts::PI;

use crate::error::RenderError;
use crate::math::vec4::Vec4;

/// One mesh face: three indices into the vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub const fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// Segment counts for a UV sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SphereResolution {
    longitude: u32,
    latitude: u32,
}

impl SphereResolution {
    pub const MIN_SEGMENTS: u32 = 3;

    /// `longitude` is the number of vertices per ring (W), `latitude` the number
    /// of latitude steps from pole to pole (H). Both must be at least 3.
    pub fn new(longitude: u32, latitude: u32) -> Result<Self, RenderError> {
        if longitude < Self::MIN_SEGMENTS || latitude < Self::MIN_SEGMENTS {
            return Err(RenderError::InvalidSphereResolution {
                longitude,
                latitude,
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> u32 {
        self.longitude
    }

    pub fn latitude(&self) -> u32 {
        self.latitude
    }

    /// Interior rings, excluding the poles.
    pub fn ring_count(&self) -> u32 {
        self.latitude - 2
    }

    /// `(H - 2) * W + 2`
    pub fn vertex_count(&self) -> usize {
        self.ring_count() as usize * self.longitude as usize + 2
    }

    /// Quad bands between adjacent rings plus one fan per pole.
    ///
    /// `(H - 3) * (W - 1) * 2 + 2 * (W - 1)`, which simplifies to
    /// `(H - 2) * (W - 1) * 2`.
    pub fn triangle_count(&self) -> usize {
        let steps = (self.longitude - 1) as usize;
        let bands = (self.ring_count() - 1) as usize;
        bands * steps * 2 + 2 * steps
    }
}

impl Default for SphereResolution {
    fn default() -> Self {
        Self {
            longitude: 32,
            latitude: 16,
        }
    }
}

/// An indexed triangle mesh with homogeneous vertex positions.
///
/// The mesh is immutable once built: every index is checked against the vertex
/// list at construction, so renderers can index without further validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec4>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Create a mesh, rejecting any face that indexes past the vertex list.
    pub fn new(vertices: Vec<Vec4>, faces: Vec<Face>) -> Result<Self, RenderError> {
        let vertex_count = vertices.len();
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&index) = face
                .indices()
                .iter()
                .find(|&&i| i as usize >= vertex_count)
            {
                return Err(RenderError::IndexOutOfRange {
                    face: face_index,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Generate a unit UV sphere centred at the origin.
    ///
    /// Deterministic: the same resolution always yields the same mesh.
    pub fn uv_sphere(resolution: SphereResolution) -> Result<Self, RenderError> {
        let width = resolution.longitude();
        let height = resolution.latitude();

        let mut vertices = Vec::with_capacity(resolution.vertex_count());
        for j in 1..height - 1 {
            let theta = j as f32 / (height - 1) as f32 * PI;
            for i in 0..width {
                let phi = i as f32 / (width - 1) as f32 * PI * 2.0;
                vertices.push(Vec4::point(
                    theta.sin() * phi.cos(),
                    theta.cos(),
                    -theta.sin() * phi.sin(),
                ));
            }
        }
        vertices.push(Vec4::point(0.0, 1.0, 0.0));
        vertices.push(Vec4::point(0.0, -1.0, 0.0));

        let mut faces = Vec::with_capacity(resolution.triangle_count());

        // Two triangles per quad between ring j and ring j + 1
        for j in 0..height - 3 {
            for i in 0..width - 1 {
                let curr = j * width + i;
                faces.push(Face::new(curr, curr + width + 1, curr + 1));
                faces.push(Face::new(curr, curr + width, curr + width + 1));
            }
        }

        let north = (height - 2) * width;
        let south = north + 1;
        let last_ring = (height - 3) * width;
        for i in 0..width - 1 {
            faces.push(Face::new(north, i, i + 1));
            faces.push(Face::new(south, last_ring + i + 1, last_ring + i));
        }

        debug_assert_eq!(vertices.len(), resolution.vertex_count());
        debug_assert_eq!(faces.len(), resolution.triangle_count());

        Self::new(vertices, faces)
    }

    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Flattened index list, three entries per face.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.faces.iter().flat_map(|face| face.indices())
    }

    /// The three vertices of a face.
    #[inline]
    pub fn face_vertices(&self, face: &Face) -> [Vec4; 3] {
        [
            self.vertices[face.a as usize],
            self.vertices[face.b as usize],
            self.vertices[face.c as usize],
        ]
    }
}
