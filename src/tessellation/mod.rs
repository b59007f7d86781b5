mod tessellate_shapes;

pub use tessellate_shapes::Tessellate;

use crate::color::Color;
use crate::math::{Point3, Vector3};

/// A world-space triangle mesh built from shape descriptors.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals. Zero for vertices of degenerate faces.
    pub normals: Vec<Vector3>,
    /// Vertex colors.
    pub colors: Vec<Color>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the three corners of triangle `i`.
    #[must_use]
    pub fn triangle(&self, i: usize) -> Option<[Point3; 3]> {
        let [a, b, c] = *self.indices.get(i)?;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }
}
