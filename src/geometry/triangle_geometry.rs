use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

/// Number of flat components a triangle is built from (3 vertices × xyz).
pub const TRIANGLE_COMPONENTS: usize = 9;

/// A single triangular face with explicit vertices.
///
/// Winding follows vertex order `0, 1, 2`. Zero-area triangles are valid
/// and simply render as nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleGeometry {
    vertices: [Point3; 3],
}

impl TriangleGeometry {
    /// Creates a triangle from three points.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Returns the single face index triple.
    #[must_use]
    pub fn indices(&self) -> [u32; 3] {
        [0, 1, 2]
    }

    /// Returns the flat `[x0, y0, z0, x1, ..]` vertex buffer.
    #[must_use]
    pub fn to_flat(&self) -> [f64; TRIANGLE_COMPONENTS] {
        let [a, b, c] = self.vertices;
        [a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z]
    }

    /// Returns the non-normalized face normal `(v1 - v0) × (v2 - v0)`.
    #[must_use]
    pub fn cross(&self) -> Vector3 {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a))
    }

    /// Returns the unit face normal, or `None` for a degenerate triangle.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3> {
        self.cross().try_normalize(crate::math::TOLERANCE)
    }

    /// Returns the triangle area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.cross().norm() * 0.5
    }
}

/// Builds a triangle from exactly nine flat components
/// (three consecutive `x, y, z` triples).
///
/// # Errors
///
/// Returns [`GeometryError::VertexCount`] if `vertices` does not hold
/// exactly [`TRIANGLE_COMPONENTS`] values.
pub fn triangle(vertices: &[f64]) -> Result<TriangleGeometry> {
    let v: &[f64; TRIANGLE_COMPONENTS] =
        vertices.try_into().map_err(|_| GeometryError::VertexCount {
            expected: TRIANGLE_COMPONENTS,
            found: vertices.len(),
        })?;
    Ok(TriangleGeometry::new(
        Point3::new(v[0], v[1], v[2]),
        Point3::new(v[3], v[4], v[5]),
        Point3::new(v[6], v[7], v[8]),
    ))
}
