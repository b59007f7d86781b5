use crate::math::{Point3, Vector3};
use crate::shape::ShapeDescriptor;

use super::TriangleMesh;

/// Tessellates a set of shapes into a single world-space mesh.
///
/// A plane contributes 4 vertices and 2 triangles, a triangle 3 vertices
/// and 1 triangle. Shapes keep their order, so triangle ranges follow draw
/// order.
pub struct Tessellate<'a> {
    shapes: &'a [ShapeDescriptor],
}

impl<'a> Tessellate<'a> {
    /// Creates a new `Tessellate` operation.
    #[must_use]
    pub fn new(shapes: &'a [ShapeDescriptor]) -> Self {
        Self { shapes }
    }

    /// Executes the tessellation.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::default();
        for shape in self.shapes {
            let base = mesh.vertices.len() as u32;
            let vertices = shape.world_vertices();
            let normal = face_normal(shape, &vertices);

            mesh.normals.extend(std::iter::repeat_n(normal, vertices.len()));
            mesh.colors.extend(std::iter::repeat_n(shape.color, vertices.len()));
            mesh.vertices.extend(vertices);
            mesh.indices.extend(
                shape
                    .geometry
                    .indices()
                    .into_iter()
                    .map(|[a, b, c]| [base + a, base + b, base + c]),
            );
        }
        mesh
    }
}

/// World-space unit normal of a shape, or zero if the shape is degenerate.
fn face_normal(shape: &ShapeDescriptor, verts: &[Point3]) -> Vector3 {
    let indices = shape.geometry.indices();
    let Some([a, b, c]) = indices.first().copied() else {
        return Vector3::zeros();
    };
    let (a, b, c) = (verts[a as usize], verts[b as usize], verts[c as usize]);
    (b - a)
        .cross(&(c - a))
        .try_normalize(crate::math::TOLERANCE)
        .unwrap_or_else(Vector3::zeros)
}
