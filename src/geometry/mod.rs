mod plane_geometry;
mod triangle_geometry;

pub use plane_geometry::PlaneGeometry;
pub use triangle_geometry::{triangle, TriangleGeometry, TRIANGLE_COMPONENTS};

use serde::{Deserialize, Serialize};

use crate::math::Point3;

/// Local-frame geometry carried by a shape descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// A centered rectangle in the local XY plane.
    Plane(PlaneGeometry),
    /// A single indexed triangular face.
    Triangle(TriangleGeometry),
}

impl Geometry {
    /// Returns the local-frame vertices.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3> {
        match self {
            Self::Plane(plane) => plane.corners().to_vec(),
            Self::Triangle(tri) => tri.vertices().to_vec(),
        }
    }

    /// Returns the face indices into [`Geometry::vertices`].
    #[must_use]
    pub fn indices(&self) -> Vec<[u32; 3]> {
        match self {
            Self::Plane(_) => PlaneGeometry::INDICES.to_vec(),
            Self::Triangle(tri) => vec![tri.indices()],
        }
    }

    /// Returns the surface area.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Plane(plane) => plane.area(),
            Self::Triangle(tri) => tri.area(),
        }
    }
}

impl From<PlaneGeometry> for Geometry {
    fn from(plane: PlaneGeometry) -> Self {
        Self::Plane(plane)
    }
}

impl From<TriangleGeometry> for Geometry {
    fn from(tri: TriangleGeometry) -> Self {
        Self::Triangle(tri)
    }
}
