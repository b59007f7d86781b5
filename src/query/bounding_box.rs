use crate::math::{Point3, Vector3};
use crate::shape::ShapeDescriptor;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a degenerate box around a single point.
    #[must_use]
    pub fn from_point(point: Point3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the box to include `point`.
    pub fn include(&mut self, point: &Point3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Returns the extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns `true` if `point` lies inside the box, within `tolerance`.
    #[must_use]
    pub fn contains(&self, point: &Point3, tolerance: f64) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] - tolerance && point[i] <= self.max[i] + tolerance)
    }
}

/// Computes the world-space bounding box of a set of shapes.
pub struct BoundingBox<'a> {
    shapes: &'a [ShapeDescriptor],
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(shapes: &'a [ShapeDescriptor]) -> Self {
        Self { shapes }
    }

    /// Executes the query, returning `None` for an empty shape set.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let mut points = self.shapes.iter().flat_map(ShapeDescriptor::world_vertices);
        let mut aabb = Aabb::from_point(points.next()?);
        for p in points {
            aabb.include(&p);
        }
        Some(aabb)
    }
}
