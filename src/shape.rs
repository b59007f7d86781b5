use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Geometry, PlaneGeometry, TriangleGeometry};
use crate::math::{Point3, Rotation};
use crate::model::WallSlot;

/// Which side of the shed's center line a mirrored roof part sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The `+` side of the axis (slope 1 on +Y, gable 1 on +X).
    Positive,
    /// The `-` side of the axis.
    Negative,
}

impl Side {
    /// Returns `1.0` or `-1.0`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// Label identifying which part of the shed a shape belongs to.
///
/// Purely informational: geometry never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "part", content = "at", rename_all = "snake_case")]
pub enum Part {
    /// The single plane of a flat roof.
    FlatRoof,
    /// One of the two sloped planes of a gable roof.
    RoofSlope(Side),
    /// One of the two triangular gable end-caps.
    Gable(Side),
    /// An undivided wall.
    Wall(WallSlot),
    /// The door opening of a doored wall.
    Door(WallSlot),
    /// The panel on the `+` side of a door.
    LeftJamb(WallSlot),
    /// The panel on the `-` side of a door.
    RightJamb(WallSlot),
    /// The panel above a door.
    Header(WallSlot),
}

impl Part {
    /// Returns the wall this part belongs to, if any.
    #[must_use]
    pub fn wall(self) -> Option<WallSlot> {
        match self {
            Self::Wall(slot)
            | Self::Door(slot)
            | Self::LeftJamb(slot)
            | Self::RightJamb(slot)
            | Self::Header(slot) => Some(slot),
            Self::FlatRoof | Self::RoofSlope(_) | Self::Gable(_) => None,
        }
    }

    /// Returns `true` for roof parts.
    #[must_use]
    pub fn is_roof(self) -> bool {
        self.wall().is_none()
    }
}

/// A positioned, rotated, colored piece of geometry handed to a scene sink.
///
/// World-space placement matches a scene graph node whose geometry is
/// `geometry`, translated to `position` and rotated by `rotation` in its
/// local frame: `p_world = position + R * p_local`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    /// What this shape is.
    pub part: Part,
    /// Local-frame geometry.
    pub geometry: Geometry,
    /// Flat fill color.
    pub color: Color,
    /// Translation of the local origin.
    pub position: Point3,
    /// Local-frame rotation.
    pub rotation: Rotation,
}

impl ShapeDescriptor {
    /// Creates a shape at the origin with no rotation.
    #[must_use]
    pub fn new(part: Part, geometry: impl Into<Geometry>, color: Color) -> Self {
        Self {
            part,
            geometry: geometry.into(),
            color,
            position: Point3::origin(),
            rotation: Rotation::IDENTITY,
        }
    }

    /// Sets the position.
    #[must_use]
    pub fn at(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    /// Sets the rotation.
    #[must_use]
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns the plane geometry, if this shape is a plane.
    #[must_use]
    pub fn plane(&self) -> Option<&PlaneGeometry> {
        match &self.geometry {
            Geometry::Plane(plane) => Some(plane),
            Geometry::Triangle(_) => None,
        }
    }

    /// Returns the triangle geometry, if this shape is a triangle.
    #[must_use]
    pub fn triangle(&self) -> Option<&TriangleGeometry> {
        match &self.geometry {
            Geometry::Triangle(tri) => Some(tri),
            Geometry::Plane(_) => None,
        }
    }

    /// Maps a local-frame point to world space.
    #[must_use]
    pub fn to_world(&self, local: &Point3) -> Point3 {
        self.position + self.rotation.apply(local).coords
    }

    /// Returns the geometry's vertices in world space.
    #[must_use]
    pub fn world_vertices(&self) -> Vec<Point3> {
        self.geometry
            .vertices()
            .iter()
            .map(|v| self.to_world(v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn world_vertices_apply_rotation_then_translation() {
        let shape = ShapeDescriptor::new(Part::FlatRoof, PlaneGeometry::new(2.0, 4.0), Color::BLACK)
            .at(Point3::new(0.0, 5.0, -1.0))
            .rotated(Rotation::new(FRAC_PI_2, 0.0, 0.0));
        let verts = shape.world_vertices();
        assert_eq!(verts.len(), 4);
        for v in &verts {
            assert_abs_diff_eq!(v.y, 5.0, epsilon = 1e-12);
            assert_abs_diff_eq!(v.x.abs(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!((v.z + 1.0).abs(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn unrotated_triangle_is_already_in_world_space() {
        let tri = TriangleGeometry::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        );
        let shape = ShapeDescriptor::new(Part::Gable(Side::Positive), tri, Color::BLACK);
        assert_eq!(shape.world_vertices(), tri.vertices().to_vec());
        assert!(shape.plane().is_none());
        assert!(shape.triangle().is_some());
    }

    #[test]
    fn to_world_rotates_about_the_shape_origin() {
        let shape = ShapeDescriptor::new(Part::FlatRoof, PlaneGeometry::new(2.0, 2.0), Color::BLACK)
            .at(Point3::new(1.0, 2.0, 3.0))
            .rotated(Rotation::new(0.0, 0.0, FRAC_PI_2));
        let p = shape.to_world(&Point3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, 3.0, epsilon = 1e-12);
        assert_eq!(shape.to_world(&Point3::origin()), shape.position);
    }

    #[test]
    fn part_reports_its_wall() {
        assert_eq!(Part::Header(WallSlot::Three).wall(), Some(WallSlot::Three));
        assert!(Part::RoofSlope(Side::Negative).is_roof());
        assert!(!Part::Door(WallSlot::One).is_roof());
    }
}
