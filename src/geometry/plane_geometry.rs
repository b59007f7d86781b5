use serde::{Deserialize, Serialize};

use crate::math::Point3;

/// A rectangle of `width × height` centered on the local origin,
/// lying in the local XY plane with its normal along +Z.
///
/// Negative or zero sizes are not rejected; they produce a degenerate
/// or inverted rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneGeometry {
    width: f64,
    height: f64,
}

impl PlaneGeometry {
    /// Triangle indices into [`PlaneGeometry::corners`].
    pub const INDICES: [[u32; 3]; 2] = [[0, 2, 1], [2, 3, 1]];

    /// Creates a new plane geometry.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along local X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extent along local Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the four corners: top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [Point3; 4] {
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        [
            Point3::new(-hw, hh, 0.0),
            Point3::new(hw, hh, 0.0),
            Point3::new(-hw, -hh, 0.0),
            Point3::new(hw, -hh, 0.0),
        ]
    }

    /// Returns the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.width * self.height).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_centered() {
        let plane = PlaneGeometry::new(4.0, 2.0);
        let corners = plane.corners();
        let sum = corners
            .iter()
            .fold(Point3::origin().coords, |acc, c| acc + c.coords);
        assert!(sum.norm() < 1e-12);
        assert!((corners[1].x - 2.0).abs() < f64::EPSILON);
        assert!((corners[0].y - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn area_is_width_times_height() {
        assert!((PlaneGeometry::new(3.0, 5.0).area() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_size_is_degenerate_not_an_error() {
        let plane = PlaneGeometry::new(0.0, 5.0);
        assert!(plane.area().abs() < f64::EPSILON);
    }
}
