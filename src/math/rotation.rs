use nalgebra::Rotation3;
use serde::{Deserialize, Serialize};

use super::{Matrix3, Point3, Vector3};

/// Euler rotation applied in the object's local frame: first about X,
/// then about the rotated Y, then about the twice-rotated Z.
///
/// The composed matrix is `Rx * Ry * Rz`, which is what a scene graph
/// produces for `rotate_x(x); rotate_y(y); rotate_z(z)` on a fresh node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Angle about X in radians.
    pub x: f64,
    /// Angle about Y in radians.
    pub y: f64,
    /// Angle about Z in radians.
    pub z: f64,
}

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a rotation from three angles in radians.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns a copy with the Z angle replaced.
    #[must_use]
    pub const fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }

    /// Returns the composed rotation matrix.
    #[must_use]
    pub fn matrix(&self) -> Matrix3 {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), self.y);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), self.z);
        (rx * ry * rz).into_inner()
    }

    /// Rotates a point about the origin.
    #[must_use]
    pub fn apply(&self, point: &Point3) -> Point3 {
        Point3::from(self.matrix() * point.coords)
    }

    /// Returns `true` if all three angles are zero.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}
