mod rotation;

pub use rotation::Rotation;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Roof pitch of a gable roof (45 degrees), in radians.
pub const GABLE_PITCH: f64 = std::f64::consts::FRAC_PI_4;
