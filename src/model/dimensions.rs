use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Outer dimensions of a shed.
///
/// `width` is the span of walls 2 and 4, `length` the span of walls 1
/// and 3, and `height` the wall height. The generators do not check these;
/// call [`Dimensions::validate`] before building from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Span across walls 2 and 4 (Y extent).
    pub width: f64,
    /// Span across walls 1 and 3 (X extent).
    pub length: f64,
    /// Wall height (Z extent).
    pub height: f64,
}

impl Dimensions {
    /// Creates a new set of dimensions.
    #[must_use]
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Checks that every dimension is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidDimension`] naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        check_dimension("width", self.width)?;
        check_dimension("length", self.length)?;
        check_dimension("height", self.height)?;
        Ok(())
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(10.0, 10.0, 10.0)
    }
}

/// Checks a single dimension value.
///
/// # Errors
///
/// Returns [`InputError::InvalidDimension`] if `value` is not finite or not
/// strictly positive.
pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InputError::InvalidDimension { name, value }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShedError;

    #[test]
    fn positive_dimensions_are_valid() {
        assert!(Dimensions::new(10.0, 20.0, 30.0).validate().is_ok());
        assert!(Dimensions::default().validate().is_ok());
    }

    #[test]
    fn zero_negative_and_nan_are_rejected() {
        assert!(Dimensions::new(0.0, 1.0, 1.0).validate().is_err());
        assert!(Dimensions::new(1.0, -1.0, 1.0).validate().is_err());
        assert!(Dimensions::new(1.0, 1.0, f64::NAN).validate().is_err());
        assert!(Dimensions::new(f64::INFINITY, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn error_names_the_offending_dimension() {
        let err = Dimensions::new(1.0, 1.0, -2.0).validate();
        assert!(matches!(
            err,
            Err(ShedError::Input(InputError::InvalidDimension { name: "height", .. }))
        ));
    }
}
