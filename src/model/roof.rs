use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::color::Color;
use crate::error::Result;
use crate::geometry::{triangle, PlaneGeometry};
use crate::math::{Point3, Rotation, GABLE_PITCH};
use crate::scene::SceneSink;
use crate::shape::{Part, ShapeDescriptor, Side};

use super::Dimensions;

/// Roof shape of a shed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofStyle {
    /// A single horizontal plane on top of the walls.
    #[default]
    Flat,
    /// Two 45° slopes meeting at a ridge, closed by triangular gables.
    Gable,
}

impl RoofStyle {
    /// Maps a "gable roof" checkbox to a style.
    #[must_use]
    pub fn from_gable(is_gable: bool) -> Self {
        if is_gable {
            Self::Gable
        } else {
            Self::Flat
        }
    }

    /// Returns `true` for [`RoofStyle::Gable`].
    #[must_use]
    pub fn is_gable(self) -> bool {
        self == Self::Gable
    }
}

/// Generates the roof of a shed.
///
/// The roof sits at `z = -height`, directly on top of the walls. A gable
/// roof rises a further `width / 2` to a ridge running along X.
#[derive(Debug, Clone, PartialEq)]
pub struct Roof {
    dimensions: Dimensions,
    style: RoofStyle,
    color: Color,
}

impl Roof {
    /// Creates a new roof with the default black roofing color.
    #[must_use]
    pub fn new(dimensions: Dimensions, style: RoofStyle) -> Self {
        Self {
            dimensions,
            style,
            color: Color::BLACK,
        }
    }

    /// Sets the roofing color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the roof style.
    #[must_use]
    pub fn style(&self) -> RoofStyle {
        self.style
    }

    /// Returns the dimensions of the shed this roof covers.
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Slope length of one side of a gable roof, eave to ridge.
    #[must_use]
    pub fn slope_length(&self) -> f64 {
        self.dimensions.width * SQRT_2 / 2.0
    }

    /// Returns the roof shapes: one plane when flat; two slopes followed
    /// by two gables when gabled.
    ///
    /// # Errors
    ///
    /// Returns an error if a gable triangle cannot be built.
    #[instrument(skip(self), fields(style = ?self.style))]
    pub fn shapes(&self) -> Result<Vec<ShapeDescriptor>> {
        let shapes = match self.style {
            RoofStyle::Flat => vec![self.flat()],
            RoofStyle::Gable => vec![
                self.slope(Side::Positive),
                self.slope(Side::Negative),
                self.gable(Side::Positive)?,
                self.gable(Side::Negative)?,
            ],
        };
        debug!(count = shapes.len(), "generated roof");
        Ok(shapes)
    }

    /// Sends the roof shapes to a scene sink.
    ///
    /// # Errors
    ///
    /// Returns an error if a shape cannot be built or the sink rejects it.
    /// Nothing reaches the sink if building fails.
    pub fn render<S: SceneSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        for shape in self.shapes()? {
            sink.add_shape(shape)?;
        }
        Ok(())
    }

    /// The single plane of a flat roof.
    #[must_use]
    pub fn flat(&self) -> ShapeDescriptor {
        let Dimensions {
            width,
            length,
            height,
        } = self.dimensions;
        ShapeDescriptor::new(Part::FlatRoof, PlaneGeometry::new(length, width), self.color)
            .at(Point3::new(0.0, 0.0, -height))
    }

    /// One sloped side of a gable roof. [`Side::Positive`] covers the +Y
    /// half, [`Side::Negative`] the -Y half.
    #[must_use]
    pub fn slope(&self, side: Side) -> ShapeDescriptor {
        let Dimensions {
            width,
            length,
            height,
        } = self.dimensions;
        let slope_length = self.slope_length();
        // Run and rise of half a slope at 45°.
        let inset = slope_length / (2.0 * SQRT_2);
        let sign = side.sign();

        ShapeDescriptor::new(
            Part::RoofSlope(side),
            PlaneGeometry::new(length, slope_length),
            self.color,
        )
        .at(Point3::new(0.0, sign * (width / 2.0 - inset), -height - inset))
        .rotated(Rotation::new(sign * GABLE_PITCH, 0.0, 0.0))
    }

    /// One triangular end-cap of a gable roof, flush with the +X
    /// ([`Side::Positive`]) or -X ([`Side::Negative`]) wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle cannot be built.
    pub fn gable(&self, side: Side) -> Result<ShapeDescriptor> {
        let Dimensions {
            width,
            length,
            height,
        } = self.dimensions;
        let x = side.sign() * length / 2.0;
        #[rustfmt::skip]
        let vertices = [
            x, width / 2.0, -height,
            x, -width / 2.0, -height,
            x, 0.0, -(height + width / 2.0),
        ];
        Ok(ShapeDescriptor::new(Part::Gable(side), triangle(&vertices)?, self.color))
    }
}
