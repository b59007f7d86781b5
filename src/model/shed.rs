use tracing::{debug, instrument};

use crate::color::Color;
use crate::config::ShedParams;
use crate::error::Result;
use crate::math::Point3;
use crate::scene::SceneSink;
use crate::shape::ShapeDescriptor;

use super::{Dimensions, Roof, RoofStyle, Wall, WallSlot};

/// Composes a roof and four walls into a complete shed.
///
/// Walls are centered half their height above the ground, each pushed out
/// from the origin along its normal by half the shed's width (walls 1, 3)
/// or length (walls 2, 4).
#[derive(Debug, Clone, PartialEq)]
pub struct Shed {
    dimensions: Dimensions,
    roof_style: RoofStyle,
    door_wall: Option<WallSlot>,
    wall_color: Color,
    door_color: Color,
    roof_color: Color,
}

impl Shed {
    /// Creates a new shed with default colors.
    ///
    /// A `wall_with_door` outside `1..=4` yields a shed with no door.
    #[must_use]
    pub fn new(dimensions: Dimensions, roof_style: RoofStyle, wall_with_door: i64) -> Self {
        Self {
            dimensions,
            roof_style,
            door_wall: WallSlot::from_number(wall_with_door),
            wall_color: Color::WALL_GRAY,
            door_color: Color::BLACK,
            roof_color: Color::BLACK,
        }
    }

    /// Creates a shed from a full parameter set, colors included.
    #[must_use]
    pub fn from_params(params: &ShedParams) -> Self {
        Self {
            dimensions: params.dimensions(),
            roof_style: params.roof_style,
            door_wall: params.door_wall(),
            wall_color: params.wall_color,
            door_color: params.door_color,
            roof_color: params.roof_color,
        }
    }

    /// Returns the shed dimensions.
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the wall carrying the door, if any.
    #[must_use]
    pub fn door_wall(&self) -> Option<WallSlot> {
        self.door_wall
    }

    /// Builds the roof generator.
    #[must_use]
    pub fn roof(&self) -> Roof {
        Roof::new(self.dimensions, self.roof_style).with_color(self.roof_color)
    }

    /// Builds the generator for one wall.
    #[must_use]
    pub fn wall(&self, slot: WallSlot) -> Wall {
        let Dimensions {
            width,
            length,
            height,
        } = self.dimensions;
        let z = -height / 2.0;
        let (span_x, position) = match slot {
            WallSlot::One => (length, Point3::new(0.0, width / 2.0, z)),
            WallSlot::Two => (width, Point3::new(length / 2.0, 0.0, z)),
            WallSlot::Three => (length, Point3::new(0.0, -width / 2.0, z)),
            WallSlot::Four => (width, Point3::new(-length / 2.0, 0.0, z)),
        };
        Wall::new(slot, span_x, height, position, self.door_wall == Some(slot))
            .with_color(self.wall_color)
            .with_door_color(self.door_color)
    }

    /// Builds all four wall generators, in order 1 through 4.
    #[must_use]
    pub fn walls(&self) -> [Wall; 4] {
        WallSlot::ALL.map(|slot| self.wall(slot))
    }

    /// Returns every shape of the shed: the roof first, then walls 1 to 4.
    ///
    /// # Errors
    ///
    /// Returns an error if any part fails to build.
    #[instrument(skip(self), fields(
        width = self.dimensions.width,
        length = self.dimensions.length,
        height = self.dimensions.height,
        door = ?self.door_wall
    ))]
    pub fn shapes(&self) -> Result<Vec<ShapeDescriptor>> {
        let mut shapes = self.roof().shapes()?;
        for wall in self.walls() {
            shapes.extend(wall.shapes());
        }
        debug!(count = shapes.len(), "generated shed");
        Ok(shapes)
    }

    /// Builds the whole shed, then sends it to a scene sink.
    ///
    /// Returns the number of shapes sent. If building fails nothing is
    /// sent.
    ///
    /// # Errors
    ///
    /// Returns an error if a part fails to build or the sink rejects a shape.
    pub fn render<S: SceneSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        let shapes = self.shapes()?;
        let count = shapes.len();
        for shape in shapes {
            sink.add_shape(shape)?;
        }
        Ok(count)
    }
}
