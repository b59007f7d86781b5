use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::color::Color;
use crate::error::{InputError, Result};
use crate::geometry::PlaneGeometry;
use crate::math::{Point3, Rotation};
use crate::scene::SceneSink;
use crate::shape::{Part, ShapeDescriptor};

/// Height of the door opening as a fraction of the wall height.
const DOOR_HEIGHT_RATIO: f64 = 0.8;

/// Number of equal columns a doored wall is split into.
const DOOR_COLUMNS: f64 = 3.0;

/// One of the four walls of a shed.
///
/// Odd walls (1, 3) face ±Y and are stood up by a quarter turn about X.
/// Even walls (2, 4) face ±X and are turned a quarter about Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WallSlot {
    /// The +Y wall.
    One = 1,
    /// The +X wall.
    Two = 2,
    /// The -Y wall.
    Three = 3,
    /// The -X wall.
    Four = 4,
}

impl WallSlot {
    /// All slots in render order.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Returns the wall number, 1 through 4.
    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns `true` for walls 2 and 4.
    #[must_use]
    pub fn is_even(self) -> bool {
        self.number().is_multiple_of(2)
    }

    /// Looks up a slot by number, returning `None` outside `1..=4`.
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Rotation that stands a local XY plane up as this wall.
    #[must_use]
    pub fn base_rotation(self) -> Rotation {
        if self.is_even() {
            Rotation::new(0.0, FRAC_PI_2, FRAC_PI_2)
        } else {
            Rotation::new(FRAC_PI_2, 0.0, 0.0)
        }
    }

    /// Z rotation applied to the panels of a doored wall so their long
    /// axis stays vertical.
    #[must_use]
    pub fn door_rotation_z(self) -> f64 {
        if self.is_even() {
            0.0
        } else {
            FRAC_PI_2
        }
    }

    /// Shifts `position` by `offset` along the wall's horizontal axis
    /// (Y for even walls, X for odd walls).
    #[must_use]
    pub fn offset_along(self, position: Point3, offset: f64) -> Point3 {
        let mut shifted = position;
        if self.is_even() {
            shifted.y += offset;
        } else {
            shifted.x += offset;
        }
        shifted
    }
}

impl TryFrom<i64> for WallSlot {
    type Error = InputError;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Self::from_number(value).ok_or(InputError::InvalidWall(value))
    }
}

impl TryFrom<u8> for WallSlot {
    type Error = InputError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<WallSlot> for u8 {
    fn from(slot: WallSlot) -> Self {
        slot.number()
    }
}

/// A single rectangle on its way to becoming a shape.
#[derive(Debug, Clone, Copy)]
struct Panel {
    part: Part,
    span_x: f64,
    span_y: f64,
    position: Point3,
    color: Color,
    rotation: Rotation,
}

impl Panel {
    fn into_shape(self) -> ShapeDescriptor {
        ShapeDescriptor::new(self.part, PlaneGeometry::new(self.span_x, self.span_y), self.color)
            .at(self.position)
            .rotated(self.rotation)
    }
}

/// Generates the shapes for one wall, optionally cut by a door.
///
/// A plain wall is a single `span_x × span_y` plane. A doored wall is split
/// into three equal columns along its horizontal span: a jamb on either
/// side running the full height, and a middle column holding the door
/// opening below a header.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    slot: WallSlot,
    span_x: f64,
    span_y: f64,
    position: Point3,
    has_door: bool,
    color: Color,
    door_color: Color,
}

impl Wall {
    /// Creates a new wall with the default siding and door colors.
    ///
    /// * `span_x` - Horizontal span of the wall.
    /// * `span_y` - Vertical span of the wall.
    /// * `position` - Center of the wall.
    #[must_use]
    pub fn new(slot: WallSlot, span_x: f64, span_y: f64, position: Point3, has_door: bool) -> Self {
        Self {
            slot,
            span_x,
            span_y,
            position,
            has_door,
            color: Color::WALL_GRAY,
            door_color: Color::BLACK,
        }
    }

    /// Sets the siding color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the color of the door opening.
    #[must_use]
    pub fn with_door_color(mut self, color: Color) -> Self {
        self.door_color = color;
        self
    }

    /// Returns which wall this is.
    #[must_use]
    pub fn slot(&self) -> WallSlot {
        self.slot
    }

    /// Returns the horizontal span.
    #[must_use]
    pub fn span_x(&self) -> f64 {
        self.span_x
    }

    /// Returns the vertical span.
    #[must_use]
    pub fn span_y(&self) -> f64 {
        self.span_y
    }

    /// Returns the center of the wall.
    #[must_use]
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Returns `true` if this wall carries the door.
    #[must_use]
    pub fn has_door(&self) -> bool {
        self.has_door
    }

    /// Returns the siding color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the wall's base rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.slot.base_rotation()
    }

    /// Returns the shapes making up this wall: one for a plain wall,
    /// four (door, left jamb, right jamb, header) for a doored wall.
    #[must_use]
    #[instrument(skip(self), fields(wall = self.slot.number(), door = self.has_door))]
    pub fn shapes(&self) -> Vec<ShapeDescriptor> {
        let mut shapes = Vec::with_capacity(if self.has_door { 4 } else { 1 });
        let panel = Panel {
            part: Part::Wall(self.slot),
            span_x: self.span_x,
            span_y: self.span_y,
            position: self.position,
            color: self.color,
            rotation: self.rotation(),
        };
        self.add_wall(panel, self.has_door, &mut shapes);
        debug!(count = shapes.len(), "generated wall");
        shapes
    }

    /// Sends this wall's shapes to a scene sink.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the sink.
    pub fn render<S: SceneSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        for shape in self.shapes() {
            sink.add_shape(shape)?;
        }
        Ok(())
    }

    fn add_wall(&self, panel: Panel, door: bool, out: &mut Vec<ShapeDescriptor>) {
        if door {
            for part in self.door_panels(&panel) {
                self.add_wall(part, false, out);
            }
        } else {
            out.push(panel.into_shape());
        }
    }

    /// Splits a wall panel into door, left jamb, right jamb and header.
    fn door_panels(&self, wall: &Panel) -> [Panel; 4] {
        let column = wall.span_x / DOOR_COLUMNS;
        let rotation = wall.rotation.with_z(self.slot.door_rotation_z());

        let mut door_position = wall.position;
        door_position.z *= DOOR_HEIGHT_RATIO;

        let mut header_position = wall.position;
        header_position.z = -wall.span_y * (1.0 + DOOR_HEIGHT_RATIO) / 2.0;

        let column_panel = |part, span_x, position, color| Panel {
            part,
            span_x,
            span_y: column,
            position,
            color,
            rotation,
        };

        [
            column_panel(
                Part::Door(self.slot),
                wall.span_y * DOOR_HEIGHT_RATIO,
                door_position,
                self.door_color,
            ),
            column_panel(
                Part::LeftJamb(self.slot),
                wall.span_y,
                self.slot.offset_along(wall.position, column),
                wall.color,
            ),
            column_panel(
                Part::RightJamb(self.slot),
                wall.span_y,
                self.slot.offset_along(wall.position, -column),
                wall.color,
            ),
            column_panel(
                Part::Header(self.slot),
                wall.span_y * (1.0 - DOOR_HEIGHT_RATIO),
                header_position,
                wall.color,
            ),
        ]
    }
}
