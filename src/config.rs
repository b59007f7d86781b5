use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ConfigError, Result};
use crate::model::{Dimensions, RoofStyle, WallSlot};

/// Everything needed to build one shed.
///
/// Missing JSON fields fall back to [`ShedParams::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShedParams {
    /// Span of walls 2 and 4.
    pub width: f64,
    /// Span of walls 1 and 3.
    pub length: f64,
    /// Wall height.
    pub height: f64,
    /// Flat or gable roof.
    pub roof_style: RoofStyle,
    /// Number of the wall carrying the door. Values outside `1..=4` build
    /// a shed with no door.
    pub wall_with_door: i64,
    /// Siding color of the walls.
    pub wall_color: Color,
    /// Color of the door opening.
    pub door_color: Color,
    /// Roofing color.
    pub roof_color: Color,
}

impl Default for ShedParams {
    fn default() -> Self {
        let Dimensions {
            width,
            length,
            height,
        } = Dimensions::default();
        Self {
            width,
            length,
            height,
            roof_style: RoofStyle::Flat,
            wall_with_door: 1,
            wall_color: Color::WALL_GRAY,
            door_color: Color::BLACK,
            roof_color: Color::BLACK,
        }
    }
}

impl ShedParams {
    /// Parses parameters from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the JSON is malformed or a field
    /// has the wrong type (including a malformed color).
    pub fn from_json(json: &str) -> Result<Self> {
        let params = serde_json::from_str(json).map_err(ConfigError::from)?;
        Ok(params)
    }

    /// Serializes the parameters to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self).map_err(ConfigError::from)?;
        Ok(json)
    }

    /// Returns the shed dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.length, self.height)
    }

    /// Returns the slot carrying the door, if the number is in range.
    #[must_use]
    pub fn door_wall(&self) -> Option<WallSlot> {
        WallSlot::from_number(self.wall_with_door)
    }

    /// Checks the dimensions. The door wall is not checked.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is non-positive or non-finite.
    pub fn validate(&self) -> Result<()> {
        self.dimensions().validate()
    }
}
