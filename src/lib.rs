pub mod cache;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod query;
pub mod scene;
pub mod shape;
pub mod tessellation;

pub use cache::ShapeCache;
pub use color::Color;
pub use config::ShedParams;
pub use controller::ShedController;
pub use error::{Result, ShedError};
pub use model::{Dimensions, Roof, RoofStyle, Shed, Wall, WallSlot};
pub use scene::{SceneSink, ShapeStore};
pub use shape::{Part, ShapeDescriptor, Side};
