//! Parametric generators: each turns a handful of scalars into a list of
//! positioned shapes.
//!
//! Coordinates follow a Z-down convention: the ground is `z = 0` and the
//! shed rises toward negative Z. Walls 1 and 3 face ±Y, walls 2 and 4 face
//! ±X.

mod dimensions;
mod roof;
mod shed;
mod wall;

pub use dimensions::Dimensions;
pub(crate) use dimensions::check_dimension;
pub use roof::{Roof, RoofStyle};
pub use shed::Shed;
pub use wall::{Wall, WallSlot};
