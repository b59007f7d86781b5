mod store;

pub use store::{ShapeId, ShapeStore};

use crate::error::Result;
use crate::shape::ShapeDescriptor;

/// Destination for generated shapes.
///
/// The generators only ever call [`SceneSink::add_shape`]; lighting,
/// camera and drawing belong to the implementor. Each rebuild produces a
/// fresh, complete shape set, and [`SceneSink::clear`] is called before it
/// so the previous set can be released.
pub trait SceneSink {
    /// Accepts one shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot take the shape. Callers abort
    /// the render on the first failure.
    fn add_shape(&mut self, shape: ShapeDescriptor) -> Result<()>;

    /// Releases every shape added so far.
    fn clear(&mut self);
}

impl SceneSink for Vec<ShapeDescriptor> {
    fn add_shape(&mut self, shape: ShapeDescriptor) -> Result<()> {
        self.push(shape);
        Ok(())
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<S: SceneSink + ?Sized> SceneSink for &mut S {
    fn add_shape(&mut self, shape: ShapeDescriptor) -> Result<()> {
        (**self).add_shape(shape)
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}
