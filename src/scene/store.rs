use slotmap::SlotMap;

use crate::error::{Result, SceneError};
use crate::shape::ShapeDescriptor;

use super::SceneSink;

slotmap::new_key_type! {
    /// Unique identifier for a shape held by a [`ShapeStore`].
    pub struct ShapeId;
}

/// Arena that owns the shapes currently installed in a scene.
///
/// Shapes are addressed by generational [`ShapeId`]s, so an id from a
/// previous render never aliases a shape from the current one.
/// Iteration follows insertion order, which is the draw order.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: SlotMap<ShapeId, ShapeDescriptor>,
    order: Vec<ShapeId>,
}

impl ShapeStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape and returns its ID.
    pub fn insert(&mut self, shape: ShapeDescriptor) -> ShapeId {
        let id = self.shapes.insert(shape);
        self.order.push(id);
        id
    }

    /// Returns a reference to the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape was removed or cleared.
    pub fn get(&self, id: ShapeId) -> Result<&ShapeDescriptor> {
        self.shapes
            .get(id)
            .ok_or_else(|| SceneError::ShapeNotFound.into())
    }

    /// Removes a shape and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape was already removed or cleared.
    pub fn remove(&mut self, id: ShapeId) -> Result<ShapeDescriptor> {
        let shape = self.shapes.remove(id).ok_or(SceneError::ShapeNotFound)?;
        self.order.retain(|&other| other != id);
        Ok(shape)
    }

    /// Returns the number of installed shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if no shapes are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over installed shapes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &ShapeDescriptor)> {
        self.order
            .iter()
            .filter_map(|&id| self.shapes.get(id).map(|shape| (id, shape)))
    }

    /// Returns clones of the installed shapes in draw order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ShapeDescriptor> {
        self.iter().map(|(_, shape)| shape.clone()).collect()
    }
}

impl SceneSink for ShapeStore {
    fn add_shape(&mut self, shape: ShapeDescriptor) -> Result<()> {
        self.insert(shape);
        Ok(())
    }

    fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::geometry::PlaneGeometry;
    use crate::shape::Part;

    fn roof() -> ShapeDescriptor {
        ShapeDescriptor::new(Part::FlatRoof, PlaneGeometry::new(1.0, 1.0), Color::BLACK)
    }

    #[test]
    fn insert_and_get() {
        let mut store = ShapeStore::new();
        let id = store.insert(roof());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().part, Part::FlatRoof);
    }

    #[test]
    fn clear_invalidates_old_ids() {
        let mut store = ShapeStore::new();
        let id = store.insert(roof());
        SceneSink::clear(&mut store);
        assert!(store.is_empty());
        assert!(store.get(id).is_err());
        let fresh = store.insert(roof());
        assert_ne!(id, fresh);
        assert!(store.get(id).is_err());
    }

    #[test]
    fn remove_keeps_draw_order() {
        let mut store = ShapeStore::new();
        let a = store.insert(roof());
        let b = store.insert(roof());
        let c = store.insert(roof());
        store.remove(b).unwrap();
        let ids: Vec<_> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(store.remove(b).is_err());
    }

    #[test]
    fn vec_is_a_sink() {
        let mut shapes: Vec<ShapeDescriptor> = Vec::new();
        shapes.add_shape(roof()).unwrap();
        assert_eq!(shapes.len(), 1);
        SceneSink::clear(&mut shapes);
        assert!(shapes.is_empty());
    }
}
