use crate::shape::ShapeDescriptor;
use crate::tessellation::Tessellate;

/// Computes the total surface area of a set of shapes.
///
/// Sums the areas of the triangles of the tessellated, world-space mesh.
pub struct Area<'a> {
    shapes: &'a [ShapeDescriptor],
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(shapes: &'a [ShapeDescriptor]) -> Self {
        Self { shapes }
    }

    /// Executes the query, returning the total area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let mesh = Tessellate::new(self.shapes).execute();

        let mut total_area = 0.0;
        for i in 0..mesh.triangle_count() {
            if let Some([v0, v1, v2]) = mesh.triangle(i) {
                let edge1 = v1 - v0;
                let edge2 = v2 - v0;
                total_area += edge1.cross(&edge2).norm() * 0.5;
            }
        }

        total_area
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::{Dimensions, RoofStyle, Shed, WallSlot};

    #[test]
    fn door_split_preserves_wall_area() {
        let shed = Shed::new(Dimensions::new(6.0, 9.0, 4.0), RoofStyle::Flat, 1);
        let doored = shed.wall(WallSlot::One).shapes();
        let plain = Shed::new(Dimensions::new(6.0, 9.0, 4.0), RoofStyle::Flat, 0)
            .wall(WallSlot::One)
            .shapes();
        assert_eq!(doored.len(), 4);
        assert_relative_eq!(Area::new(&doored).execute(), 36.0, epsilon = 1e-9);
        assert_relative_eq!(Area::new(&plain).execute(), 36.0, epsilon = 1e-9);
    }

    #[test]
    fn gable_roof_area() {
        let w: f64 = 6.0;
        let l = 9.0;
        let roof = Shed::new(Dimensions::new(w, l, 4.0), RoofStyle::Gable, 1)
            .roof()
            .shapes()
            .unwrap();
        let slopes = 2.0 * l * w * 2.0_f64.sqrt() / 2.0;
        let gables = 2.0 * (w * w / 2.0) / 2.0;
        assert_relative_eq!(Area::new(&roof).execute(), slopes + gables, epsilon = 1e-9);
    }

    #[test]
    fn whole_flat_shed_area() {
        let shapes = Shed::new(Dimensions::new(2.0, 3.0, 5.0), RoofStyle::Flat, 3)
            .shapes()
            .unwrap();
        let expected = 2.0 * 3.0 + 2.0 * (3.0 * 5.0) + 2.0 * (2.0 * 5.0);
        assert_relative_eq!(Area::new(&shapes).execute(), expected, epsilon = 1e-9);
    }
}
