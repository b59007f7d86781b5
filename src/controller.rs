use tracing::{info, instrument, warn};

use crate::cache::ShapeCache;
use crate::config::ShedParams;
use crate::error::Result;
use crate::model::{check_dimension, RoofStyle};
use crate::scene::SceneSink;

/// Drives a scene sink from form-style change events.
///
/// Every accepted change rebuilds the whole shed and replaces the sink's
/// contents: the sink is cleared, then the full shape set is added.
/// Rejected changes leave both the parameters and the scene untouched.
#[derive(Debug)]
pub struct ShedController<S> {
    params: ShedParams,
    sink: S,
    cache: ShapeCache,
}

impl<S: SceneSink> ShedController<S> {
    /// Creates a controller. Nothing is drawn until the first render or
    /// change event.
    #[must_use]
    pub fn new(params: ShedParams, sink: S) -> Self {
        Self {
            params,
            sink,
            cache: ShapeCache::new(),
        }
    }

    /// Returns the current parameters.
    #[must_use]
    pub fn params(&self) -> &ShedParams {
        &self.params
    }

    /// Returns the sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the controller, returning the sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns the shape cache.
    #[must_use]
    pub fn cache(&self) -> &ShapeCache {
        &self.cache
    }

    /// Rebuilds the shed from the current parameters and replaces the
    /// scene contents. Returns the number of shapes drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the shed fails to
    /// build, or the sink rejects a shape. Build and validation failures
    /// leave the previous scene in place; a sink failure leaves it empty.
    #[instrument(skip(self))]
    pub fn render(&mut self) -> Result<usize> {
        self.params.validate()?;
        let cached = self.cache.contains(&self.params);
        let shapes = self.cache.get_or_build(&self.params)?;

        self.sink.clear();
        for shape in shapes {
            if let Err(err) = self.sink.add_shape(shape.clone()) {
                self.sink.clear();
                return Err(err);
            }
        }
        info!(count = shapes.len(), cached, "rendered shed");
        Ok(shapes.len())
    }

    /// Handles a width change.
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite values; otherwise see
    /// [`ShedController::render`].
    pub fn set_width(&mut self, value: f64) -> Result<usize> {
        self.set_dimension("width", value, |params, v| params.width = v)
    }

    /// Handles a length change.
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite values; otherwise see
    /// [`ShedController::render`].
    pub fn set_length(&mut self, value: f64) -> Result<usize> {
        self.set_dimension("length", value, |params, v| params.length = v)
    }

    /// Handles a height change.
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite values; otherwise see
    /// [`ShedController::render`].
    pub fn set_height(&mut self, value: f64) -> Result<usize> {
        self.set_dimension("height", value, |params, v| params.height = v)
    }

    /// Handles the gable-roof checkbox.
    ///
    /// # Errors
    ///
    /// See [`ShedController::render`].
    pub fn set_gable_roof(&mut self, is_gable: bool) -> Result<usize> {
        self.params.roof_style = RoofStyle::from_gable(is_gable);
        self.render()
    }

    /// Handles a door-wall change. Numbers outside `1..=4` are accepted and
    /// build a shed without a door.
    ///
    /// # Errors
    ///
    /// See [`ShedController::render`].
    pub fn set_wall_with_door(&mut self, wall: i64) -> Result<usize> {
        if !(1..=4).contains(&wall) {
            warn!(wall, "door wall out of range, building without a door");
        }
        self.params.wall_with_door = wall;
        self.render()
    }

    /// Replaces every parameter at once.
    ///
    /// # Errors
    ///
    /// Rejects invalid dimensions; otherwise see [`ShedController::render`].
    pub fn set_params(&mut self, params: ShedParams) -> Result<usize> {
        if let Err(err) = params.validate() {
            warn!(%err, "rejected parameter change");
            return Err(err);
        }
        self.params = params;
        self.render()
    }

    fn set_dimension(
        &mut self,
        name: &'static str,
        value: f64,
        apply: impl FnOnce(&mut ShedParams, f64),
    ) -> Result<usize> {
        if let Err(err) = check_dimension(name, value) {
            warn!(%err, "rejected dimension change");
            return Err(err);
        }
        apply(&mut self.params, value);
        self.render()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{SceneError, ShedError};
    use crate::scene::ShapeStore;
    use crate::shape::{Part, ShapeDescriptor};

    fn controller() -> ShedController<ShapeStore> {
        ShedController::new(ShedParams::default(), ShapeStore::new())
    }

    #[test]
    fn render_fills_the_sink() {
        let mut c = controller();
        assert_eq!(c.render().unwrap(), 8);
        assert_eq!(c.sink().len(), 8);
    }

    #[test]
    fn each_change_replaces_the_scene() {
        let mut c = controller();
        c.render().unwrap();
        c.set_gable_roof(true).unwrap();
        assert_eq!(c.sink().len(), 11);
        c.set_wall_with_door(2).unwrap();
        assert_eq!(c.sink().len(), 11);
        c.set_gable_roof(false).unwrap();
        assert_eq!(c.sink().len(), 8);
    }

    #[test]
    fn dimension_change_moves_the_roof() {
        let mut c = controller();
        c.set_height(4.0).unwrap();
        let (_, roof) = c.sink().iter().next().unwrap();
        assert_eq!(roof.part, Part::FlatRoof);
        assert!((roof.position.z + 4.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_dimension_is_rejected_and_scene_kept() {
        let mut c = controller();
        c.render().unwrap();
        let before = c.sink().to_vec();
        assert!(c.set_width(-1.0).is_err());
        assert!(c.set_length(f64::NAN).is_err());
        assert!(c.set_height(0.0).is_err());
        assert_eq!(c.sink().to_vec(), before);
        assert_eq!(c.params(), &ShedParams::default());
    }

    #[test]
    fn out_of_range_door_is_accepted() {
        let mut c = controller();
        assert_eq!(c.set_wall_with_door(5).unwrap(), 5);
        assert!(c.sink().iter().all(|(_, s)| !matches!(s.part, Part::Door(_))));
    }

    #[test]
    fn repeated_render_uses_cache() {
        let mut c = controller();
        c.render().unwrap();
        assert_eq!(c.cache().misses(), 1);
        assert!(c.cache().contains(c.params()));
        let first = c.sink().to_vec();
        c.render().unwrap();
        assert_eq!(c.cache().hits(), 1);
        assert_eq!(c.cache().misses(), 1);
        assert_eq!(c.sink().to_vec(), first);
    }

    #[test]
    fn changed_params_miss_the_cache() {
        let mut c = controller();
        c.render().unwrap();
        c.set_gable_roof(true).unwrap();
        assert_eq!(c.cache().hits(), 0);
        assert_eq!(c.cache().misses(), 2);
        c.set_gable_roof(true).unwrap();
        assert_eq!(c.cache().hits(), 1);
    }

    #[test]
    fn sink_can_be_reset_and_taken_back() {
        let mut c = controller();
        c.render().unwrap();
        c.sink_mut().clear();
        assert!(c.sink().is_empty());
        c.render().unwrap();
        let store = c.into_sink();
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn set_params_validates_first() {
        let mut c = controller();
        let bad = ShedParams {
            length: -3.0,
            ..ShedParams::default()
        };
        assert!(c.set_params(bad).is_err());
        let good = ShedParams {
            length: 3.0,
            ..ShedParams::default()
        };
        assert_eq!(c.set_params(good).unwrap(), 8);
    }

    struct FailingSink {
        accepted: Vec<ShapeDescriptor>,
        limit: usize,
    }

    impl SceneSink for FailingSink {
        fn add_shape(&mut self, shape: ShapeDescriptor) -> Result<()> {
            if self.accepted.len() == self.limit {
                return Err(SceneError::Rejected("full".into()).into());
            }
            self.accepted.push(shape);
            Ok(())
        }

        fn clear(&mut self) {
            self.accepted.clear();
        }
    }

    #[test]
    fn sink_failure_leaves_no_partial_shed() {
        let sink = FailingSink {
            accepted: Vec::new(),
            limit: 3,
        };
        let mut c = ShedController::new(ShedParams::default(), sink);
        let err = c.render().unwrap_err();
        assert!(matches!(err, ShedError::Scene(SceneError::Rejected(_))));
        assert!(c.sink().accepted.is_empty());
    }
}
