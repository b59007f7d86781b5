use crate::color::Color;
use crate::config::ShedParams;
use crate::error::Result;
use crate::model::{RoofStyle, Shed, WallSlot};
use crate::shape::ShapeDescriptor;

/// Bit-exact identity of a parameter set.
///
/// Door numbers outside `1..=4` all collapse to `None`, since they build
/// the same shed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    width: u64,
    length: u64,
    height: u64,
    roof_style: RoofStyle,
    door_wall: Option<WallSlot>,
    wall_color: Color,
    door_color: Color,
    roof_color: Color,
}

impl From<&ShedParams> for CacheKey {
    fn from(params: &ShedParams) -> Self {
        Self {
            width: params.width.to_bits(),
            length: params.length.to_bits(),
            height: params.height.to_bits(),
            roof_style: params.roof_style,
            door_wall: params.door_wall(),
            wall_color: params.wall_color,
            door_color: params.door_color,
            roof_color: params.roof_color,
        }
    }
}

/// Single-entry memo of the last generated shed.
///
/// Holds the shapes for the most recent parameter set only; any change to
/// the parameters replaces the entry.
#[derive(Debug, Default)]
pub struct ShapeCache {
    entry: Option<(CacheKey, Vec<ShapeDescriptor>)>,
    hits: u64,
    misses: u64,
}

impl ShapeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shapes for `params`, building them on a miss.
    ///
    /// # Errors
    ///
    /// Returns an error if the shed fails to build. The cache is left empty
    /// in that case.
    pub fn get_or_build(&mut self, params: &ShedParams) -> Result<&[ShapeDescriptor]> {
        let key = CacheKey::from(params);
        if self.entry.as_ref().is_some_and(|(cached, _)| *cached == key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.entry = None;
            let shapes = Shed::from_params(params).shapes()?;
            self.entry = Some((key, shapes));
        }
        Ok(self
            .entry
            .as_ref()
            .map_or(&[][..], |(_, shapes)| shapes.as_slice()))
    }

    /// Returns `true` if the shapes for `params` are cached.
    #[must_use]
    pub fn contains(&self, params: &ShedParams) -> bool {
        let key = CacheKey::from(params);
        self.entry.as_ref().is_some_and(|(cached, _)| *cached == key)
    }

    /// Drops the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of lookups served from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to build.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn second_lookup_hits() {
        let mut cache = ShapeCache::new();
        let params = ShedParams::default();
        let first = cache.get_or_build(&params).unwrap().to_vec();
        let second = cache.get_or_build(&params).unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn changed_dimension_rebuilds() {
        let mut cache = ShapeCache::new();
        let mut params = ShedParams::default();
        cache.get_or_build(&params).unwrap();
        params.height = 12.0;
        assert!(!cache.contains(&params));
        let shapes = cache.get_or_build(&params).unwrap();
        assert!((shapes[0].position.z + 12.0).abs() < 1e-12);
        assert_eq!(cache.misses(), 2);
        assert!(cache.contains(&params));
    }

    #[test]
    fn changed_style_rebuilds() {
        let mut cache = ShapeCache::new();
        let mut params = ShedParams::default();
        assert_eq!(cache.get_or_build(&params).unwrap().len(), 8);
        params.roof_style = RoofStyle::Gable;
        assert_eq!(cache.get_or_build(&params).unwrap().len(), 11);
    }

    #[test]
    fn equivalent_missing_doors_share_an_entry() {
        let mut cache = ShapeCache::new();
        let params = ShedParams {
            wall_with_door: 0,
            ..ShedParams::default()
        };
        cache.get_or_build(&params).unwrap();
        let other = ShedParams {
            wall_with_door: 9,
            ..ShedParams::default()
        };
        assert!(cache.contains(&other));
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let mut cache = ShapeCache::new();
        let params = ShedParams::default();
        cache.get_or_build(&params).unwrap();
        cache.invalidate();
        assert!(!cache.contains(&params));
        cache.get_or_build(&params).unwrap();
        assert_eq!(cache.misses(), 2);
        assert_eq!(cache.hits(), 0);
    }
}
