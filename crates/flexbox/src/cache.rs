//! Per-run memoization owned by the container.
//!
//! Both tables are reset at the start of every `measure`. Nothing here is
//! needed for correctness; disabling the measure cache only costs repeated
//! item measurements.

use crate::chapter6::Measurement;
use crate::sizing::SizingConstraint;

/// The last request an item answered and what it reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct CachedMeasure {
    width: SizingConstraint,
    height: SizingConstraint,
    measurement: Measurement,
}

/// Measure cache and index-to-line table for one container.
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
    measure_enabled: bool,
    measures: Vec<Option<CachedMeasure>>,
    index_to_line: Vec<Option<usize>>,
    hits: usize,
}

impl LayoutCache {
    /// Create a cache; the measure table is used only when `measure_enabled`.
    pub const fn new(measure_enabled: bool) -> Self {
        Self {
            measure_enabled,
            measures: Vec::new(),
            index_to_line: Vec::new(),
            hits: 0,
        }
    }

    pub const fn is_measure_enabled(&self) -> bool {
        self.measure_enabled
    }

    pub fn set_measure_enabled(&mut self, enabled: bool) {
        self.measure_enabled = enabled;
        if !enabled {
            self.measures.clear();
        }
    }

    /// Drop every entry and size the tables for `item_count` items.
    pub fn reset(&mut self, item_count: usize) {
        self.measures.clear();
        self.index_to_line.clear();
        if self.measure_enabled {
            self.measures.resize(item_count, None);
        }
        self.index_to_line.resize(item_count, None);
        self.hits = 0;
    }

    /// Cached measurement for an identical repeat request, if any.
    pub(crate) fn lookup(
        &mut self,
        index: usize,
        width: SizingConstraint,
        height: SizingConstraint,
    ) -> Option<Measurement> {
        let cached = self.measures.get(index).copied().flatten()?;
        if cached.width != width || cached.height != height {
            return None;
        }
        self.hits += 1;
        Some(cached.measurement)
    }

    pub(crate) fn store(
        &mut self,
        index: usize,
        width: SizingConstraint,
        height: SizingConstraint,
        measurement: Measurement,
    ) {
        if let Some(entry) = self.measures.get_mut(index) {
            *entry = Some(CachedMeasure {
                width,
                height,
                measurement,
            });
        }
    }

    pub(crate) fn record_line(&mut self, index: usize, line: usize) {
        if let Some(entry) = self.index_to_line.get_mut(index) {
            *entry = Some(line);
        }
    }

    /// Line holding item `index` after the last `measure`.
    pub fn line_of(&self, index: usize) -> Option<usize> {
        self.index_to_line.get(index).copied().flatten()
    }

    /// Number of measure requests answered from the cache since the last reset.
    pub const fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if a repeated request is not served from the cache.
    fn repeated_request_hits() {
        let mut cache = LayoutCache::new(true);
        cache.reset(2);
        let measurement = Measurement::new(10, 20);
        let width = SizingConstraint::Exact(10);
        let height = SizingConstraint::AtMost(50);
        assert_eq!(cache.lookup(0, width, height), None);
        cache.store(0, width, height, measurement);
        assert_eq!(cache.lookup(0, width, height), Some(measurement));
        assert_eq!(cache.lookup(0, width, SizingConstraint::Exact(20)), None);
        assert_eq!(cache.hits(), 1);
        cache.reset(2);
        assert_eq!(cache.lookup(0, width, height), None);
    }

    #[test]
    /// # Panics
    /// Panics if a disabled cache stores measurements.
    fn disabled_cache_never_hits() {
        let mut cache = LayoutCache::new(false);
        cache.reset(1);
        let width = SizingConstraint::Exact(10);
        cache.store(0, width, width, Measurement::new(10, 10));
        assert_eq!(cache.lookup(0, width, width), None);
        cache.record_line(0, 3);
        assert_eq!(cache.line_of(0), Some(3));
        assert_eq!(cache.line_of(5), None);
    }
}
