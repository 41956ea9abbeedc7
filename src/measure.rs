//! Per-cell rendered height cache

use std::collections::HashMap;

/// Measured cell heights keyed by `(row, column)`. Cleared wholesale on
/// resize and on category/sort change; never partially invalidated.
#[derive(Debug, Default)]
pub struct MeasurementCache {
    heights: HashMap<(usize, usize), f32>,
}

impl MeasurementCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, row: usize, column: usize, height: f32) {
        self.heights.insert((row, column), height);
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f32> {
        self.heights.get(&(row, column)).copied()
    }

    pub fn clear(&mut self) {
        self.heights.clear();
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_clears_wholesale() {
        let mut cache = MeasurementCache::new();
        cache.record(0, 0, 310.0);
        cache.record(0, 1, 295.5);
        cache.record(4, 2, 410.0);
        assert_eq!(cache.get(0, 1), Some(295.5));
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(0, 0), None);
        assert_eq!(cache.get(4, 2), None);
    }
}
