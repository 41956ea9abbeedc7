//! Viewport tracking: width-driven column count and measurement invalidation

use super::GridController;
use crate::layout::ViewportGeometry;
use crate::source::ProductSource;
use crate::types::RowRange;
use tracing::debug;

impl<S: ProductSource> GridController<S> {
    /// Pushed by the width provider on every resize. When the column count
    /// changes, every previously measured cell height is meaningless (column
    /// reflow), so the measurement cache is cleared wholesale and the surface
    /// re-evaluates its window from row 0.
    pub fn on_resize(&mut self, width: u32) {
        let geometry = ViewportGeometry::from_width(width);
        let changed = geometry.column_count != self.viewport.column_count;
        self.viewport = geometry;
        if changed {
            self.apply_column_count(geometry.column_count);
        }
    }

    /// For surfaces that compute their own column count instead of delegating
    /// to the width mapping.
    pub fn on_column_count_changed(&mut self, column_count: usize) {
        let column_count = column_count.max(1);
        if column_count == self.viewport.column_count {
            return;
        }
        self.viewport.column_count = column_count;
        self.apply_column_count(column_count);
    }

    fn apply_column_count(&mut self, column_count: usize) {
        let stop_index = {
            let mut s = self.shared.lock().unwrap();
            s.columns = column_count;
            s.visible.stop_index
        };
        self.measurements.clear();
        debug!(
            columns = column_count,
            "column count changed, measurement cache cleared"
        );
        self.surface.request_revalidate(RowRange::new(0, stop_index));
    }

    pub fn viewport(&self) -> ViewportGeometry {
        self.viewport
    }

    /// Record a rendered cell height for the surface to reuse.
    pub fn record_measurement(&mut self, row: usize, column: usize, height: f32) {
        self.measurements.record(row, column, height);
    }

    pub fn measured_height(&self, row: usize, column: usize) -> Option<f32> {
        self.measurements.get(row, column)
    }

    pub fn measured_cell_count(&self) -> usize {
        self.measurements.len()
    }
}
