//! Window observation: the row-loaded predicate and gap-fill requests

use super::GridController;
use crate::source::ProductSource;
use crate::types::RowRange;
use tracing::debug;

impl<S: ProductSource> GridController<S> {
    /// True iff every cell of the row has a backing record. Once the tail is
    /// known (`has_more` false) every absolute offset is either present or
    /// will never arrive, so all rows - including the terminal, partially
    /// filled one - read as loaded and the surface stops requesting them.
    pub fn is_row_loaded(&self, row_index: usize) -> bool {
        let s = self.shared.lock().unwrap();
        if !s.store.has_more() {
            return true;
        }
        let start = row_index * s.columns;
        start + s.columns <= s.store.len()
    }

    /// Gap-fill for a visible but unloaded row span. The skip offset is the
    /// first missing offset within the row that triggered the call; because
    /// the store only holds a contiguous prefix, a row lying entirely beyond
    /// the frontier is clamped back to it. Deferred (no-op) while a fetch is
    /// in flight.
    pub fn load_more_rows(&self, range: RowRange) -> bool {
        let offset = {
            let s = self.shared.lock().unwrap();
            if s.store.is_loading() || !s.store.has_more() {
                return false;
            }
            let start = range.start_index * s.columns;
            let end = start + s.columns;
            let frontier = s.store.len();
            if end <= frontier {
                return false;
            }
            // First missing offset within the row; the store holds a
            // contiguous prefix, so that is always the frontier, with rows
            // lying wholly beyond it clamped back.
            if start > frontier {
                debug!(start, frontier, "row beyond frontier, clamping gap-fill offset");
            }
            frontier
        };
        self.request_range(offset, self.page_size)
    }

    /// Pushed by the surface on every scroll; the stored range is what gets
    /// replayed by the forced re-evaluation signal.
    pub fn set_visible_range(&self, range: RowRange) {
        self.shared.lock().unwrap().visible = range;
    }

    pub fn visible_range(&self) -> RowRange {
        self.shared.lock().unwrap().visible
    }

    /// Row count for the surface: while more records exist one speculative
    /// trailing row keeps the loader probing past the frontier.
    pub fn row_count(&self) -> usize {
        let s = self.shared.lock().unwrap();
        let rows = s.store.len().div_ceil(s.columns);
        if s.store.has_more() {
            rows + 1
        } else {
            rows.max(1)
        }
    }
}
