//! Grid controller - reconciles the virtualized rendering surface with the
//! remote offset-paged product source

mod fetch;
mod viewport;
mod window;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::FetchError;
use crate::layout::ViewportGeometry;
use crate::measure::MeasurementCache;
use crate::query::QueryState;
use crate::source::ProductSource;
use crate::store::RecordStore;
use crate::types::{Product, RowRange, SortOrder};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Capability the rendering surface provides: replay a row range through its
/// visibility callback so it re-checks row-loaded status. A paginated append
/// can fill columns of an already-rendered final row without changing the row
/// count, so the controller pushes this signal explicitly after every append,
/// resize, and query change.
pub trait RenderSurface: Send + Sync + 'static {
    fn request_revalidate(&self, range: RowRange);
}

/// State shared with in-flight fetch tasks. One lock covers the store, the
/// query generation, and the geometry the completion handler needs, so a
/// response is always checked against the generation that is current at
/// resolution time.
pub(crate) struct GridShared {
    pub(crate) store: RecordStore,
    pub(crate) query: QueryState,
    pub(crate) columns: usize,
    pub(crate) visible: RowRange,
    pub(crate) cancel: CancellationToken,
}

/// The catalog grid controller. Owns the record store, query state, and
/// measurement cache; fetch tasks run on the supplied runtime handle and
/// report back through the shared state.
pub struct GridController<S: ProductSource> {
    pub(crate) shared: Arc<Mutex<GridShared>>,
    pub(crate) source: Arc<S>,
    pub(crate) surface: Arc<dyn RenderSurface>,
    pub(crate) runtime: tokio::runtime::Handle,
    pub(crate) measurements: MeasurementCache,
    pub(crate) viewport: ViewportGeometry,
    pub(crate) page_size: usize,
}

impl<S: ProductSource> GridController<S> {
    pub fn new(
        source: S,
        surface: Arc<dyn RenderSurface>,
        runtime: tokio::runtime::Handle,
        initial_width: u32,
    ) -> Self {
        let viewport = ViewportGeometry::from_width(initial_width);
        Self {
            shared: Arc::new(Mutex::new(GridShared {
                store: RecordStore::new(),
                query: QueryState::new(),
                columns: viewport.column_count,
                visible: RowRange::default(),
                cancel: CancellationToken::new(),
            })),
            source: Arc::new(source),
            surface,
            runtime,
            measurements: MeasurementCache::new(),
            viewport,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Switch the category filter. `None` selects the unfiltered list.
    pub fn set_category(&mut self, category: Option<String>) {
        info!(category = ?category, "category filter changed");
        self.apply_query_change(|query| {
            query.set_category(category);
        });
    }

    /// Switch the sort order. `None` restores server default order.
    pub fn set_sort(&mut self, sort: Option<SortOrder>) {
        info!(sort = ?sort, "sort order changed");
        self.apply_query_change(|query| {
            query.set_sort(sort);
        });
    }

    /// Throw away the record set and fetch the first page again under a new
    /// generation. Also the kick-off call after construction.
    pub fn reload(&mut self) {
        self.apply_query_change(|query| {
            query.bump();
        });
    }

    /// Cancel any in-flight fetch without starting a new one. Called on
    /// unmount. The token abort frees the transport, the minted generation
    /// drops a resolution that races through anyway, and the cleared loading
    /// flag lets a later reload start immediately.
    pub fn shutdown(&self) {
        let mut s = self.shared.lock().unwrap();
        s.query.bump();
        s.cancel.cancel();
        s.store.clear_loading();
    }

    /// Shared plumbing for every generation-minting action: reset the store,
    /// swap in a fresh cancellation token, clear measurements, replay the
    /// visible window from row 0, and fetch the first page eagerly.
    fn apply_query_change(&mut self, mutate: impl FnOnce(&mut QueryState)) {
        let (old_token, stop_index) = {
            let mut s = self.shared.lock().unwrap();
            mutate(&mut s.query);
            s.store.reset();
            let old = std::mem::replace(&mut s.cancel, CancellationToken::new());
            (old, s.visible.stop_index)
        };
        old_token.cancel();
        self.measurements.clear();
        self.surface.request_revalidate(RowRange::new(0, stop_index));
        self.request_range(0, self.page_size);
    }

    // ------------------------------------------------------------------
    // Read accessors for the rendering surface
    // ------------------------------------------------------------------

    pub fn product_at(&self, row: usize, column: usize) -> Option<Product> {
        let s = self.shared.lock().unwrap();
        let offset = row * s.columns + column;
        s.store.get(offset).cloned()
    }

    pub fn record_at(&self, offset: usize) -> Option<Product> {
        self.shared.lock().unwrap().store.get(offset).cloned()
    }

    pub fn record_count(&self) -> usize {
        self.shared.lock().unwrap().store.len()
    }

    pub fn total_count(&self) -> Option<usize> {
        self.shared.lock().unwrap().store.total()
    }

    pub fn has_more(&self) -> bool {
        self.shared.lock().unwrap().store.has_more()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.lock().unwrap().store.is_loading()
    }

    pub fn last_error(&self) -> Option<FetchError> {
        self.shared.lock().unwrap().store.last_error().cloned()
    }

    pub fn columns(&self) -> usize {
        self.shared.lock().unwrap().columns
    }

    pub fn generation(&self) -> u64 {
        self.shared.lock().unwrap().query.generation()
    }
}
