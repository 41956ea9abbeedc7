//! Catalog grid core: an incremental paginated grid loader.
//!
//! Reconciles a virtualized rendering surface, which only knows about a
//! visible row range, with a remote offset-paged product source. Handles
//! viewport-driven column-count changes, in-flight request invalidation on
//! filter/sort changes, and avoidance of duplicate or stale fetches.
//!
//! The rendering widget, card markup, and viewport measurement primitives are
//! external collaborators: the surface is reached through [`RenderSurface`],
//! the remote list through [`ProductSource`], and the layout width is pushed
//! in via [`GridController::on_resize`].

mod constants;
mod error;
mod grid;
mod layout;
mod measure;
mod query;
mod source;
mod store;
mod types;

pub use constants::{API_BASE_URL, CELL_MIN_WIDTH, DEFAULT_PAGE_SIZE};
pub use error::FetchError;
pub use grid::{GridController, RenderSurface};
pub use layout::{columns_for, ViewportGeometry};
pub use measure::MeasurementCache;
pub use query::QueryState;
pub use source::{HttpProductSource, ProductSource};
pub use store::RecordStore;
pub use types::{
    FetchRequest, PageResponse, Product, ProductPage, RowRange, SortDirection, SortKey, SortOrder,
};
