//! Ordered collection of fetched records plus pagination bookkeeping

use crate::error::FetchError;
use crate::types::Product;
use tracing::warn;

/// Fetched records in server order (index = absolute offset) together with the
/// loading flag, reported total, and the last network error.
///
/// The store only ever holds a contiguous prefix of the remote list: pages are
/// appended at the tail, and an append whose offset does not line up with the
/// current frontier is rejected rather than silently merged.
#[derive(Debug, Default)]
pub struct RecordStore {
    items: Vec<Product>,
    total: Option<usize>,
    is_loading: bool,
    last_error: Option<FetchError>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear everything back to the mount state. `has_more` is assumed true
    /// until the first response reports a total.
    pub fn reset(&mut self) {
        self.items.clear();
        self.total = None;
        self.is_loading = false;
        self.last_error = None;
    }

    /// Mark a fetch as started. Clears the previous error; re-requesting is
    /// the only retry path.
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.last_error = None;
    }

    /// Append one page at the tail. Rejects a page whose offset is not exactly
    /// the current frontier; a `None` total leaves the known total untouched.
    pub fn append(&mut self, offset: usize, records: Vec<Product>, total: Option<usize>) -> bool {
        if offset != self.items.len() {
            warn!(
                offset,
                frontier = self.items.len(),
                "rejecting non-contiguous page append"
            );
            self.is_loading = false;
            return false;
        }
        self.items.extend(records);
        if let Some(total) = total {
            self.total = Some(total);
        }
        self.is_loading = false;
        true
    }

    /// Replace the whole record set with a fresh first page. Used for the
    /// first successful response after a filter/sort reset.
    pub fn replace(&mut self, records: Vec<Product>, total: Option<usize>) {
        self.items.clear();
        self.items.extend(records);
        if total.is_some() {
            self.total = total;
        }
        self.is_loading = false;
    }

    /// Record a failed fetch. Items and total are left untouched.
    pub fn finish_with_error(&mut self, error: FetchError) {
        self.last_error = Some(error);
        self.is_loading = false;
    }

    /// Clear the loading flag without touching anything else. Used when a
    /// generation bump supersedes the in-flight fetch, so a new request can
    /// start before the stale one resolves.
    pub fn clear_loading(&mut self) {
        self.is_loading = false;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<&Product> {
        self.items.get(offset)
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// True until a reported total proves the tail has been reached.
    pub fn has_more(&self) -> bool {
        self.total.map_or(true, |t| self.items.len() < t)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}
