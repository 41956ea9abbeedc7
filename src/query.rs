//! Active filter/sort configuration, versioned by a generation counter

use crate::types::SortOrder;

/// The active category filter and sort order. Every mutation mints a new
/// generation; the generation comparison at response time is the sole
/// mechanism for discarding stale network responses.
#[derive(Debug, Default)]
pub struct QueryState {
    category: Option<String>,
    sort: Option<SortOrder>,
    generation: u64,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switch the category filter. `None` means the unfiltered list.
    pub fn set_category(&mut self, category: Option<String>) -> u64 {
        self.category = category;
        self.bump()
    }

    /// Switch the sort order. `None` restores server default order.
    pub fn set_sort(&mut self, sort: Option<SortOrder>) -> u64 {
        self.sort = sort;
        self.bump()
    }

    /// Mint a new generation without changing the query, invalidating any
    /// in-flight fetch. Used for manual reloads.
    pub fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
