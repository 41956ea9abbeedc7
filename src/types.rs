//! Common types and data structures

use serde::Deserialize;

/// Product record as served by the catalog API. The grid core never inspects
/// these fields beyond carrying them; sorting and filtering happen server-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub thumbnail: String,
}

/// One page of the remote product list. `total` is `None` when the response
/// omitted it, in which case the store's total is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: Option<usize>,
}

/// Raw wire shape of a page response. Both fields are optional so a malformed
/// payload degrades to an empty page instead of a parse failure.
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    pub products: Option<Vec<Product>>,
    pub total: Option<u64>,
}

impl From<PageResponse> for ProductPage {
    fn from(raw: PageResponse) -> Self {
        Self {
            products: raw.products.unwrap_or_default(),
            total: raw.total.map(|t| t as usize),
        }
    }
}

/// Server-side sort field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Price,
    Rating,
}

impl SortKey {
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// One entry of the fixed sort dropdown: a key plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// Inclusive row span the rendering surface currently intends to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowRange {
    pub start_index: usize,
    pub stop_index: usize,
}

impl RowRange {
    pub fn new(start_index: usize, stop_index: usize) -> Self {
        Self {
            start_index,
            stop_index,
        }
    }
}

/// Fully determines one remote page query. The generation is copied from
/// `QueryState` at issuance time and compared against the live generation when
/// the response arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub generation: u64,
    pub offset: usize,
    pub page_size: usize,
    pub category: Option<String>,
    pub sort: Option<SortOrder>,
}
