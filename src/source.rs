//! Remote product source: trait seam plus the reqwest-backed implementation

use crate::constants::API_BASE_URL;
use crate::error::FetchError;
use crate::types::{FetchRequest, PageResponse, ProductPage};
use futures::future::BoxFuture;
use tracing::{debug, warn};

/// An offset-paged product source. The grid controller only ever talks to
/// this seam, so tests can script page resolution without a network.
pub trait ProductSource: Send + Sync + 'static {
    fn fetch_page(&self, request: &FetchRequest) -> BoxFuture<'static, Result<ProductPage, FetchError>>;
}

/// Catalog API client. `category = None` hits the unfiltered list; a category
/// adds the `/category/{slug}` path segment.
pub struct HttpProductSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductSource {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, request: &FetchRequest) -> String {
        match &request.category {
            Some(slug) => format!("{}/products/category/{}", self.base_url, slug),
            None => format!("{}/products", self.base_url),
        }
    }

    fn query_params(request: &FetchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", request.page_size.to_string()),
            ("skip", request.offset.to_string()),
        ];
        if let Some(sort) = request.sort {
            params.push(("sortBy", sort.key.as_param().to_string()));
            params.push(("order", sort.direction.as_param().to_string()));
        }
        params
    }
}

impl Default for HttpProductSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSource for HttpProductSource {
    fn fetch_page(&self, request: &FetchRequest) -> BoxFuture<'static, Result<ProductPage, FetchError>> {
        let client = self.client.clone();
        let url = self.endpoint(request);
        let params = Self::query_params(request);
        let generation = request.generation;

        Box::pin(async move {
            debug!(generation, url = %url, "fetching page");
            let response = client
                .get(&url)
                .query(&params)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if !response.status().is_success() {
                return Err(FetchError::Network(format!("HTTP {}", response.status())));
            }

            match response.json::<PageResponse>().await {
                Ok(raw) => {
                    if raw.products.is_none() || raw.total.is_none() {
                        warn!(generation, "response missing products/total, treating as empty page");
                    }
                    Ok(raw.into())
                }
                Err(e) => {
                    // Unparseable body degrades to an empty page rather than
                    // tearing down the controller.
                    warn!(generation, error = %e, "unparseable page response");
                    Ok(ProductPage {
                        products: Vec::new(),
                        total: None,
                    })
                }
            }
        })
    }
}
