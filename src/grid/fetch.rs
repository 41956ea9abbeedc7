//! Fetch coordination: issuing paged requests, generation checks, and the
//! apply/discard/error transitions

use super::GridController;
use crate::error::FetchError;
use crate::source::ProductSource;
use crate::types::FetchRequest;
use tracing::{debug, warn};

impl<S: ProductSource> GridController<S> {
    /// Issue one paged fetch for the current query. A no-op while another
    /// fetch is in flight; the caller retries naturally on the next
    /// revalidate pass once the loading flag drops. Returns whether a fetch
    /// was actually started.
    pub fn request_range(&self, offset: usize, page_size: usize) -> bool {
        let (request, token) = {
            let mut s = self.shared.lock().unwrap();
            if s.store.is_loading() {
                debug!(offset, "fetch already in flight, ignoring request");
                return false;
            }
            if s.cancel.is_cancelled() {
                // Shut down: stay inert instead of spawning a task that would
                // exit through the cancelled branch with the flag stuck.
                debug!(offset, "controller shut down, ignoring request");
                return false;
            }
            s.store.begin_fetch();
            let request = FetchRequest {
                generation: s.query.generation(),
                offset,
                page_size,
                category: s.query.category().map(String::from),
                sort: s.query.sort(),
            };
            (request, s.cancel.clone())
        };

        debug!(
            generation = request.generation,
            offset = request.offset,
            limit = request.page_size,
            "starting page fetch"
        );

        let future = self.source.fetch_page(&request);
        let shared = self.shared.clone();
        let surface = self.surface.clone();

        self.runtime.spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => {
                    // The superseding action already reset the store and
                    // cleared the loading flag; nothing left to do here.
                    debug!(generation = request.generation, "page fetch cancelled");
                    return;
                }
                result = future => result,
            };

            let visible = {
                let mut s = shared.lock().unwrap();
                if request.generation != s.query.generation() {
                    debug!(
                        stale = request.generation,
                        current = s.query.generation(),
                        "discarding stale page response"
                    );
                    return;
                }
                match outcome {
                    Ok(page) => {
                        let count = page.products.len();
                        if request.offset == 0 {
                            s.store.replace(page.products, page.total);
                        } else {
                            s.store.append(request.offset, page.products, page.total);
                        }
                        debug!(
                            count,
                            len = s.store.len(),
                            total = ?s.store.total(),
                            "page applied"
                        );
                    }
                    Err(FetchError::Cancelled) => {
                        s.store.clear_loading();
                        return;
                    }
                    Err(FetchError::Malformed(reason)) => {
                        // Treated as an empty page: has_more untouched, not
                        // surfaced as an error.
                        warn!(reason = %reason, "malformed page response");
                        s.store.clear_loading();
                    }
                    Err(error) => {
                        warn!(error = %error, "page fetch failed");
                        s.store.finish_with_error(error);
                    }
                }
                s.visible
            };

            // Replayed with the lock released: the surface may synchronously
            // call back into is_row_loaded/load_more_rows.
            surface.request_revalidate(visible);
        });

        true
    }
}
