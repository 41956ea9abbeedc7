//! Fetch error kinds

use thiserror::Error;

/// Outcome kinds for a remote page fetch. `Cancelled` is normal control flow
/// after a filter/sort change, not a user-visible failure; only `Network` is
/// recorded in the store's `last_error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("malformed response: {0}")]
    Malformed(String),
}
