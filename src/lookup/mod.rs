//! Drug lookup client.
//!
//! [`DrugLookup`] is the seam between the search controller and the pricing
//! service; [`HttpLookupClient`] is the production implementation.

mod client;
mod error;
mod wire;

use async_trait::async_trait;

use crate::drug::SearchResult;

pub use client::HttpLookupClient;
pub use error::{LookupError, GENERIC_FAILURE_MESSAGE};

/// Looks up brand and generic pricing for an already-normalized query.
#[async_trait]
pub trait DrugLookup: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<SearchResult, LookupError>;
}
