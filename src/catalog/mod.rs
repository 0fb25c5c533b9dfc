//! Movie catalog access (TMDB-compatible API).

mod client;
mod types;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::Result;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use types::{Movie, SearchResponse, IMAGE_BASE_URL, REJECTION_FALLBACK};

/// Read-side contract of the movie catalog service.
///
/// The discovery flow only needs these two listings; everything else the
/// catalog offers is out of scope. An empty result list is a valid outcome
/// for both, distinct from the service being unreachable.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Title search for the given raw query.
    async fn search(&self, query: &str) -> Result<Vec<Movie>>;

    /// Popularity-ordered listing, used when no query is typed.
    async fn discover(&self) -> Result<Vec<Movie>>;
}
