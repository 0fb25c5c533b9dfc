//! Trending-record document store.
//!
//! The trending leaderboard lives in a remote document collection, one
//! record per canonical search term. This module defines the record types,
//! the four store primitives the feature relies on, and two backends: an
//! Appwrite-compatible REST client and an in-memory fallback.

mod appwrite;
mod memory;
mod query;

pub use appwrite::AppwriteStore;
pub use memory::MemoryStore;
pub use query::Query;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;

use crate::error::Result;

/// A persisted trending counter, one per canonical search term.
///
/// The serde renames follow the remote collection schema (`$id`,
/// `searchTerm`); the in-memory backend fills the same fields directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendingRecord {
    /// Store-assigned document id.
    #[serde(rename = "$id")]
    pub id: String,
    /// Canonical search term this counter aggregates.
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    /// Number of successful searches recorded for the term.
    pub count: u64,
    /// Catalog id of the first movie that matched the term.
    pub movie_id: u64,
    /// Poster display URL captured from that first match.
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Field set for creating a record. The store assigns the document id and
/// the count starts at 1; the representative movie fields are frozen at
/// creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrendingRecord {
    pub search_term: String,
    pub movie_id: u64,
    pub poster_url: Option<String>,
}

/// The document-store primitives the trending feature relies on.
///
/// Any document database with equality filters, descending order-by with a
/// limit, server-generated ids, and update-by-id satisfies this contract.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TrendingStore: Send + Sync {
    /// Finds the record whose search term equals `term` exactly, if any.
    async fn find_by_term(&self, term: &str) -> Result<Option<TrendingRecord>>;

    /// Creates a record with a store-generated id and `count = 1`.
    async fn create(&self, new: NewTrendingRecord) -> Result<TrendingRecord>;

    /// Overwrites the count of an existing record. The other fields are
    /// left untouched.
    async fn set_count(&self, id: &str, count: u64) -> Result<()>;

    /// Returns up to `limit` records ordered by count, descending.
    async fn top_by_count(&self, limit: usize) -> Result<Vec<TrendingRecord>>;
}
