//! Search-popularity tracking on top of a [`TrendingStore`].
//!
//! Every successful search upserts a counter document keyed by the
//! canonical search term: first sighting creates the document with the
//! top result as its display movie, later sightings bump the count and
//! leave the display movie alone. The read-modify-write is not
//! transactional, so two concurrent bumps of the same term can lose an
//! increment; trending is advisory and a slight undercount is fine.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::Movie;
use crate::error::Result;
use crate::store::{NewTrendingRecord, TrendingRecord, TrendingStore};

/// How many terms a trending snapshot returns.
pub const TRENDING_LIMIT: usize = 5;

pub struct TrendingTracker {
    store: Arc<dyn TrendingStore>,
}

impl TrendingTracker {
    pub fn new(store: Arc<dyn TrendingStore>) -> Self {
        Self { store }
    }

    /// Record one search for `term`, represented by `movie` if the term
    /// is new. Store failures are logged and swallowed: popularity
    /// tracking must never break the search flow.
    pub async fn record_search(&self, term: &str, movie: &Movie) {
        if let Err(e) = self.try_record(term, movie).await {
            warn!("failed to record search for {:?}: {}", term, e);
        }
    }

    async fn try_record(&self, term: &str, movie: &Movie) -> Result<()> {
        match self.store.find_by_term(term).await? {
            Some(existing) => {
                debug!(
                    "bumping count for {:?}: {} -> {}",
                    term,
                    existing.count,
                    existing.count + 1
                );
                self.store
                    .set_count(&existing.id, existing.count + 1)
                    .await?;
            }
            None => {
                debug!("first search for {:?}, creating record", term);
                self.store
                    .create(NewTrendingRecord {
                        search_term: term.to_string(),
                        movie_id: movie.id,
                        poster_url: movie.poster_url(),
                    })
                    .await?;
            }
        }
        Ok(())
    }

    /// The current top terms, most searched first. Unlike
    /// [`record_search`](Self::record_search) this propagates store
    /// errors, so callers can tell an empty board from a broken store.
    pub async fn snapshot(&self) -> Result<Vec<TrendingRecord>> {
        self.store.top_by_count(TRENDING_LIMIT).await
    }
}
