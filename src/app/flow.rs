//! Search and trending orchestration.
//!
//! `DiscoveryApp` glues the catalog, the trending tracker, and the UI state
//! together. It owns the policy decisions: when an empty query means
//! "show popular", when a search is worth a trending hit, and which
//! user-facing message each failure turns into. The two flows fail
//! independently; a broken trending store never touches the result list
//! and vice versa.

use std::sync::Arc;

use tracing::error;

use crate::catalog::{Movie, MovieCatalog};
use crate::error::{CinetrendError, Result};
use crate::store::TrendingRecord;
use crate::trending::{normalize, TrendingTracker};

use super::state::SearchState;

/// Message shown when the catalog cannot be reached.
pub const SEARCH_ERROR_MESSAGE: &str = "Failed to fetch movies. Please try again later.";

/// Message shown when the trending board cannot be loaded.
pub const TRENDING_ERROR_MESSAGE: &str = "Failed to load trending movies. Please try again later.";

pub struct DiscoveryApp {
    catalog: Arc<dyn MovieCatalog>,
    tracker: TrendingTracker,
    state: SearchState,
}

impl DiscoveryApp {
    pub fn new(catalog: Arc<dyn MovieCatalog>, tracker: TrendingTracker) -> Self {
        Self {
            catalog,
            tracker,
            state: SearchState::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Run one search round for `raw_query` and fold the outcome into the
    /// state. An empty query lists popular movies instead of searching.
    /// A non-empty query that succeeds with at least one result also
    /// records a trending hit for its canonical form, with the first
    /// result as the representative movie.
    pub async fn run_search(&mut self, raw_query: &str) {
        self.state.search_term = raw_query.to_string();
        self.state.is_loading = true;
        self.state.error = None;

        let result = if raw_query.is_empty() {
            self.catalog.discover().await
        } else {
            self.catalog.search(raw_query).await
        };
        self.apply_search_outcome(result);

        if !raw_query.is_empty() {
            self.record_hit(raw_query).await;
        }

        self.state.is_loading = false;
    }

    fn apply_search_outcome(&mut self, result: Result<Vec<Movie>>) {
        match result {
            Ok(movies) => self.state.movies = movies,
            Err(CinetrendError::CatalogRejected(message)) => {
                self.state.movies.clear();
                self.state.error = Some(message);
            }
            Err(e) => {
                error!("catalog request failed: {}", e);
                self.state.movies.clear();
                self.state.error = Some(SEARCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Record a trending hit unless the search produced nothing or the
    /// query canonicalizes to the empty key (pure punctuation).
    async fn record_hit(&self, raw_query: &str) {
        let Some(first) = self.state.movies.first() else {
            return;
        };
        let key = normalize(raw_query);
        if key.is_empty() {
            return;
        }
        self.tracker.record_search(&key, first).await;
    }

    /// Reload the trending board. Failures set the trending error slot
    /// and leave the primary search state alone.
    pub async fn refresh_trending(&mut self) {
        self.state.is_trending_loading = true;
        self.state.trending_error = None;

        let result = self.tracker.snapshot().await;
        self.apply_trending_outcome(result);

        self.state.is_trending_loading = false;
    }

    fn apply_trending_outcome(&mut self, result: Result<Vec<TrendingRecord>>) {
        match result {
            Ok(records) => self.state.trending = records,
            Err(e) => {
                error!("failed to load trending: {}", e);
                self.state.trending_error = Some(TRENDING_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Initial load: popular movies and the trending board, fetched
    /// concurrently. No trending hit is recorded (there is no query).
    pub async fn refresh_all(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;
        self.state.is_trending_loading = true;
        self.state.trending_error = None;

        let (movies, trending) =
            futures::future::join(self.catalog.discover(), self.tracker.snapshot()).await;
        self.apply_search_outcome(movies);
        self.apply_trending_outcome(trending);

        self.state.is_loading = false;
        self.state.is_trending_loading = false;
    }
}
