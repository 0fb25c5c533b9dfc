//! Command handlers for the cinetrend binary.

mod live;
mod search;
mod trending;

pub(crate) use live::cmd_live;
pub(crate) use search::{cmd_discover, cmd_search};
pub(crate) use trending::cmd_trending;

use std::sync::Arc;

use cinetrend::app::DiscoveryApp;
use cinetrend::catalog::{CatalogClient, Movie};
use cinetrend::store::{AppwriteStore, MemoryStore, TrendingRecord, TrendingStore};
use cinetrend::trending::TrendingTracker;
use cinetrend::Config;

/// Build the discovery app from configuration: catalog client plus
/// whichever trending backend is configured.
pub(crate) fn build_app(config: &Config) -> anyhow::Result<DiscoveryApp> {
    let token = config.catalog_token()?;
    let catalog = Arc::new(CatalogClient::new(&config.catalog.base_url, token));
    let tracker = TrendingTracker::new(build_store(config));
    Ok(DiscoveryApp::new(catalog, tracker))
}

/// The configured remote store, or the in-memory fallback when no store
/// section is present.
pub(crate) fn build_store(config: &Config) -> Arc<dyn TrendingStore> {
    match &config.store {
        Some(store) => Arc::new(AppwriteStore::new(store)),
        None => {
            tracing::info!("No trending store configured, using in-memory counters");
            Arc::new(MemoryStore::new())
        }
    }
}

pub(crate) fn print_movies(movies: &[Movie]) {
    if movies.is_empty() {
        println!("No movies found.");
        return;
    }
    for (i, movie) in movies.iter().enumerate() {
        println!("{}", movie_line(i + 1, movie));
    }
}

pub(crate) fn print_trending(records: &[TrendingRecord]) {
    println!("Trending searches:");
    for (i, record) in records.iter().enumerate() {
        println!("{}", trending_line(i + 1, record));
    }
}

fn movie_line(index: usize, movie: &Movie) -> String {
    let year = movie.release_year().unwrap_or("N/A");
    let rating = movie
        .vote_average
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "N/A".to_string());
    let language = movie.original_language.as_deref().unwrap_or("N/A");
    format!(
        "{:>2}. {} ({})  {} {}",
        index, movie.title, year, rating, language
    )
}

fn trending_line(index: usize, record: &TrendingRecord) -> String {
    format!(
        "{:>2}. {:<28} {} search(es)",
        index, record.search_term, record.count
    )
}
