//! HTTP client for the movie catalog service.
//!
//! Thin wrapper over `reqwest` for the two read endpoints the discovery flow
//! needs: title search and popularity-ordered discovery. The service uses
//! Bearer token authorization.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{CinetrendError, Result};

use super::types::{Movie, SearchResponse};
use super::MovieCatalog;

/// Default catalog API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

const CATALOG_USER_AGENT: &str = concat!(
    "cinetrend/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/cinetrend/cinetrend)"
);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the catalog search/discover endpoints.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    token: String,
}

impl CatalogClient {
    /// Create a catalog client for the given API root and Bearer token.
    pub fn new(base_url: &str, token: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(CATALOG_USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<Vec<Movie>> {
        let response = request
            .header("accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| CinetrendError::CatalogUnavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CinetrendError::CatalogUnavailable(format!(
                "catalog returned {}",
                status
            )));
        }

        let payload: SearchResponse = response.json().await.map_err(|e| {
            CinetrendError::CatalogUnavailable(format!("invalid catalog response: {}", e))
        })?;

        payload.into_results()
    }
}

#[async_trait]
impl MovieCatalog for CatalogClient {
    /// Searches the catalog by title.
    ///
    /// The query is sent verbatim (URL-encoded); canonicalization is an
    /// aggregation concern, not a search concern.
    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        debug!("Catalog search: {:?}", query);
        let endpoint = format!("{}/search/movie", self.base_url);
        self.fetch(self.client.get(endpoint).query(&[("query", query)]))
            .await
    }

    /// Lists popular movies (the landing view when no query is typed).
    async fn discover(&self) -> Result<Vec<Movie>> {
        debug!("Catalog discover");
        let endpoint = format!("{}/discover/movie", self.base_url);
        self.fetch(
            self.client
                .get(endpoint)
                .query(&[("sort_by", "popularity.desc")]),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("https://api.themoviedb.org/3/", "token");
        assert_eq!(client.base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    fn test_user_agent_names_the_crate() {
        assert!(CATALOG_USER_AGENT.starts_with("cinetrend/"));
    }
}
