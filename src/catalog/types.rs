//! Catalog response model.
//!
//! Only the fields the discovery UI actually consumes are deserialized;
//! everything else in the catalog payload is ignored.

use serde::Deserialize;

use crate::error::{CinetrendError, Result};

/// Image host prefix prepended to poster path fragments.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Fallback shown when the catalog rejects a request without a message.
pub const REJECTION_FALLBACK: &str = "Failed to fetch movies";

/// A single movie entry from a search or discover response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    /// Poster path fragment (e.g. `/abc.jpg`), relative to [`IMAGE_BASE_URL`].
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// `YYYY-MM-DD`, sometimes empty for unreleased titles.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
}

impl Movie {
    /// Full display URL for the poster, or `None` when the catalog has no
    /// poster for this entry.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| format!("{}{}", IMAGE_BASE_URL, fragment))
    }

    /// Release year extracted from the date, when present.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }
}

/// Envelope of a `search`/`discover` response.
///
/// Besides the regular paged result list, the service can signal an explicit
/// rejection through the legacy capitalized `Response`/`Error` pair; a
/// successful HTTP status does not by itself mean usable results.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default, rename = "Response")]
    pub response: Option<String>,
    #[serde(default, rename = "Error")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Applies the rejection check and unwraps the result list.
    ///
    /// An empty list is NOT an error; only an explicit `Response: "False"`
    /// marker turns into [`CinetrendError::CatalogRejected`], carrying
    /// the service message when one was sent.
    pub fn into_results(self) -> Result<Vec<Movie>> {
        if self.response.as_deref() == Some("False") {
            let message = self
                .error
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| REJECTION_FALLBACK.to_string());
            return Err(CinetrendError::CatalogRejected(message));
        }
        Ok(self.results)
    }
}
