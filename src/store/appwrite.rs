//! Appwrite-compatible REST backend for the trending store.
//!
//! Talks to a document collection over plain HTTPS:
//! - `GET    {endpoint}/databases/{db}/collections/{coll}/documents` with
//!   `queries[]` parameters for filtered/ordered lists;
//! - `POST   ` the same path with a `unique()` document id sentinel to let
//!   the server generate the id;
//! - `PATCH  {…}/documents/{id}` for the count update.
//!
//! Every failure, transport or HTTP, maps to `StoreUnavailable`; whether
//! that is fatal is the caller's call (the aggregator swallows it on the
//! write path and propagates it on the read path).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{CinetrendError, Result};

use super::{NewTrendingRecord, Query, TrendingRecord, TrendingStore};

/// Document id sentinel asking the server to generate a unique id.
const UNIQUE_ID: &str = "unique()";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for the remote trending collection.
pub struct AppwriteStore {
    client: Client,
    endpoint: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    documents: Vec<TrendingRecord>,
}

/// Error envelope the store sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
}

impl AppwriteStore {
    /// Create a store client from the configured endpoint and ids.
    pub fn new(config: &StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            collection_id: config.collection_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    fn with_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .header("X-Appwrite-Project", &self.project_id)
            .header("content-type", "application/json");
        match &self.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    /// Turns a non-success response into `StoreUnavailable`, preferring the
    /// store's own error message over the bare status code.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| format!("store returned {}", status));
        Err(CinetrendError::StoreUnavailable(message))
    }
}

#[async_trait]
impl TrendingStore for AppwriteStore {
    async fn find_by_term(&self, term: &str) -> Result<Option<TrendingRecord>> {
        let request = self
            .with_headers(self.client.get(self.documents_url()))
            .query(&[("queries[]", Query::equal("searchTerm", term))]);
        let response = request.send().await.map_err(transport_error)?;
        let response = Self::ensure_success(response).await?;
        let list: DocumentList = response.json().await.map_err(decode_error)?;
        debug!("Store lookup for {:?}: {} match(es)", term, list.total);
        Ok(list.documents.into_iter().next())
    }

    async fn create(&self, new: NewTrendingRecord) -> Result<TrendingRecord> {
        let body = json!({
            "documentId": UNIQUE_ID,
            "data": {
                "searchTerm": new.search_term,
                "count": 1,
                "movie_id": new.movie_id,
                "poster_url": new.poster_url,
            },
        });
        let request = self
            .with_headers(self.client.post(self.documents_url()))
            .json(&body);
        let response = request.send().await.map_err(transport_error)?;
        let response = Self::ensure_success(response).await?;
        response.json().await.map_err(decode_error)
    }

    async fn set_count(&self, id: &str, count: u64) -> Result<()> {
        let url = format!("{}/{}", self.documents_url(), id);
        let body = json!({"data": {"count": count}});
        let request = self.with_headers(self.client.patch(url)).json(&body);
        let response = request.send().await.map_err(transport_error)?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn top_by_count(&self, limit: usize) -> Result<Vec<TrendingRecord>> {
        let request = self
            .with_headers(self.client.get(self.documents_url()))
            .query(&[
                ("queries[]", Query::limit(limit)),
                ("queries[]", Query::order_desc("count")),
            ]);
        let response = request.send().await.map_err(transport_error)?;
        let response = Self::ensure_success(response).await?;
        let list: DocumentList = response.json().await.map_err(decode_error)?;
        Ok(list.documents)
    }
}

fn transport_error(e: reqwest::Error) -> CinetrendError {
    CinetrendError::StoreUnavailable(format!("request failed: {}", e))
}

fn decode_error(e: reqwest::Error) -> CinetrendError {
    CinetrendError::StoreUnavailable(format!("invalid store response: {}", e))
}
