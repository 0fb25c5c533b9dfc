//! In-memory trending store.
//!
//! Keeps the discovery flow functional without remote-store credentials:
//! the unit tests run against it, and the CLI falls back to it when no
//! store is configured (trending is then process-local and forgotten on
//! exit).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CinetrendError, Result};

use super::{NewTrendingRecord, TrendingRecord, TrendingStore};

/// HashMap-backed store keyed by document id. Cloning shares the map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    documents: Arc<RwLock<HashMap<String, TrendingRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl TrendingStore for MemoryStore {
    async fn find_by_term(&self, term: &str) -> Result<Option<TrendingRecord>> {
        let documents = self.documents.read().await;
        Ok(documents
            .values()
            .find(|doc| doc.search_term == term)
            .cloned())
    }

    async fn create(&self, new: NewTrendingRecord) -> Result<TrendingRecord> {
        let record = TrendingRecord {
            id: Uuid::new_v4().to_string(),
            search_term: new.search_term,
            count: 1,
            movie_id: new.movie_id,
            poster_url: new.poster_url,
        };
        let mut documents = self.documents.write().await;
        documents.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn set_count(&self, id: &str, count: u64) -> Result<()> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(id) {
            Some(doc) => {
                doc.count = count;
                Ok(())
            }
            None => Err(CinetrendError::StoreUnavailable(format!(
                "no document with id {}",
                id
            ))),
        }
    }

    async fn top_by_count(&self, limit: usize) -> Result<Vec<TrendingRecord>> {
        let documents = self.documents.read().await;
        let mut all: Vec<TrendingRecord> = documents.values().cloned().collect();
        // Tie-break alphabetically so the order is deterministic; the
        // contract itself only guarantees non-increasing counts.
        all.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.search_term.cmp(&b.search_term))
        });
        all.truncate(limit);
        Ok(all)
    }
}
