//! In-Memory Document Store Adapter
//!
//! Keeps documents in process memory, keyed by collection and id.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::survey::Document;
use crate::ports::DocumentStore;

type CollectionMap = HashMap<String, HashMap<RecordId, Document>>;

/// In-memory document store
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<CollectionMap>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, HashMap::len)
    }

    /// Clear all stored documents (useful for tests)
    pub async fn clear(&self) {
        self.collections.write().await.clear();
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create(&self, collection: &str, fields: Document) -> Result<RecordId, DomainError> {
        let id = RecordId::new(Uuid::new_v4().to_string())?;
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &RecordId) -> Result<Option<Document>, DomainError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn test_document() -> Document {
        let mut doc = Document::new();
        doc.insert("name".into(), Value::String("A".into()));
        doc.insert("question1".into(), 9.into());
        doc
    }

    #[tokio::test]
    async fn test_memory_store_create_and_get() {
        let store = InMemoryDocumentStore::new();

        let id = store.create("surveyData", test_document()).await.unwrap();
        let loaded = store.get("surveyData", &id).await.unwrap();

        assert_eq!(loaded, Some(test_document()));
    }

    #[tokio::test]
    async fn test_memory_store_get_unknown_id_is_absent() {
        let store = InMemoryDocumentStore::new();
        let id = RecordId::new("nope").unwrap();

        assert_eq!(store.get("surveyData", &id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_collections_are_isolated() {
        let store = InMemoryDocumentStore::new();
        let id = store.create("surveyData", test_document()).await.unwrap();

        assert_eq!(store.get("other", &id).await.unwrap(), None);
        assert_eq!(store.count("surveyData").await, 1);
        assert_eq!(store.count("other").await, 0);
    }

    #[tokio::test]
    async fn test_memory_store_assigns_distinct_ids() {
        let store = InMemoryDocumentStore::new();
        let a = store.create("surveyData", test_document()).await.unwrap();
        let b = store.create("surveyData", test_document()).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.count("surveyData").await, 2);

        store.clear().await;
        assert_eq!(store.count("surveyData").await, 0);
    }
}
