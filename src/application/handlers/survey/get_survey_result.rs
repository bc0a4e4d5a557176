//! GetSurveyResultHandler - Query handler for one interpreted survey record.

use std::sync::Arc;

use crate::domain::foundation::RecordId;
use crate::domain::survey::{SurveyError, SurveyRecord, SurveyResult};
use crate::ports::DocumentStore;

/// Query for a single stored record.
#[derive(Debug, Clone)]
pub struct GetSurveyResultQuery {
    pub record_id: RecordId,
}

/// Handler for result reads.
pub struct GetSurveyResultHandler {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl GetSurveyResultHandler {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Reads the record once. `Ok(None)` means no record exists under the id.
    pub async fn handle(
        &self,
        query: GetSurveyResultQuery,
    ) -> Result<Option<SurveyResult>, SurveyError> {
        let document = self
            .store
            .get(&self.collection, &query.record_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    record_id = %query.record_id,
                    error = %e,
                    "Failed to read survey record"
                );
                SurveyError::persistence(e.message)
            })?;

        let Some(document) = document else {
            tracing::debug!(record_id = %query.record_id, "Survey record not found");
            return Ok(None);
        };

        let record = SurveyRecord::from_document(&document);
        Ok(Some(SurveyResult::from_record(query.record_id, record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::survey::{Band, Document};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockDocumentStore {
        documents: Mutex<HashMap<String, Document>>,
        fail_get: bool,
    }

    impl MockDocumentStore {
        fn with_document(id: &str, doc: serde_json::Value) -> Self {
            let mut documents = HashMap::new();
            if let serde_json::Value::Object(map) = doc {
                documents.insert(id.to_string(), map);
            }
            Self {
                documents: Mutex::new(documents),
                fail_get: false,
            }
        }

        fn failing() -> Self {
            Self {
                documents: Mutex::new(HashMap::new()),
                fail_get: true,
            }
        }
    }

    #[async_trait]
    impl DocumentStore for MockDocumentStore {
        async fn create(&self, _collection: &str, _fields: Document) -> Result<RecordId, DomainError> {
            unreachable!("reads never create")
        }

        async fn get(&self, _collection: &str, id: &RecordId) -> Result<Option<Document>, DomainError> {
            if self.fail_get {
                return Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"));
            }
            Ok(self.documents.lock().unwrap().get(id.as_str()).cloned())
        }
    }

    fn query(id: &str) -> GetSurveyResultQuery {
        GetSurveyResultQuery {
            record_id: RecordId::new(id).unwrap(),
        }
    }

    #[tokio::test]
    async fn interprets_stored_record() {
        let store = Arc::new(MockDocumentStore::with_document(
            "abc",
            json!({
                "name": "김민재",
                "studentId": "20231234",
                "question1": 14,
                "question2": 10,
                "question3": 10,
                "question4": 8,
                "question5": 12,
                "question6": 8,
                "question7": 14,
                "question8": 14,
                "createdAt": "2025-04-01T09:30:00.000Z"
            }),
        ));
        let handler = GetSurveyResultHandler::new(store, "surveyData");

        let result = handler.handle(query("abc")).await.unwrap().unwrap();

        assert_eq!(result.record_id.as_str(), "abc");
        assert_eq!(result.record.respondent().name(), "김민재");
        assert_eq!(result.interpretation.total_score(), 90);
        assert_eq!(result.interpretation.band(), Band::Good);
        assert_eq!(result.interpretation.chart().len(), 8);
    }

    #[tokio::test]
    async fn missing_record_is_absent() {
        let store = Arc::new(MockDocumentStore::with_document("abc", json!({})));
        let handler = GetSurveyResultHandler::new(store, "surveyData");

        assert!(handler.handle(query("nonexistent-id")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_failure_is_persistence_error() {
        let handler = GetSurveyResultHandler::new(Arc::new(MockDocumentStore::failing()), "surveyData");

        let result = handler.handle(query("abc")).await;

        assert!(matches!(result, Err(SurveyError::Persistence(msg)) if msg == "connection reset"));
    }
}
