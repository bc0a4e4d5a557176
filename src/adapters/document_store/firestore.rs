//! Firestore REST Document Store Adapter
//!
//! Talks to the Cloud Firestore v1 REST API with a web API key. Documents are
//! converted between plain JSON objects and Firestore's typed-value encoding:
//!
//! ```text
//! {"question1": 14}  <->  {"fields": {"question1": {"integerValue": "14"}}}
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Number, Value};
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode, RecordId};
use crate::domain::survey::Document;
use crate::ports::DocumentStore;

/// Configuration for the Firestore store.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Google Cloud project id.
    pub project_id: String,
    /// Firestore database id, usually `(default)`.
    pub database: String,
    /// Web API key, sent as the `key` query parameter.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://firestore.googleapis.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl FirestoreConfig {
    /// Creates a configuration for the default database of a project.
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database: "(default)".to_string(),
            api_key: Secret::new(api_key.into()),
            base_url: "https://firestore.googleapis.com/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the database id.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Firestore REST implementation of DocumentStore.
pub struct FirestoreDocumentStore {
    config: FirestoreConfig,
    client: Client,
}

#[derive(Serialize)]
struct WriteRequest {
    fields: Map<String, Value>,
}

#[derive(Deserialize)]
struct DocumentResponse {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl FirestoreDocumentStore {
    /// Creates a store with its own HTTP client.
    pub fn new(config: FirestoreConfig) -> Result<Self, DomainError> {
        let client = Client::builder().timeout(config.timeout).build().map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to create HTTP client: {}", e),
            )
        })?;

        Ok(Self { config, client })
    }

    fn collection_url(&self, collection: &str) -> Result<Url, DomainError> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Invalid Firestore base URL: {}", e),
            )
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::new(ErrorCode::InternalError, "Firestore base URL cannot hold a path")
            })?
            .pop_if_empty()
            .extend([
                "projects",
                self.config.project_id.as_str(),
                "databases",
                self.config.database.as_str(),
                "documents",
                collection,
            ]);
        Ok(url)
    }

    fn document_url(&self, collection: &str, id: &RecordId) -> Result<Url, DomainError> {
        let mut url = self.collection_url(collection)?;
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id.as_str());
        }
        Ok(url)
    }

    fn request_error(e: reqwest::Error) -> DomainError {
        let message = if e.is_timeout() {
            format!("Firestore request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else {
            e.to_string()
        };
        DomainError::new(ErrorCode::ExternalServiceError, message)
    }

    async fn status_error(response: reqwest::Response) -> DomainError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        DomainError::new(
            ErrorCode::ExternalServiceError,
            format!("Firestore returned {}: {}", status, body),
        )
    }
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    async fn create(&self, collection: &str, fields: Document) -> Result<RecordId, DomainError> {
        let response = self
            .client
            .post(self.collection_url(collection)?)
            .query(&[("key", self.config.api_key())])
            .json(&WriteRequest {
                fields: encode_fields(&fields),
            })
            .send()
            .await
            .map_err(Self::request_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let created: DocumentResponse = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Failed to parse Firestore response: {}", e),
            )
        })?;

        Ok(RecordId::new(document_id_from_name(&created.name))?)
    }

    async fn get(&self, collection: &str, id: &RecordId) -> Result<Option<Document>, DomainError> {
        if !is_document_id(id.as_str()) {
            return Ok(None);
        }

        let response = self
            .client
            .get(self.document_url(collection, id)?)
            .query(&[("key", self.config.api_key())])
            .send()
            .await
            .map_err(Self::request_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let document: DocumentResponse = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Failed to parse Firestore document: {}", e),
            )
        })?;

        Ok(Some(decode_fields(&document.fields)))
    }
}

/// Whether an id can name a single document. Dot segments and path or query
/// delimiters would address something other than the document.
fn is_document_id(id: &str) -> bool {
    !matches!(id, "." | "..") && !id.contains(['/', '?', '#'])
}

/// Last path segment of a Firestore resource name.
fn document_id_from_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

fn encode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect()
}

fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

fn decode_fields(fields: &Map<String, Value>) -> Document {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), decode_value(v)))
        .collect()
}

fn decode_value(value: &Value) -> Value {
    let Some(typed) = value.as_object() else {
        return Value::Null;
    };

    if let Some(raw) = typed.get("integerValue") {
        // Firestore sends 64-bit integers as strings.
        let parsed = match raw {
            Value::String(s) => s.parse::<i64>().ok(),
            other => other.as_i64(),
        };
        return parsed.map_or(Value::Null, |i| Value::Number(Number::from(i)));
    }
    if let Some(raw) = typed.get("doubleValue") {
        return raw
            .as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number);
    }
    if let Some(b) = typed.get("booleanValue").and_then(Value::as_bool) {
        return Value::Bool(b);
    }
    for textual in ["stringValue", "timestampValue", "referenceValue", "bytesValue"] {
        if let Some(s) = typed.get(textual).and_then(Value::as_str) {
            return Value::String(s.to_string());
        }
    }
    if let Some(map) = typed.get("mapValue") {
        let fields = map
            .get("fields")
            .and_then(Value::as_object)
            .map(decode_fields)
            .unwrap_or_default();
        return Value::Object(fields);
    }
    if let Some(array) = typed.get("arrayValue") {
        let values = array
            .get("values")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(decode_value).collect::<Vec<_>>())
            .unwrap_or_default();
        return Value::Array(values);
    }
    if let Some(point) = typed.get("geoPointValue") {
        return point.clone();
    }
    Value::Null
}
