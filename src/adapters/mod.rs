//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document_store` - Survey record persistence (in-memory, PostgreSQL, Firestore)
//! - `http` - REST API over axum

pub mod document_store;
pub mod http;

pub use document_store::{
    FirestoreConfig, FirestoreDocumentStore, InMemoryDocumentStore, PostgresDocumentStore,
};
pub use http::{app_router, SurveyAppState};
