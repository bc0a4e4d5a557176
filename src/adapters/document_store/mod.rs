//! Document Store Adapters
//!
//! Implementations of the DocumentStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryDocumentStore** - Keeps documents in memory (testing/development)
//! - **PostgresDocumentStore** - JSONB rows in PostgreSQL
//! - **FirestoreDocumentStore** - Cloud Firestore over its REST API
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::document_store::{FirestoreConfig, FirestoreDocumentStore, InMemoryDocumentStore};
//!
//! // Production: hosted document database
//! let store = FirestoreDocumentStore::new(FirestoreConfig::new("my-project", api_key))?;
//!
//! // Testing: in-memory storage
//! let store = InMemoryDocumentStore::new();
//! ```

mod firestore;
mod in_memory;
mod postgres;

pub use firestore::{FirestoreConfig, FirestoreDocumentStore};
pub use in_memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
