//! Document store port.
//!
//! Defines the contract for the hosted document database that holds survey
//! records. Only two operations are consumed: create and read by id.
//!
//! # Design
//!
//! - **Opaque ids**: the store assigns identifiers; callers never construct them
//! - **Flat documents**: fields are a JSON object map; nested values are allowed
//!   but survey records never produce them
//! - **Absence is not an error**: `get` returns `Ok(None)` for unknown ids

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::survey::Document;
use async_trait::async_trait;

/// Port for creating and reading documents in named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document and return the identifier the store assigned.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` / `ExternalServiceError` on persistence failure
    async fn create(&self, collection: &str, fields: Document) -> Result<RecordId, DomainError>;

    /// Read a document by id.
    ///
    /// Returns `None` if no document exists under `id`.
    async fn get(&self, collection: &str, id: &RecordId) -> Result<Option<Document>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn document_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn DocumentStore) {}
    }
}
