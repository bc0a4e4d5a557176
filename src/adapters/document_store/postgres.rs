//! PostgreSQL implementation of DocumentStore.
//!
//! Stores each document as a JSONB row in the `documents` table.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, RecordId};
use crate::domain::survey::Document;
use crate::ports::DocumentStore;

/// PostgreSQL implementation of DocumentStore.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    /// Creates a new PostgresDocumentStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), DomainError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to run migrations: {}", e),
                )
            })
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn create(&self, collection: &str, fields: Document) -> Result<RecordId, DomainError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, fields)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(collection)
        .bind(Json(fields))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert document: {}", e),
            )
            .with_detail("collection", collection)
        })?;

        Ok(RecordId::new(id.to_string())?)
    }

    async fn get(&self, collection: &str, id: &RecordId) -> Result<Option<Document>, DomainError> {
        // Ids this store never issued cannot exist in it.
        let Some(uuid) = parse_document_id(id) else {
            return Ok(None);
        };

        let row: Option<(Json<Document>,)> = sqlx::query_as(
            r#"
            SELECT fields
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch document: {}", e),
            )
            .with_detail("collection", collection)
        })?;

        Ok(row.map(|(Json(fields),)| fields))
    }
}

fn parse_document_id(id: &RecordId) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}
