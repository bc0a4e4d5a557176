use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use fiber_survey::adapters::document_store::{
    FirestoreDocumentStore, InMemoryDocumentStore, PostgresDocumentStore,
};
use fiber_survey::adapters::http::{app_router, SurveyAppState};
use fiber_survey::config::{AppConfig, ServerConfig, StorageBackend, ValidationError};
use fiber_survey::ports::DocumentStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    info!(
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        collection = %config.storage.collection,
        "Starting fiber survey service"
    );

    let store = build_store(&config).await?;
    let state = SurveyAppState::new(store, &config.storage);
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_store(
    config: &AppConfig,
) -> Result<Arc<dyn DocumentStore>, Box<dyn std::error::Error + Send + Sync>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on restart");
            Ok(Arc::new(InMemoryDocumentStore::new()))
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or(ValidationError::MissingRequired("DATABASE__URL"))?;
            let pool = database.pool_options().connect(&database.url).await?;
            let store = PostgresDocumentStore::new(pool);
            if database.run_migrations {
                store.migrate().await?;
                info!("Database migrations applied");
            }
            Ok(Arc::new(store))
        }
        StorageBackend::Firestore => {
            let settings = config
                .firestore
                .as_ref()
                .ok_or(ValidationError::MissingRequired("FIRESTORE__PROJECT_ID"))?;
            info!(project_id = %settings.project_id, "Using Firestore storage");
            Ok(Arc::new(FirestoreDocumentStore::new(settings.to_store_config())?))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
