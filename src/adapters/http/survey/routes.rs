//! Route configuration for survey endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_result, get_survey, health, list_surveys, submit_survey, SurveyAppState,
};

/// Creates the survey router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness probe
/// - `GET /api/surveys` - List surveys
/// - `GET /api/surveys/:variant` - Questionnaire definition
/// - `POST /api/surveys/:variant/responses` - Submit a completed survey
/// - `GET /api/results/:record_id` - Interpreted result
pub fn survey_router() -> Router<SurveyAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/surveys", get(list_surveys))
        .route("/api/surveys/:variant", get(get_survey))
        .route("/api/surveys/:variant/responses", post(submit_survey))
        .route("/api/results/:record_id", get(get_result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document_store::InMemoryDocumentStore;
    use crate::config::StorageConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = SurveyAppState::new(
            Arc::new(InMemoryDocumentStore::new()),
            &StorageConfig::default(),
        );
        survey_router().with_state(state)
    }

    async fn get_status(uri: &str) -> StatusCode {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn survey_router_mounts_health() {
        assert_eq!(get_status("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn survey_router_mounts_definitions() {
        assert_eq!(get_status("/api/surveys").await, StatusCode::OK);
        assert_eq!(get_status("/api/surveys/fiber").await, StatusCode::OK);
        assert_eq!(get_status("/api/surveys/sleep").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_result_is_not_found() {
        assert_eq!(
            get_status("/api/results/nonexistent-id").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn submit_to_unknown_survey_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/surveys/sleep/responses")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
