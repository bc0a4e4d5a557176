//! HTTP handlers for survey endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::handlers::survey::{
    GetSurveyResultHandler, ResultLoader, SubmitSurveyCommand, SubmitSurveyHandler,
};
use crate::config::StorageConfig;
use crate::domain::foundation::RecordId;
use crate::domain::survey::{ResultState, SurveyError, SurveyVariant};
use crate::ports::DocumentStore;

use super::dto::{
    ErrorResponse, InterpretedResultResponse, ResultResponse, ResultStatus, SubmitSurveyRequest,
    SubmitSurveyResponse, SurveyDefinitionResponse, SurveySummaryResponse,
};

const SAVE_FAILED_MESSAGE: &str = "데이터 저장에 실패했습니다. 잠시 후 다시 시도해 주세요.";
const LOAD_FAILED_MESSAGE: &str = "결과를 불러오지 못했습니다. 잠시 후 다시 시도해 주세요.";
const NOT_FOUND_MESSAGE: &str = "해당 설문 결과를 찾을 수 없습니다.";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for survey routes. The store is built once at startup.
#[derive(Clone)]
pub struct SurveyAppState {
    pub store: Arc<dyn DocumentStore>,
    pub collection: String,
    pub result_path: String,
}

impl SurveyAppState {
    pub fn new(store: Arc<dyn DocumentStore>, storage: &StorageConfig) -> Self {
        Self {
            store,
            collection: storage.collection.clone(),
            result_path: storage.result_path.clone(),
        }
    }

    pub fn submit_survey_handler(&self) -> SubmitSurveyHandler {
        SubmitSurveyHandler::new(self.store.clone(), self.collection.clone())
            .with_result_path(self.result_path.clone())
    }

    pub fn result_loader(&self) -> ResultLoader {
        ResultLoader::new(Arc::new(GetSurveyResultHandler::new(
            self.store.clone(),
            self.collection.clone(),
        )))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
pub async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

/// GET /api/surveys - List available surveys
pub async fn list_surveys() -> Response {
    let surveys: Vec<SurveySummaryResponse> =
        SurveyVariant::ALL.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(surveys)).into_response()
}

/// GET /api/surveys/:variant - Questionnaire definition
pub async fn get_survey(Path(slug): Path<String>) -> Response {
    match slug.parse::<SurveyVariant>() {
        Ok(variant) => {
            let response: SurveyDefinitionResponse = variant.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Survey", &slug)),
        )
            .into_response(),
    }
}

/// POST /api/surveys/:variant/responses - Submit a completed survey
pub async fn submit_survey(
    State(state): State<SurveyAppState>,
    Path(slug): Path<String>,
    payload: Result<Json<SubmitSurveyRequest>, JsonRejection>,
) -> Response {
    let variant = match slug.parse::<SurveyVariant>() {
        Ok(variant) => variant,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response()
        }
    };

    let cmd = SubmitSurveyCommand {
        variant,
        name: req.name,
        student_id: req.student_id,
        answers: req.answers,
    };

    match state.submit_survey_handler().handle(cmd).await {
        Ok(result) => {
            let response = SubmitSurveyResponse {
                record_id: result.record_id.to_string(),
                total_score: result.total_score,
                redirect: result.redirect_path,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_submit_error(variant, e),
    }
}

/// GET /api/results/:record_id - Interpreted result
pub async fn get_result(
    State(state): State<SurveyAppState>,
    Path(record_id): Path<String>,
) -> Response {
    let record_id = match RecordId::new(record_id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid record ID")),
            )
                .into_response()
        }
    };

    let loaded = state.result_loader().load_to_completion(record_id.clone()).await;
    result_response(record_id, loaded)
}

// ════════════════════════════════════════════════════════════════════════════
// Response mapping
// ════════════════════════════════════════════════════════════════════════════

fn result_response(record_id: RecordId, loaded: ResultState) -> Response {
    let (status, state, result, message) = match loaded {
        ResultState::Loaded(result) => (
            StatusCode::OK,
            ResultStatus::Loaded,
            Some(InterpretedResultResponse::from(*result)),
            None,
        ),
        ResultState::NotFound => (
            StatusCode::NOT_FOUND,
            ResultStatus::NotFound,
            None,
            Some(NOT_FOUND_MESSAGE.to_string()),
        ),
        // The loader only returns terminal states; a pending one means the read never finished.
        ResultState::Pending | ResultState::FetchFailed(_) => (
            StatusCode::BAD_GATEWAY,
            ResultStatus::FetchFailed,
            None,
            Some(LOAD_FAILED_MESSAGE.to_string()),
        ),
    };

    let response = ResultResponse {
        state,
        record_id: record_id.to_string(),
        result,
        message,
    };
    (status, Json(response)).into_response()
}

fn handle_submit_error(variant: SurveyVariant, error: SurveyError) -> Response {
    let code = error.code();
    match error {
        SurveyError::Incomplete { answered, total } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(
                ErrorResponse::new(code, variant.incomplete_message())
                    .with_details(json!({ "answered": answered, "total": total })),
            ),
        )
            .into_response(),
        SurveyError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(code, message).with_details(json!({ "field": field }))),
        )
            .into_response(),
        SurveyError::Persistence(_) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::new(code, SAVE_FAILED_MESSAGE)),
        )
            .into_response(),
    }
}
