//! HTTP adapter for survey endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, InterpretedResultResponse, ResultResponse, ResultStatus, SubmitSurveyRequest,
    SubmitSurveyResponse, SurveyDefinitionResponse, SurveySummaryResponse,
};
pub use handlers::SurveyAppState;
pub use routes::survey_router;
