//! HTTP DTOs for survey endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::survey::{
    Band, ChartPoint, Question, Recommendation, SurveyResult, SurveyVariant,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to submit a completed survey.
///
/// Missing fields deserialize as empty so that the form validation reports
/// them instead of the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitSurveyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_id: String,
    /// Selected weight per question key.
    #[serde(default)]
    pub answers: BTreeMap<String, u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for an accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitSurveyResponse {
    pub record_id: String,
    pub total_score: i64,
    /// Result view to navigate to.
    pub redirect: String,
}

/// Survey listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct SurveySummaryResponse {
    pub slug: &'static str,
    pub title: &'static str,
    pub question_count: usize,
    pub max_score: u32,
}

impl From<SurveyVariant> for SurveySummaryResponse {
    fn from(variant: SurveyVariant) -> Self {
        Self {
            slug: variant.slug(),
            title: variant.title(),
            question_count: variant.question_count(),
            max_score: variant.max_score(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionResponse {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub key: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_label: Option<&'static str>,
    pub options: Vec<OptionResponse>,
}

impl From<&'static Question> for QuestionResponse {
    fn from(question: &'static Question) -> Self {
        Self {
            key: question.key,
            text: question.text,
            chart_label: question.chart_label,
            options: question
                .options
                .iter()
                .map(|o| OptionResponse {
                    label: o.label,
                    value: o.value,
                })
                .collect(),
        }
    }
}

/// Full questionnaire definition.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyDefinitionResponse {
    pub slug: &'static str,
    pub title: &'static str,
    pub max_score: u32,
    pub questions: Vec<QuestionResponse>,
}

impl From<SurveyVariant> for SurveyDefinitionResponse {
    fn from(variant: SurveyVariant) -> Self {
        Self {
            slug: variant.slug(),
            title: variant.title(),
            max_score: variant.max_score(),
            questions: variant.questions().iter().map(Into::into).collect(),
        }
    }
}

/// Terminal state of a result load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    Loaded,
    NotFound,
    FetchFailed,
}

/// Interpreted record.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretedResultResponse {
    pub name: String,
    pub student_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub total_score: i64,
    pub band: Band,
    pub title: &'static str,
    pub recommendation: &'static Recommendation,
    pub chart: Vec<ChartPoint>,
}

impl From<SurveyResult> for InterpretedResultResponse {
    fn from(result: SurveyResult) -> Self {
        let respondent = result.record.respondent();
        Self {
            name: respondent.name().to_string(),
            student_id: respondent.student_id().to_string(),
            created_at: result.record.created_at().map(|t| t.to_rfc3339()),
            total_score: result.interpretation.total_score(),
            band: result.interpretation.band(),
            title: result.interpretation.title(),
            recommendation: result.interpretation.recommendation(),
            chart: result.interpretation.chart().to_vec(),
        }
    }
}

/// Result view envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse {
    pub state: ResultStatus,
    pub record_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InterpretedResultResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
