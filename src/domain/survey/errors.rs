//! Survey-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Survey-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// A field failed validation (unknown question, invalid option, empty identity).
    ValidationFailed { field: String, message: String },
    /// Submitted before every question had an answer.
    Incomplete { answered: usize, total: usize },
    /// The document store failed to create or read.
    Persistence(String),
}

impl SurveyError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SurveyError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn incomplete(answered: usize, total: usize) -> Self {
        SurveyError::Incomplete { answered, total }
    }
    pub fn persistence(message: impl Into<String>) -> Self {
        SurveyError::Persistence(message.into())
    }

    /// True for the errors that block a write and ask the user to fix the form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SurveyError::ValidationFailed { .. } | SurveyError::Incomplete { .. }
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SurveyError::Incomplete { .. } => ErrorCode::IncompleteAnswers,
            SurveyError::Persistence(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SurveyError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SurveyError::Incomplete { answered, total } => {
                format!("Only {} of {} questions answered", answered, total)
            }
            SurveyError::Persistence(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for SurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SurveyError {}

impl From<ValidationError> for SurveyError {
    fn from(err: ValidationError) -> Self {
        SurveyError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SurveyError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => SurveyError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => SurveyError::Persistence(err.to_string()),
        }
    }
}
