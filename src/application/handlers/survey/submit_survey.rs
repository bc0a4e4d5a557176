//! SubmitSurveyHandler - Command handler for storing a completed survey.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::{RecordId, Timestamp};
use crate::domain::survey::{SurveyError, SurveyForm, SurveyVariant};
use crate::ports::DocumentStore;

/// Command to submit one respondent's answers.
#[derive(Debug, Clone)]
pub struct SubmitSurveyCommand {
    pub variant: SurveyVariant,
    pub name: String,
    pub student_id: String,
    /// Selected weight per question key.
    pub answers: BTreeMap<String, u32>,
}

/// Result of a stored submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSurveyResult {
    pub record_id: RecordId,
    pub total_score: i64,
    /// Where the client should navigate to view the result.
    pub redirect_path: String,
}

/// Handler for survey submissions.
pub struct SubmitSurveyHandler {
    store: Arc<dyn DocumentStore>,
    collection: String,
    result_path: String,
}

impl SubmitSurveyHandler {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            result_path: "/graph".to_string(),
        }
    }

    /// Sets the path prefix of the result view.
    pub fn with_result_path(mut self, result_path: impl Into<String>) -> Self {
        self.result_path = result_path.into();
        self
    }

    pub async fn handle(&self, cmd: SubmitSurveyCommand) -> Result<SubmitSurveyResult, SurveyError> {
        // 1. Fill the form; rejects unknown questions and off-list values
        let mut form = SurveyForm::new(cmd.variant);
        form.set_name(cmd.name);
        form.set_student_id(cmd.student_id);
        for (key, value) in &cmd.answers {
            form.select(key, *value).map_err(|e| rejected(cmd.variant, e))?;
        }

        // 2. Completeness and identity checks; nothing is written on failure
        let record = form
            .complete(Timestamp::now())
            .map_err(|e| rejected(cmd.variant, e))?;
        let total_score = record.answers().total();

        // 3. Persist, no retry
        let record_id = self
            .store
            .create(&self.collection, record.to_document())
            .await
            .map_err(|e| {
                tracing::error!(
                    collection = %self.collection,
                    survey = %cmd.variant,
                    error = %e,
                    "Failed to store survey record"
                );
                SurveyError::persistence(e.message)
            })?;

        tracing::info!(
            record_id = %record_id,
            survey = %cmd.variant,
            total_score,
            "Survey record stored"
        );

        Ok(SubmitSurveyResult {
            redirect_path: format!("{}/{}", self.result_path.trim_end_matches('/'), record_id),
            record_id,
            total_score,
        })
    }
}

fn rejected(variant: SurveyVariant, error: SurveyError) -> SurveyError {
    tracing::warn!(survey = %variant, error = %error, "Survey submission rejected");
    error
}
