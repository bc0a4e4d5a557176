//! Form controller for collecting one respondent's answers.
//!
//! The form owns its state exclusively. A rejected `complete()` leaves every
//! field untouched so the respondent can correct and resubmit.

use std::collections::BTreeMap;

use crate::domain::foundation::{Timestamp, ValidationError};

use super::catalog::SurveyVariant;
use super::errors::SurveyError;
use super::record::{AnswerSet, QuestionKey, Respondent, SurveyRecord};

#[derive(Debug, Clone)]
pub struct SurveyForm {
    variant: SurveyVariant,
    name: String,
    student_id: String,
    selections: BTreeMap<&'static str, u32>,
}

impl SurveyForm {
    pub fn new(variant: SurveyVariant) -> Self {
        Self {
            variant,
            name: String::new(),
            student_id: String::new(),
            selections: BTreeMap::new(),
        }
    }

    pub fn variant(&self) -> SurveyVariant {
        self.variant
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_student_id(&mut self, student_id: impl Into<String>) {
        self.student_id = student_id.into();
    }

    /// Selects an option for a question, replacing any earlier selection.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the key is not a question of this variant
    /// - `ValidationFailed` if the value is not one of the question's options
    pub fn select(&mut self, key: &str, value: u32) -> Result<(), SurveyError> {
        let question = self.variant.question(key).ok_or_else(|| {
            SurveyError::validation(
                key,
                format!("'{}' is not a question of the {} survey", key, self.variant),
            )
        })?;

        if !question.accepts(value) {
            return Err(ValidationError::not_an_option(key, question.allowed_values(), value).into());
        }

        self.selections.insert(question.key, value);
        Ok(())
    }

    /// Currently selected weight for a question.
    pub fn selection(&self, key: &str) -> Option<u32> {
        self.selections.get(key).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.variant.question_count()
    }

    /// Validates the form and produces the record to persist.
    ///
    /// # Errors
    ///
    /// - `Incomplete` unless every question has a selection
    /// - `ValidationFailed` if name or student id is blank
    pub fn complete(&self, created_at: Timestamp) -> Result<SurveyRecord, SurveyError> {
        if !self.is_complete() {
            return Err(SurveyError::incomplete(
                self.answered_count(),
                self.variant.question_count(),
            ));
        }

        let respondent = Respondent::new(self.name.as_str(), self.student_id.as_str())?;

        let mut answers = AnswerSet::new();
        for (key, value) in &self.selections {
            if let Some(key) = QuestionKey::parse(key) {
                answers.insert(key, i64::from(*value));
            }
        }

        Ok(SurveyRecord::new(respondent, answers, created_at))
    }
}
