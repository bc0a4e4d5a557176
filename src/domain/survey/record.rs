//! Survey record and its flat document shape.
//!
//! A record is stored as a single flat key/value document:
//!
//! ```text
//! { "name": "...", "studentId": "...", "question1": 14, ..., "createdAt": "2025-04-01T09:30:00.000Z" }
//! ```
//!
//! Reading is schema-driven: identity fields, question fields and `createdAt`
//! are picked out; anything else in the document is ignored.

use serde::Serialize;
use serde_json::{Number, Value};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Flat field mapping exchanged with the document store.
pub type Document = serde_json::Map<String, Value>;

pub const NAME_FIELD: &str = "name";
pub const STUDENT_ID_FIELD: &str = "studentId";
pub const CREATED_AT_FIELD: &str = "createdAt";
pub const QUESTION_PREFIX: &str = "question";

/// Whether a document field holds a question answer.
pub fn is_question_key(key: &str) -> bool {
    key.starts_with(QUESTION_PREFIX)
}

/// Key of an answered question.
///
/// Ordered by numeric suffix so `question2` sorts before `question10`; keys
/// without a numeric suffix sort after all numbered keys, lexically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionKey(String);

impl QuestionKey {
    /// Returns `None` unless the key follows the question naming convention.
    pub fn parse(key: &str) -> Option<Self> {
        is_question_key(key).then(|| Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn number(&self) -> Option<u64> {
        self.0[QUESTION_PREFIX.len()..].parse().ok()
    }
}

impl Ord for QuestionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for QuestionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who answered the survey.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Respondent {
    name: String,
    student_id: String,
}

impl Respondent {
    /// Creates a respondent for submission; both fields must be non-blank.
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        let student_id = student_id.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field(NAME_FIELD));
        }
        if student_id.is_empty() {
            return Err(ValidationError::empty_field(STUDENT_ID_FIELD));
        }
        Ok(Self { name, student_id })
    }

    /// Rebuilds a respondent from stored fields without re-validating.
    pub fn from_stored(name: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }
}

/// Answered questions and their weights, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet(BTreeMap<QuestionKey, i64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a weight, replacing any earlier answer for the same key.
    pub fn insert(&mut self, key: QuestionKey, value: i64) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionKey, i64)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    /// Sum of all weights; zero for an empty set. Saturates instead of overflowing.
    pub fn total(&self) -> i64 {
        self.0.values().fold(0, |acc: i64, v| acc.saturating_add(*v))
    }
}

/// A persisted survey response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecord {
    respondent: Respondent,
    answers: AnswerSet,
    created_at: Option<Timestamp>,
}

impl SurveyRecord {
    pub fn new(respondent: Respondent, answers: AnswerSet, created_at: Timestamp) -> Self {
        Self {
            respondent,
            answers,
            created_at: Some(created_at),
        }
    }

    pub fn respondent(&self) -> &Respondent {
        &self.respondent
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Creation time; `None` when the stored document lacks a readable one.
    pub fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }

    /// Flattens the record into the stored document shape.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert(NAME_FIELD.into(), Value::String(self.respondent.name.clone()));
        doc.insert(
            STUDENT_ID_FIELD.into(),
            Value::String(self.respondent.student_id.clone()),
        );
        for (key, value) in self.answers.iter() {
            doc.insert(key.as_str().to_string(), Value::Number(Number::from(value)));
        }
        if let Some(created_at) = &self.created_at {
            doc.insert(CREATED_AT_FIELD.into(), Value::String(created_at.to_rfc3339()));
        }
        doc
    }

    /// Reads a record back from a stored document.
    ///
    /// Missing identity fields read as empty strings. Question fields whose
    /// value is not an integer in `0..=u32::MAX` are skipped.
    pub fn from_document(doc: &Document) -> Self {
        let text = |field: &str| {
            doc.get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let mut answers = AnswerSet::new();
        for (field, value) in doc {
            let Some(key) = QuestionKey::parse(field) else {
                continue;
            };
            match integer_weight(value) {
                Some(weight) if (0..=MAX_STORED_WEIGHT).contains(&weight) => {
                    answers.insert(key, weight)
                }
                Some(weight) => {
                    tracing::warn!(field = %field, weight, "Skipping out-of-range answer")
                }
                None => tracing::warn!(field = %field, value = %value, "Skipping non-integer answer"),
            }
        }

        let created_at = doc
            .get(CREATED_AT_FIELD)
            .and_then(Value::as_str)
            .and_then(Timestamp::parse_rfc3339);

        Self {
            respondent: Respondent::from_stored(text(NAME_FIELD), text(STUDENT_ID_FIELD)),
            answers,
            created_at,
        }
    }
}

/// Largest weight accepted from a stored document.
const MAX_STORED_WEIGHT: i64 = u32::MAX as i64;

fn integer_weight(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}
