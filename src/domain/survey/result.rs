//! Interpreted survey results and the one-shot load state machine.
//!
//! ```text
//! Pending ──┬──> Loaded
//!           ├──> NotFound
//!           └──> FetchFailed
//! ```
//!
//! All three outcomes are terminal.

use crate::domain::foundation::RecordId;

use super::errors::SurveyError;
use super::interpretation::Interpretation;
use super::record::SurveyRecord;

/// A stored record together with its interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResult {
    pub record_id: RecordId,
    pub record: SurveyRecord,
    pub interpretation: Interpretation,
}

impl SurveyResult {
    pub fn from_record(record_id: RecordId, record: SurveyRecord) -> Self {
        let interpretation = Interpretation::of(record.answers());
        Self {
            record_id,
            record,
            interpretation,
        }
    }
}

/// Where a result view stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultState {
    Pending,
    Loaded(Box<SurveyResult>),
    NotFound,
    FetchFailed(String),
}

impl ResultState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ResultState::Pending)
    }

    /// Applies the outcome of the read. Terminal states ignore further outcomes.
    pub fn resolve(self, outcome: Result<Option<SurveyResult>, SurveyError>) -> ResultState {
        if self.is_terminal() {
            return self;
        }
        match outcome {
            Ok(Some(result)) => ResultState::Loaded(Box::new(result)),
            Ok(None) => ResultState::NotFound,
            Err(e) => ResultState::FetchFailed(e.message()),
        }
    }
}
