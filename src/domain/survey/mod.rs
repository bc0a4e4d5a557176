//! Survey domain - questionnaires, answer collection and score interpretation.
//!
//! - `catalog` - fixed questionnaires and option weights
//! - `form` - form controller that validates a submission
//! - `record` - stored record and its flat document shape
//! - `rubric` - score bands and recommendation text
//! - `interpretation` - chart pairs, total and band of a record
//! - `result` - interpreted results and the load state machine

mod catalog;
mod errors;
mod form;
mod interpretation;
mod record;
mod result;
mod rubric;

pub use catalog::{chart_label, AnswerOption, Question, SurveyVariant};
pub use errors::SurveyError;
pub use form::SurveyForm;
pub use interpretation::{ChartPoint, Interpretation};
pub use record::{
    is_question_key, AnswerSet, Document, QuestionKey, Respondent, SurveyRecord,
    CREATED_AT_FIELD, NAME_FIELD, QUESTION_PREFIX, STUDENT_ID_FIELD,
};
pub use result::{ResultState, SurveyResult};
pub use rubric::{Band, Recommendation, RecommendationSection};
