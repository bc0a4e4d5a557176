//! Survey command and query handlers.

mod get_survey_result;
mod result_loader;
mod submit_survey;

pub use get_survey_result::{GetSurveyResultHandler, GetSurveyResultQuery};
pub use result_loader::{Delivery, ResultLoader};
pub use submit_survey::{SubmitSurveyCommand, SubmitSurveyHandler, SubmitSurveyResult};
