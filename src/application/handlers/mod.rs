//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod survey;

pub use survey::{
    Delivery, GetSurveyResultHandler, GetSurveyResultQuery, ResultLoader, SubmitSurveyCommand,
    SubmitSurveyHandler, SubmitSurveyResult,
};
