//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations over the document store port. Submissions
//! are commands (write), result reads are queries.

pub mod handlers;

pub use handlers::{
    Delivery, GetSurveyResultHandler, GetSurveyResultQuery, ResultLoader, SubmitSurveyCommand,
    SubmitSurveyHandler, SubmitSurveyResult,
};
