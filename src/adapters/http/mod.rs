//! HTTP adapters - REST API implementations.

mod router;
pub mod survey;

pub use router::app_router;
pub use survey::{survey_router, SurveyAppState};
