//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `survey` - Questionnaires, answer collection and score interpretation

pub mod foundation;
pub mod survey;
