//! Fiber Survey - dietary survey collection and score interpretation
//!
//! Collects a respondent's answers to a fixed questionnaire, stores them as a
//! flat document, and interprets a stored record into a total score, one of
//! three recommendation bands, and per-question chart values.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
