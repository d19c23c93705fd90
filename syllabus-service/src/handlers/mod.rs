//! HTTP handlers for syllabus-service.

pub mod app;
pub mod generate;
pub mod health;
pub mod metrics;
