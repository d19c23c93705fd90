//! Domain models for syllabus-service.

pub mod course_title;

pub use course_title::{CourseTitle, TitleError, MAX_TITLE_CHARS};
