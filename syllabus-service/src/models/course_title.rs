use std::fmt;
use thiserror::Error;

/// Longest accepted title, counted in characters after trimming.
pub const MAX_TITLE_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("Course title is required.")]
    Missing,

    #[error("Course title too long (max {max}).", max = MAX_TITLE_CHARS)]
    TooLong,
}

/// A trimmed, non-empty course title of at most [`MAX_TITLE_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTitle(String);

impl CourseTitle {
    /// Trim and validate raw user input. The emptiness check runs first.
    pub fn parse(raw: &str) -> Result<Self, TitleError> {
        let title = raw.trim();

        if title.is_empty() {
            return Err(TitleError::Missing);
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(TitleError::TooLong);
        }

        Ok(Self(title.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CourseTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
