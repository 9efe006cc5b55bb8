use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A well-formed response did not contain a single usable row for the requested entity.
#[derive(Clone, Debug, Default, Error, PartialEq, Eq)]
pub struct NoDataError {
    subject: Option<String>,
}

impl NoDataError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the identifier that was looked up.
    #[must_use]
    pub fn for_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}

impl Display for NoDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "No data found for id={subject}"),
            None => f.write_str("No data found"),
        }
    }
}

/// The collator for a locale could not be created.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CollationError {
    #[error("'{0}' is not a valid locale")]
    InvalidLocale(String),
    #[error("No collation data for locale '{locale}': {message}")]
    MissingData { locale: String, message: String },
}
