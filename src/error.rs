use thiserror::Error;

use crate::language::Language;

/// Failures surfaced while turning a detected reference into verse text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No text available for {}", .0.name())]
    UnresolvedEdition(Language),

    #[error("Failed to fetch {url}: {reason}")]
    FetchFailure { url: String, reason: String },

    #[error("Verse {fragment} not found in {section}")]
    VerseNotFound { section: String, fragment: String },

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Edition catalog unavailable: {0}")]
    Catalog(String),
}

impl LookupError {
    pub fn fetch(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        LookupError::FetchFailure {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
