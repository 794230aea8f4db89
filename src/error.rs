//! Error types for the concept naming engine
//!
//! Absence of a name or description is never an error: resolution returns
//! `Option`. These errors cover malformed input at the API boundary
//! (unparseable locales and tags, blank designations, unknown ids).

use thiserror::Error;

/// Main error type for concept naming operations
#[derive(Debug, Error)]
pub enum ConceptError {
    #[error("invalid locale '{value}': {reason}")]
    InvalidLocale { value: String, reason: String },

    #[error("invalid designation tag '{0}'")]
    InvalidTag(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ConceptError {
    pub fn invalid_locale(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLocale {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConceptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_locale() {
        let e = ConceptError::invalid_locale("_GB", "missing language");
        assert_eq!(e.to_string(), "invalid locale '_GB': missing language");
    }

    #[test]
    fn display_invalid_tag() {
        let e = ConceptError::InvalidTag("FAVOURITE".into());
        assert_eq!(e.to_string(), "invalid designation tag 'FAVOURITE'");
    }

    #[test]
    fn display_not_found() {
        let e = ConceptError::NotFound("name 42".into());
        assert_eq!(e.to_string(), "not found: name 42");
    }

    #[test]
    fn display_internal() {
        let e = ConceptError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(e.to_string(), "internal: boom");
    }
}
