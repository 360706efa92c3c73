//! Error types for lead handling, submission and site configuration.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

use crate::lead::RequiredField;

/// A lead could not be built from the submitted form fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("missing required fields: {0:?}")]
    MissingRequired(Vec<RequiredField>),
}

impl LeadError {
    /// Fields that were empty when the lead was validated.
    #[must_use]
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            Self::MissingRequired(fields) => fields,
        }
    }
}

/// The backend step of a submission failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("transport failure: {reason}")]
    Transport { reason: String },
}

impl SubmitError {
    /// Create a transport error.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }
}

/// Site configuration could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {reason}")]
    Parse { reason: String },
}

impl ConfigError {
    /// Create a parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}
