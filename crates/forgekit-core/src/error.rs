//! Unified error handling for forgekit core.
//!
//! [`ForgeError`] wraps domain, availability, application, and generation
//! errors so the CLI handles a single type. Messages from the wrapped errors
//! are surfaced verbatim; every variant also offers user-actionable
//! suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, AvailabilityError, GenerationError};
use crate::domain::DomainError;

/// Root error type for forgekit core operations.
#[derive(Debug, Error, Clone)]
pub enum ForgeError {
    /// Naming rules or document invariants were violated.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A candidate name is taken or its folder already exists.
    #[error(transparent)]
    Availability(#[from] AvailabilityError),

    /// Orchestration or collaborator failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// A generator flow failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ForgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Availability(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Generation(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in forgekit".into(),
                "Please report this issue at: https://github.com/forgekit/forgekit/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation | crate::domain::ErrorCategory::Policy => {
                    ErrorCategory::Validation
                }
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
            },
            Self::Availability(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Generation(_) => ErrorCategory::External,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    External,
    Internal,
}

/// Convenient result type alias.
pub type ForgeResult<T> = Result<T, ForgeError>;
