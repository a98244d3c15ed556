//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The player's set was built under a different configuration than the
    /// round being played; match counting requires same-sized sets.
    #[error("player set has {actual} numbers but the round draws {expected}")]
    ConfigMismatch { expected: usize, actual: usize },

    /// A generator adapter failed for a reason of its own.
    #[error("number generation failed: {reason}")]
    GeneratorFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigMismatch { expected, .. } => vec![
                format!("Build the player set with the same {}-number config", expected),
                "Use one DrawConfig for the whole round".into(),
            ],
            Self::GeneratorFailed { reason } => vec![
                format!("Generator reported: {}", reason),
                "Try again or switch to a fixed set of numbers".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigMismatch { .. } => ErrorCategory::Configuration,
            Self::GeneratorFailed { .. } => ErrorCategory::Internal,
        }
    }
}
