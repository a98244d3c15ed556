//! Unified error handling for the lottery core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
///
/// This enum wraps all possible errors that can occur when using
/// lotto-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LottoError {
    /// Errors from the domain layer (invariant violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl LottoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Input => ErrorCategory::Input,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Check if the caller can recover by supplying new input.
    ///
    /// Only input errors qualify; the core never retries on its own. The
    /// re-prompt loop is the driver's policy.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Structural misuse. Fail fast, do not re-prompt.
    Configuration,
    /// Bad caller-supplied values. Prompt again.
    Input,
    /// Unexpected internal failure.
    Internal,
}

/// Convenient result type alias.
pub type LottoResult<T> = Result<T, LottoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_recoverable() {
        let err: LottoError = DomainError::DuplicateValue { value: 7 }.into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.is_recoverable());
    }

    #[test]
    fn configuration_errors_are_not_recoverable() {
        let err: LottoError = DomainError::InvalidConfiguration {
            reason: "pick count must be at least 1".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn suggestions_pass_through_from_the_domain() {
        let err: LottoError = DomainError::OutOfRange {
            value: 99,
            min: 1,
            max: 45,
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("1 to 45")));
    }
}
