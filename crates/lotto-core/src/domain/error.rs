// ============================================================================
// domain/error.rs - ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for re-prompt loops)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors - structural misuse, not recoverable
    // ========================================================================
    #[error("invalid draw configuration: {reason}")]
    InvalidConfiguration { reason: String },

    // ========================================================================
    // Input Errors - caller-supplied values, recoverable by prompting again
    // ========================================================================
    #[error("expected {expected} numbers, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("number {value} is outside the range {min}..={max}")]
    OutOfRange { value: u32, min: u32, max: u32 },

    #[error("duplicate number: {value}")]
    DuplicateValue { value: u32 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfiguration { reason } => vec![
                "Check the draw configuration".into(),
                format!("Details: {}", reason),
                "The pick count must fit inside the number range".into(),
            ],
            Self::CountMismatch { expected, .. } => vec![
                format!("Enter exactly {} numbers", expected),
                "Separate numbers with commas, e.g. 1,2,3,4,5,6".into(),
            ],
            Self::OutOfRange { min, max, .. } => {
                vec![format!("Only numbers from {} to {} are allowed", min, max)]
            }
            Self::DuplicateValue { value } => vec![
                format!("{} appears more than once", value),
                "Every number must be distinct".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration { .. } => ErrorCategory::Configuration,
            Self::CountMismatch { .. } | Self::OutOfRange { .. } | Self::DuplicateValue { .. } => {
                ErrorCategory::Input
            }
        }
    }

    /// `true` when the caller can fix the error by supplying new values.
    ///
    /// Configuration errors are structural and fail fast; input errors are
    /// the re-prompt loop's bread and butter.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
}
