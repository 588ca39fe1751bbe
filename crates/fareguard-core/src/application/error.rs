//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`. Note that a
//! *rejected request* is not an error at all - it is one of the two normal
//! outcomes of the validate operation.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The rules configuration could not be read.
    #[error("Cannot read rules file {path}: {reason}")]
    RulesLoad { path: PathBuf, reason: String },

    /// The rules configuration was read but is not valid.
    #[error("Cannot parse rules file {path}: {reason}")]
    RulesParse { path: PathBuf, reason: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RulesLoad { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::RulesParse { path, reason } => vec![
                format!("Invalid rules file: {}", path.display()),
                format!("Details: {reason}"),
                "Expected an [airports] table with a codes array".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {name}"),
                "This is likely a configuration error".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RulesLoad { .. } => ErrorCategory::NotFound,
            Self::RulesParse { .. } => ErrorCategory::Configuration,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Internal,
        }
    }
}
