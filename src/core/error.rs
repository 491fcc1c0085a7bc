//! Typed error handling for the console core
//!
//! Failures are grouped the way a backoffice screen reacts to them:
//!
//! - [`ConsoleError::Transport`]: the remote API could not be reached or answered
//!   with an error status. Carries the operation name so the UI can say what failed.
//! - [`ConsoleError::Validation`]: a draft did not pass form validation. Nothing was
//!   written to the store.
//! - [`ConsoleError::NotFound`]: a read referenced an unknown id.
//!
//! Updates and deletes of unknown ids are *not* errors, see
//! [`Mutation::NotFound`](crate::core::service::Mutation).
//!
//! # Example
//!
//! ```rust,ignore
//! match form.save(&store).await {
//!     Ok(outcome) => println!("{}", outcome.message),
//!     Err(ConsoleError::Validation(errors)) => {
//!         for e in errors.field_errors() {
//!             println!("{}: {}", e.field, e.message);
//!         }
//!     }
//!     Err(e) => eprintln!("{} ({})", e, e.error_code()),
//! }
//! ```

use serde::Serialize;
use std::fmt;

/// The main error type of the crate
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Network or API failure, wrapped at the store boundary
    #[error("Failed to {operation}: {message}")]
    Transport { operation: String, message: String },

    /// Draft rejected by form validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity was not found
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: i64 },

    /// Controller operation called in a state that does not allow it
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal errors (poisoned locks and the like)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConsoleError {
    /// Build a transport failure for `operation` from any displayable cause
    pub fn transport(operation: impl Into<String>, cause: impl fmt::Display) -> Self {
        ConsoleError::Transport {
            operation: operation.into(),
            message: cause.to_string(),
        }
    }

    pub fn not_found(entity_type: impl Into<String>, id: i64) -> Self {
        ConsoleError::NotFound {
            entity_type: entity_type.into(),
            id,
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        ConsoleError::InvalidState {
            message: message.into(),
        }
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleError::Transport { .. } => "TRANSPORT_FAILURE",
            ConsoleError::Validation(_) => "VALIDATION_FAILURE",
            ConsoleError::NotFound { .. } => "ENTITY_NOT_FOUND",
            ConsoleError::InvalidState { .. } => "INVALID_STATE",
            ConsoleError::Config(_) => "CONFIG_ERROR",
            ConsoleError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ConsoleError::Validation(_))
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors produced while validating a draft
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields failed validation
    #[error("Validation failed: {}", join_messages(.0))]
    FieldErrors(Vec<FieldError>),
}

impl ValidationError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ValidationError::FieldErrors(errors) => errors,
        }
    }

    /// The message shown to the user, one line per field
    pub fn user_message(&self) -> String {
        self.field_errors()
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True if any error concerns `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.field_errors().iter().any(|e| e.field == field)
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_yaml::Error> for ConsoleError {
    fn from(err: serde_yaml::Error) -> Self {
        ConsoleError::Config(err.to_string())
    }
}
