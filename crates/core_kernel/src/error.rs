//! Core error types used across the system

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::MoneyError;
use crate::temporal::TemporalError;

/// Coarse classification shared by every domain error
///
/// Callers (the HTTP layer, the company driver) decide how to react based on
/// the kind rather than on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Null/empty identifiers, non-positive amounts, mismatched sets
    Argument,
    /// The object was valid once but is no longer actionable
    InvalidState,
    /// An identifier is already in use
    Uniqueness,
    /// A referenced entity does not exist
    NotFound,
}

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        CoreError::InvalidStateTransition(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    /// Classifies the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Money(_) | CoreError::Temporal(_) | CoreError::Validation(_) => {
                ErrorKind::Argument
            }
            CoreError::InvalidStateTransition(_) => ErrorKind::InvalidState,
            CoreError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
