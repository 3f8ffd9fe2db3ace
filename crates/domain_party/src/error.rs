//! Party domain errors
//!
//! This module defines all error types that can occur in the party domain,
//! including identifier validation errors and directory lookups.

use thiserror::Error;

use core_kernel::ErrorKind;

/// Errors that can occur in the party domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// Person with the given ID was not found
    #[error("Party not found: {0}")]
    PartyNotFound(String),

    /// Attempted to register a person that already exists
    #[error("Duplicate party: {0}")]
    DuplicateParty(String),

    /// Registration number is neither a company id nor a birth number
    #[error("Invalid registration number: {0}")]
    InvalidRegistrationNumber(String),

    /// License plate does not match the required format
    #[error("Invalid license plate: {0}")]
    InvalidLicensePlate(String),

    /// Invalid party data provided
    #[error("Invalid party data: {0}")]
    InvalidData(String),
}

impl PartyError {
    /// Creates a PartyNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        PartyError::PartyNotFound(id.to_string())
    }

    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        PartyError::InvalidData(message.into())
    }

    /// Classifies the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PartyError::PartyNotFound(_) => ErrorKind::NotFound,
            PartyError::DuplicateParty(_) => ErrorKind::Uniqueness,
            PartyError::InvalidRegistrationNumber(_)
            | PartyError::InvalidLicensePlate(_)
            | PartyError::InvalidData(_) => ErrorKind::Argument,
        }
    }
}
