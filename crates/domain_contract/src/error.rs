//! Contract domain errors

use thiserror::Error;

use core_kernel::{CoreError, ErrorKind, MoneyError, TemporalError};

/// Errors that can occur in the contract domain
#[derive(Debug, Error)]
pub enum ContractError {
    /// Invalid argument supplied to a contract operation
    #[error("Validation error: {0}")]
    Validation(String),

    /// The contract exists but cannot be acted upon
    #[error("Invalid contract: {0}")]
    InvalidContract(String),

    /// Contract number already issued by this insurer
    #[error("Contract number already taken: {0}")]
    DuplicateContractNumber(String),

    /// Contract not found
    #[error("Contract not found: {0}")]
    ContractNotFound(String),

    /// Kernel error (calendar overflow, amount checks)
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ContractError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ContractError::Validation(message.into())
    }

    /// Creates an invalid contract error
    pub fn invalid_contract(message: impl Into<String>) -> Self {
        ContractError::InvalidContract(message.into())
    }

    /// Creates a contract not found error
    pub fn not_found(number: impl std::fmt::Display) -> Self {
        ContractError::ContractNotFound(number.to_string())
    }

    /// Classifies the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::Validation(_) => ErrorKind::Argument,
            ContractError::InvalidContract(_) => ErrorKind::InvalidState,
            ContractError::DuplicateContractNumber(_) => ErrorKind::Uniqueness,
            ContractError::ContractNotFound(_) => ErrorKind::NotFound,
            ContractError::Core(e) => e.kind(),
        }
    }
}

impl From<TemporalError> for ContractError {
    fn from(e: TemporalError) -> Self {
        ContractError::Core(e.into())
    }
}

impl From<MoneyError> for ContractError {
    fn from(e: MoneyError) -> Self {
        ContractError::Core(e.into())
    }
}
