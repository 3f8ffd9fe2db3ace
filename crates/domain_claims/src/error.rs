//! Claims domain errors

use thiserror::Error;

use core_kernel::{CoreError, ErrorKind, MoneyError};
use domain_contract::ContractError;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// Empty person set, non-positive damage or a zero payout
    #[error("Invalid claim: {0}")]
    InvalidClaim(String),

    /// An affected person is not insured by the contract
    #[error("Person {0} is not insured by the contract")]
    UninsuredPerson(String),

    /// The contract can no longer be claimed against
    #[error("Invalid contract: {0}")]
    InvalidContract(String),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClaimError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ClaimError::InvalidClaim(message.into())
    }

    /// Classifies the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClaimError::InvalidClaim(_) | ClaimError::UninsuredPerson(_) => ErrorKind::Argument,
            ClaimError::InvalidContract(_) => ErrorKind::InvalidState,
            ClaimError::Contract(e) => e.kind(),
            ClaimError::Core(e) => e.kind(),
        }
    }
}

impl From<MoneyError> for ClaimError {
    fn from(e: MoneyError) -> Self {
        ClaimError::Core(e.into())
    }
}
