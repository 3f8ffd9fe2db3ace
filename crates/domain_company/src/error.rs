//! Company-level errors
//!
//! Every domain error is wrapped unchanged so that its classification
//! survives up to the HTTP layer.

use thiserror::Error;

use core_kernel::{CoreError, ErrorKind};
use domain_billing::BillingError;
use domain_claims::ClaimError;
use domain_contract::ContractError;
use domain_party::PartyError;

/// Errors surfaced by `InsuranceCompany` operations
#[derive(Debug, Error)]
pub enum CompanyError {
    /// No contract with this number is held by the insurer
    #[error("Contract not found: {0}")]
    ContractNotFound(String),

    /// The contract exists but is of the wrong kind for the operation
    #[error("Wrong contract kind: {0}")]
    WrongContractKind(String),

    /// Argument rejected at the company boundary
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Party(#[from] PartyError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CompanyError {
    pub fn not_found(number: impl std::fmt::Display) -> Self {
        CompanyError::ContractNotFound(number.to_string())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        CompanyError::InvalidArgument(message.into())
    }

    /// Classifies the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompanyError::ContractNotFound(_) => ErrorKind::NotFound,
            CompanyError::WrongContractKind(_) | CompanyError::InvalidArgument(_) => {
                ErrorKind::Argument
            }
            CompanyError::Party(e) => e.kind(),
            CompanyError::Contract(e) => e.kind(),
            CompanyError::Billing(e) => e.kind(),
            CompanyError::Claim(e) => e.kind(),
            CompanyError::Core(e) => e.kind(),
        }
    }
}
