//! Billing domain errors

use thiserror::Error;

use core_kernel::{CoreError, ErrorKind, MoneyError};
use domain_contract::ContractError;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// Payment amount is not positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Contract is inactive or belongs to another insurer
    #[error("Invalid contract: {0}")]
    InvalidContract(String),

    /// Grouping contract has no children to allocate to
    #[error("Contract {0} has no child contracts")]
    EmptyGroup(String),

    /// Balance arithmetic left the representable range
    #[error("Balance overflow on contract {0}")]
    Overflow(String),

    /// Contract domain error
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Kernel error
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl BillingError {
    /// Classifies the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::InvalidAmount(_)
            | BillingError::EmptyGroup(_)
            | BillingError::Overflow(_) => ErrorKind::Argument,
            BillingError::InvalidContract(_) => ErrorKind::InvalidState,
            BillingError::Contract(e) => e.kind(),
            BillingError::Core(e) => e.kind(),
        }
    }
}

impl From<MoneyError> for BillingError {
    fn from(e: MoneyError) -> Self {
        BillingError::Core(e.into())
    }
}
