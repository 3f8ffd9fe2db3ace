//! Request handlers, one module per resource

pub mod health;
pub mod persons;
pub mod contracts;
pub mod billing;
pub mod claims;

use core_kernel::ContractNumber;

use crate::error::ApiError;

/// Parses a contract number taken from the path or a request body
pub(crate) fn contract_number(value: String) -> Result<ContractNumber, ApiError> {
    Ok(ContractNumber::new(value)?)
}
