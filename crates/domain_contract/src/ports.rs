//! Contract Domain Ports
//!
//! Issuance only needs one thing from the insurer's registry: whether a
//! contract number has ever been issued. The `ContractNumberRegistry` trait
//! is that seam; `IssuedContractNumbers` is the in-memory implementation the
//! insurer uses.

use std::collections::HashSet;

use core_kernel::ContractNumber;
use crate::error::ContractError;

/// Contract-number uniqueness check supplied by the registry
pub trait ContractNumberRegistry {
    /// Returns true if the number was ever issued
    fn is_taken(&self, number: &ContractNumber) -> bool;

    /// Records the number as issued
    ///
    /// # Errors
    ///
    /// Returns `ContractError::DuplicateContractNumber` if already taken
    fn reserve(&mut self, number: &ContractNumber) -> Result<(), ContractError>;

    /// Fails if the number is already taken, without reserving it
    fn ensure_available(&self, number: &ContractNumber) -> Result<(), ContractError> {
        if self.is_taken(number) {
            return Err(ContractError::DuplicateContractNumber(number.to_string()));
        }
        Ok(())
    }
}

/// Numbers issued by one insurer over its whole lifetime
///
/// Numbers are never released, so a contract moved under a master or
/// deactivated still blocks its number.
#[derive(Debug, Clone, Default)]
pub struct IssuedContractNumbers {
    issued: HashSet<ContractNumber>,
}

impl IssuedContractNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

impl ContractNumberRegistry for IssuedContractNumbers {
    fn is_taken(&self, number: &ContractNumber) -> bool {
        self.issued.contains(number)
    }

    fn reserve(&mut self, number: &ContractNumber) -> Result<(), ContractError> {
        if !self.issued.insert(number.clone()) {
            return Err(ContractError::DuplicateContractNumber(number.to_string()));
        }
        Ok(())
    }
}
