//! Claim settlement records

use serde::Serialize;
use tracing::info;

use core_kernel::{Amount, ClaimId, ContractNumber, Timestamp};
use domain_contract::InsuranceContract;
use crate::error::ClaimError;
use crate::payment::ClaimPayout;

/// Which kind of claim was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    Travel,
    VehicleDamage,
}

/// Outcome of an assessed claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimSettlement {
    pub id: ClaimId,
    pub kind: ClaimKind,
    pub contract_number: ContractNumber,
    pub settled_at: Timestamp,
    pub payouts: Vec<ClaimPayout>,
    /// Whether applying the settlement deactivates the contract
    pub deactivates_contract: bool,
}

impl ClaimSettlement {
    /// Sum of all payouts
    pub fn total_paid(&self) -> Amount {
        self.payouts
            .iter()
            .fold(0, |total: Amount, p| total.saturating_add(p.amount))
    }

    /// Performs the lifecycle transition on the settled contract
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidContract` if `contract` is not the one
    /// this settlement was assessed for
    pub fn apply<C: InsuranceContract + ?Sized>(&self, contract: &mut C) -> Result<(), ClaimError> {
        if contract.contract_number() != &self.contract_number {
            return Err(ClaimError::InvalidContract(format!(
                "Settlement for {} applied to {}",
                self.contract_number,
                contract.contract_number()
            )));
        }
        if self.deactivates_contract {
            contract.deactivate();
        }
        info!(
            claim_id = %self.id,
            contract_number = %self.contract_number,
            total_paid = self.total_paid(),
            deactivated = self.deactivates_contract,
            "claim settled"
        );
        Ok(())
    }
}
