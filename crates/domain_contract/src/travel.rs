//! Travel contracts insuring a group of persons

use serde::Serialize;

use core_kernel::{Amount, ContractNumber, InsurerId, PartyId};
use crate::contract::{Billable, ContractHeader, InsuranceContract};
use crate::error::ContractError;
use crate::schedule::PaymentSchedule;

/// Contract covering a set of insured persons
#[derive(Debug, Clone, Serialize)]
pub struct TravelContract {
    header: ContractHeader,
    schedule: PaymentSchedule,
    insured_persons: Vec<PartyId>,
}

impl TravelContract {
    /// Creates an active travel contract
    ///
    /// Duplicate persons collapse into one entry; first occurrence wins the
    /// position.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Validation` if no person is insured or the
    /// coverage amount is negative
    pub fn new(
        contract_number: ContractNumber,
        insurer: InsurerId,
        policy_holder: PartyId,
        schedule: PaymentSchedule,
        coverage_amount: Amount,
        insured_persons: impl IntoIterator<Item = PartyId>,
    ) -> Result<Self, ContractError> {
        let mut persons: Vec<PartyId> = Vec::new();
        for person in insured_persons {
            if !persons.contains(&person) {
                persons.push(person);
            }
        }
        if persons.is_empty() {
            return Err(ContractError::validation("Insured persons cannot be empty"));
        }

        Ok(Self {
            header: ContractHeader::new(contract_number, insurer, policy_holder, coverage_amount)?,
            schedule,
            insured_persons: persons,
        })
    }

    pub fn insured_persons(&self) -> &[PartyId] {
        &self.insured_persons
    }

    pub fn insures(&self, person: &PartyId) -> bool {
        self.insured_persons.contains(person)
    }
}

impl InsuranceContract for TravelContract {
    fn header(&self) -> &ContractHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut ContractHeader {
        &mut self.header
    }
}

impl Billable for TravelContract {
    fn schedule(&self) -> &PaymentSchedule {
        &self.schedule
    }

    fn schedule_mut(&mut self) -> &mut PaymentSchedule {
        &mut self.schedule
    }
}
