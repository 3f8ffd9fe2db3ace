//! Vehicle contracts
//!
//! A single-vehicle contract insures one vehicle and carries its own payment
//! schedule. A master contract groups single-vehicle contracts of one legal
//! policy holder and has no schedule; it is active while it has no children
//! or while any child is active.

use serde::Serialize;
use tracing::info;

use core_kernel::{Amount, ContractNumber, InsurerId, PartyId};
use domain_party::Vehicle;
use crate::contract::{Billable, ContractHeader, InsuranceContract};
use crate::error::ContractError;
use crate::schedule::PaymentSchedule;

fn check_beneficiary(beneficiary: Option<PartyId>, policy_holder: PartyId) -> Result<(), ContractError> {
    if beneficiary == Some(policy_holder) {
        return Err(ContractError::validation(
            "Beneficiary and policy holder cannot be the same person",
        ));
    }
    Ok(())
}

/// Contract insuring one vehicle
#[derive(Debug, Clone, Serialize)]
pub struct SingleVehicleContract {
    header: ContractHeader,
    beneficiary: Option<PartyId>,
    schedule: PaymentSchedule,
    vehicle: Vehicle,
}

impl SingleVehicleContract {
    /// Creates an active single-vehicle contract
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Validation` if the beneficiary is the policy
    /// holder or the coverage amount is negative
    pub fn new(
        contract_number: ContractNumber,
        insurer: InsurerId,
        beneficiary: Option<PartyId>,
        policy_holder: PartyId,
        schedule: PaymentSchedule,
        coverage_amount: Amount,
        vehicle: Vehicle,
    ) -> Result<Self, ContractError> {
        check_beneficiary(beneficiary, policy_holder)?;
        Ok(Self {
            header: ContractHeader::new(contract_number, insurer, policy_holder, coverage_amount)?,
            beneficiary,
            schedule,
            vehicle,
        })
    }

    pub fn beneficiary(&self) -> Option<PartyId> {
        self.beneficiary
    }

    /// Replaces the beneficiary
    pub fn set_beneficiary(&mut self, beneficiary: Option<PartyId>) -> Result<(), ContractError> {
        check_beneficiary(beneficiary, self.policy_holder())?;
        self.beneficiary = beneficiary;
        Ok(())
    }

    /// Beneficiary if set, otherwise the policy holder
    pub fn payee(&self) -> PartyId {
        self.beneficiary.unwrap_or_else(|| self.policy_holder())
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}

impl InsuranceContract for SingleVehicleContract {
    fn header(&self) -> &ContractHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut ContractHeader {
        &mut self.header
    }
}

impl Billable for SingleVehicleContract {
    fn schedule(&self) -> &PaymentSchedule {
        &self.schedule
    }

    fn schedule_mut(&mut self) -> &mut PaymentSchedule {
        &mut self.schedule
    }
}

/// Grouping contract over single-vehicle contracts
///
/// Children keep the order in which they were added; payment allocation
/// depends on it.
#[derive(Debug, Clone, Serialize)]
pub struct MasterVehicleContract {
    header: ContractHeader,
    beneficiary: Option<PartyId>,
    children: Vec<SingleVehicleContract>,
}

impl MasterVehicleContract {
    /// Creates an empty, active master contract with zero coverage
    ///
    /// The legal form of the policy holder is checked by the insurer, which
    /// owns the person directory.
    pub fn new(
        contract_number: ContractNumber,
        insurer: InsurerId,
        beneficiary: Option<PartyId>,
        policy_holder: PartyId,
    ) -> Result<Self, ContractError> {
        check_beneficiary(beneficiary, policy_holder)?;
        Ok(Self {
            header: ContractHeader::new(contract_number, insurer, policy_holder, 0)?,
            beneficiary,
            children: Vec::new(),
        })
    }

    pub fn beneficiary(&self) -> Option<PartyId> {
        self.beneficiary
    }

    /// Replaces the beneficiary
    pub fn set_beneficiary(&mut self, beneficiary: Option<PartyId>) -> Result<(), ContractError> {
        check_beneficiary(beneficiary, self.policy_holder())?;
        self.beneficiary = beneficiary;
        Ok(())
    }

    /// Children in insertion order
    pub fn children(&self) -> &[SingleVehicleContract] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [SingleVehicleContract] {
        &mut self.children
    }

    pub fn child(&self, number: &ContractNumber) -> Option<&SingleVehicleContract> {
        self.children.iter().find(|c| c.contract_number() == number)
    }

    pub fn child_mut(&mut self, number: &ContractNumber) -> Option<&mut SingleVehicleContract> {
        self.children.iter_mut().find(|c| c.contract_number() == number)
    }

    /// Checks that `child` may join this group
    ///
    /// Both contracts must be active and share the insurer and the policy
    /// holder, and the child must not already be a member.
    pub fn check_adoption(&self, child: &SingleVehicleContract) -> Result<(), ContractError> {
        if !self.is_active() || !child.is_active() {
            return Err(ContractError::invalid_contract(format!(
                "Contracts {} and {} must both be active",
                self.contract_number(),
                child.contract_number()
            )));
        }
        if self.insurer() != child.insurer() {
            return Err(ContractError::invalid_contract(format!(
                "Contract {} belongs to another insurer",
                child.contract_number()
            )));
        }
        if self.policy_holder() != child.policy_holder() {
            return Err(ContractError::validation(format!(
                "Contract {} has a different policy holder",
                child.contract_number()
            )));
        }
        if self.child(child.contract_number()).is_some() {
            return Err(ContractError::DuplicateContractNumber(
                child.contract_number().to_string(),
            ));
        }
        Ok(())
    }

    /// Appends a child after [`Self::check_adoption`]
    pub fn adopt(&mut self, child: SingleVehicleContract) -> Result<(), ContractError> {
        self.check_adoption(&child)?;
        info!(
            master = %self.contract_number(),
            child = %child.contract_number(),
            "child contract added to master"
        );
        self.children.push(child);
        Ok(())
    }
}

impl InsuranceContract for MasterVehicleContract {
    fn header(&self) -> &ContractHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut ContractHeader {
        &mut self.header
    }

    fn is_active(&self) -> bool {
        if self.children.is_empty() {
            return self.header.is_active();
        }
        self.children.iter().any(|c| c.is_active())
    }

    fn deactivate(&mut self) {
        for child in &mut self.children {
            child.deactivate();
        }
        self.header.deactivate();
    }
}
