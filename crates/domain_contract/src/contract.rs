//! The contract family
//!
//! Every contract carries a [`ContractHeader`]. Variant-specific state lives
//! on the concrete types in [`crate::vehicle`] and [`crate::travel`]; the
//! [`Contract`] enum is what an insurer stores and routes on.

use serde::Serialize;
use tracing::info;

use core_kernel::money::ensure_non_negative;
use core_kernel::{Amount, ContractNumber, InsurerId, PartyId};
use crate::error::ContractError;
use crate::schedule::PaymentSchedule;
use crate::travel::TravelContract;
use crate::vehicle::{MasterVehicleContract, SingleVehicleContract};

/// Fields shared by every contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractHeader {
    contract_number: ContractNumber,
    insurer: InsurerId,
    policy_holder: PartyId,
    coverage_amount: Amount,
    is_active: bool,
}

impl ContractHeader {
    /// Creates an active header
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Validation` if the coverage amount is negative
    pub fn new(
        contract_number: ContractNumber,
        insurer: InsurerId,
        policy_holder: PartyId,
        coverage_amount: Amount,
    ) -> Result<Self, ContractError> {
        ensure_non_negative(coverage_amount, "Coverage amount")?;
        Ok(Self {
            contract_number,
            insurer,
            policy_holder,
            coverage_amount,
            is_active: true,
        })
    }

    pub fn contract_number(&self) -> &ContractNumber {
        &self.contract_number
    }

    pub fn insurer(&self) -> InsurerId {
        self.insurer
    }

    pub fn policy_holder(&self) -> PartyId {
        self.policy_holder
    }

    pub fn coverage_amount(&self) -> Amount {
        self.coverage_amount
    }

    /// The contract's own flag, ignoring any children
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Clears the active flag. There is no way back.
    pub fn deactivate(&mut self) {
        if self.is_active {
            info!(contract_number = %self.contract_number, "contract deactivated");
        }
        self.is_active = false;
    }

    /// Replaces the coverage amount
    pub fn set_coverage_amount(&mut self, coverage_amount: Amount) -> Result<(), ContractError> {
        ensure_non_negative(coverage_amount, "Coverage amount")?;
        self.coverage_amount = coverage_amount;
        Ok(())
    }
}

/// Behaviour shared by every contract
pub trait InsuranceContract {
    fn header(&self) -> &ContractHeader;

    fn header_mut(&mut self) -> &mut ContractHeader;

    fn contract_number(&self) -> &ContractNumber {
        self.header().contract_number()
    }

    fn insurer(&self) -> InsurerId {
        self.header().insurer()
    }

    fn policy_holder(&self) -> PartyId {
        self.header().policy_holder()
    }

    fn coverage_amount(&self) -> Amount {
        self.header().coverage_amount()
    }

    fn set_coverage_amount(&mut self, coverage_amount: Amount) -> Result<(), ContractError> {
        self.header_mut().set_coverage_amount(coverage_amount)
    }

    /// Whether the contract can still be billed, paid or claimed against
    fn is_active(&self) -> bool {
        self.header().is_active()
    }

    /// Permanently deactivates the contract
    fn deactivate(&mut self) {
        self.header_mut().deactivate();
    }
}

/// A contract that owns a payment schedule
pub trait Billable: InsuranceContract {
    fn schedule(&self) -> &PaymentSchedule;

    fn schedule_mut(&mut self) -> &mut PaymentSchedule;
}

/// Discriminant of [`Contract`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    SingleVehicle,
    MasterVehicle,
    Travel,
}

/// Any contract an insurer can hold at top level
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Contract {
    SingleVehicle(SingleVehicleContract),
    MasterVehicle(MasterVehicleContract),
    Travel(TravelContract),
}

impl Contract {
    pub fn kind(&self) -> ContractKind {
        match self {
            Contract::SingleVehicle(_) => ContractKind::SingleVehicle,
            Contract::MasterVehicle(_) => ContractKind::MasterVehicle,
            Contract::Travel(_) => ContractKind::Travel,
        }
    }

    /// The contract's schedule; `None` for grouping contracts
    pub fn schedule(&self) -> Option<&PaymentSchedule> {
        match self {
            Contract::SingleVehicle(c) => Some(c.schedule()),
            Contract::MasterVehicle(_) => None,
            Contract::Travel(c) => Some(c.schedule()),
        }
    }

    pub fn as_single_vehicle(&self) -> Option<&SingleVehicleContract> {
        match self {
            Contract::SingleVehicle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_single_vehicle_mut(&mut self) -> Option<&mut SingleVehicleContract> {
        match self {
            Contract::SingleVehicle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_master_vehicle(&self) -> Option<&MasterVehicleContract> {
        match self {
            Contract::MasterVehicle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_master_vehicle_mut(&mut self) -> Option<&mut MasterVehicleContract> {
        match self {
            Contract::MasterVehicle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_travel(&self) -> Option<&TravelContract> {
        match self {
            Contract::Travel(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_travel_mut(&mut self) -> Option<&mut TravelContract> {
        match self {
            Contract::Travel(c) => Some(c),
            _ => None,
        }
    }
}

impl InsuranceContract for Contract {
    fn header(&self) -> &ContractHeader {
        match self {
            Contract::SingleVehicle(c) => c.header(),
            Contract::MasterVehicle(c) => c.header(),
            Contract::Travel(c) => c.header(),
        }
    }

    fn header_mut(&mut self) -> &mut ContractHeader {
        match self {
            Contract::SingleVehicle(c) => c.header_mut(),
            Contract::MasterVehicle(c) => c.header_mut(),
            Contract::Travel(c) => c.header_mut(),
        }
    }

    fn is_active(&self) -> bool {
        match self {
            Contract::SingleVehicle(c) => c.is_active(),
            Contract::MasterVehicle(c) => c.is_active(),
            Contract::Travel(c) => c.is_active(),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Contract::SingleVehicle(c) => c.deactivate(),
            Contract::MasterVehicle(c) => c.deactivate(),
            Contract::Travel(c) => c.deactivate(),
        }
    }
}

impl From<SingleVehicleContract> for Contract {
    fn from(c: SingleVehicleContract) -> Self {
        Contract::SingleVehicle(c)
    }
}

impl From<MasterVehicleContract> for Contract {
    fn from(c: MasterVehicleContract) -> Self {
        Contract::MasterVehicle(c)
    }
}

impl From<TravelContract> for Contract {
    fn from(c: TravelContract) -> Self {
        Contract::Travel(c)
    }
}
