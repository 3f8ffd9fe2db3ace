//! Contract DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Amount, PartyId};
use domain_company::ContractRef;
use domain_contract::{
    Contract, ContractKind, InsuranceContract, PaymentSchedule, PremiumFrequency,
    SingleVehicleContract,
};

#[derive(Debug, Deserialize, Validate)]
pub struct InsureVehicleRequest {
    #[validate(length(min = 1))]
    pub contract_number: String,
    pub beneficiary: Option<PartyId>,
    pub policy_holder: PartyId,
    #[validate(range(min = 1))]
    pub premium: Amount,
    pub frequency: PremiumFrequency,
    #[validate(length(equal = 7))]
    pub license_plate: String,
    #[validate(range(min = 1))]
    pub original_value: Amount,
}

#[derive(Debug, Deserialize, Validate)]
pub struct InsurePersonsRequest {
    #[validate(length(min = 1))]
    pub contract_number: String,
    pub policy_holder: PartyId,
    #[validate(range(min = 1))]
    pub premium: Amount,
    pub frequency: PremiumFrequency,
    #[validate(length(min = 1))]
    pub insured_persons: Vec<PartyId>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMasterRequest {
    #[validate(length(min = 1))]
    pub contract_number: String,
    pub beneficiary: Option<PartyId>,
    pub policy_holder: PartyId,
}

/// Moves a top-level single-vehicle contract under the master in the path
#[derive(Debug, Deserialize, Validate)]
pub struct AddChildRequest {
    #[validate(length(min = 1))]
    pub contract_number: String,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub premium: Amount,
    pub frequency: PremiumFrequency,
    pub next_due_date: NaiveDateTime,
    pub outstanding_balance: Amount,
}

impl From<&PaymentSchedule> for ScheduleResponse {
    fn from(schedule: &PaymentSchedule) -> Self {
        Self {
            premium: schedule.premium(),
            frequency: schedule.frequency(),
            next_due_date: schedule.next_due_date(),
            outstanding_balance: schedule.outstanding_balance(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub contract_number: String,
    pub kind: ContractKind,
    pub is_active: bool,
    pub policy_holder: PartyId,
    pub coverage_amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<PartyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub insured_persons: Vec<PartyId>,
}

impl ContractResponse {
    fn with_vehicle(mut self, contract: &SingleVehicleContract) -> Self {
        self.beneficiary = contract.beneficiary();
        self.license_plate = Some(contract.vehicle().license_plate.clone());
        self
    }
}

impl From<ContractRef<'_>> for ContractResponse {
    fn from(contract: ContractRef<'_>) -> Self {
        let response = Self {
            contract_number: contract.contract_number().to_string(),
            kind: contract.kind(),
            is_active: contract.is_active(),
            policy_holder: contract.policy_holder(),
            coverage_amount: contract.coverage_amount(),
            master_contract: contract.master_number().map(ToString::to_string),
            beneficiary: None,
            schedule: contract.schedule().map(ScheduleResponse::from),
            license_plate: None,
            children: Vec::new(),
            insured_persons: Vec::new(),
        };

        match contract {
            ContractRef::Child { contract, .. } => response.with_vehicle(contract),
            ContractRef::TopLevel(Contract::SingleVehicle(single)) => response.with_vehicle(single),
            ContractRef::TopLevel(Contract::MasterVehicle(master)) => Self {
                beneficiary: master.beneficiary(),
                children: master
                    .children()
                    .iter()
                    .map(|c| c.contract_number().to_string())
                    .collect(),
                ..response
            },
            ContractRef::TopLevel(Contract::Travel(travel)) => Self {
                insured_persons: travel.insured_persons().to_vec(),
                ..response
            },
        }
    }
}
