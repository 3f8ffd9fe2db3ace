//! Contract issuance and grouping

use tracing::{info, instrument, warn};

use core_kernel::{Amount, ContractNumber, PartyId};
use domain_billing::accrual::accrue;
use domain_contract::{
    ContractNumberRegistry, InsuranceContract, MasterVehicleContract, PaymentSchedule,
    PremiumFrequency, SingleVehicleContract, TravelContract,
};
use domain_party::Vehicle;
use crate::company::{InsuranceCompany, Location};
use crate::error::CompanyError;

impl InsuranceCompany {
    fn require_persons(&self, ids: &[PartyId]) -> Result<(), CompanyError> {
        for id in ids {
            self.persons.require(id)?;
        }
        Ok(())
    }

    /// Issues a single-vehicle contract
    ///
    /// The coverage is derived from the vehicle value. The schedule starts at
    /// the current time and the first premium is charged immediately, so the
    /// new contract owes one premium and is next due one period from now.
    ///
    /// # Errors
    ///
    /// - argument error if the premium is not positive or too low for the
    ///   vehicle, the beneficiary is the policy holder, or a person is unknown
    /// - uniqueness error if the number was already issued
    #[instrument(skip(self, contract_number, vehicle), fields(contract_number = %contract_number, plate = %vehicle.license_plate))]
    pub fn insure_vehicle(
        &mut self,
        contract_number: ContractNumber,
        beneficiary: Option<PartyId>,
        policy_holder: PartyId,
        premium: Amount,
        frequency: PremiumFrequency,
        vehicle: Vehicle,
    ) -> Result<ContractNumber, CompanyError> {
        let coverage = self.underwriting.vehicle_coverage(premium, frequency, &vehicle)?;
        self.issued.ensure_available(&contract_number)?;
        self.require_persons(&[policy_holder])?;
        if let Some(beneficiary) = beneficiary {
            self.require_persons(&[beneficiary])?;
        }

        let now = self.clock.now();
        let schedule = PaymentSchedule::new(premium, frequency, now)?;
        let mut contract = SingleVehicleContract::new(
            contract_number.clone(),
            self.id,
            beneficiary,
            policy_holder,
            schedule,
            coverage,
            vehicle,
        )?;
        accrue(&mut contract, now)?;

        self.issued.reserve(&contract_number)?;
        self.contracts.push(contract.into());
        info!(coverage, "vehicle insured");
        Ok(contract_number)
    }

    /// Issues a travel contract for a set of persons
    ///
    /// Duplicate persons count once. The first premium is charged
    /// immediately.
    ///
    /// # Errors
    ///
    /// - argument error if the set is empty, the premium is too low for the
    ///   number of persons, or a person is unknown
    /// - uniqueness error if the number was already issued
    #[instrument(skip(self, contract_number, insured_persons), fields(contract_number = %contract_number, persons = insured_persons.len()))]
    pub fn insure_persons(
        &mut self,
        contract_number: ContractNumber,
        policy_holder: PartyId,
        premium: Amount,
        frequency: PremiumFrequency,
        insured_persons: Vec<PartyId>,
    ) -> Result<ContractNumber, CompanyError> {
        let mut distinct: Vec<PartyId> = Vec::with_capacity(insured_persons.len());
        for person in insured_persons {
            if !distinct.contains(&person) {
                distinct.push(person);
            }
        }

        let coverage = self.underwriting.travel_coverage(premium, frequency, distinct.len())?;
        self.issued.ensure_available(&contract_number)?;
        self.require_persons(&[policy_holder])?;
        self.require_persons(&distinct)?;

        let now = self.clock.now();
        let schedule = PaymentSchedule::new(premium, frequency, now)?;
        let mut contract = TravelContract::new(
            contract_number.clone(),
            self.id,
            policy_holder,
            schedule,
            coverage,
            distinct,
        )?;
        accrue(&mut contract, now)?;

        self.issued.reserve(&contract_number)?;
        self.contracts.push(contract.into());
        info!(coverage, "persons insured");
        Ok(contract_number)
    }

    /// Creates an empty grouping contract for a legal policy holder
    ///
    /// # Errors
    ///
    /// - argument error if the policy holder is not a legal person, is
    ///   unknown, or equals the beneficiary
    /// - uniqueness error if the number was already issued
    #[instrument(skip(self, contract_number), fields(contract_number = %contract_number))]
    pub fn create_master_vehicle_contract(
        &mut self,
        contract_number: ContractNumber,
        beneficiary: Option<PartyId>,
        policy_holder: PartyId,
    ) -> Result<ContractNumber, CompanyError> {
        self.issued.ensure_available(&contract_number)?;
        let holder = self.persons.require(&policy_holder)?;
        if !holder.is_legal_entity() {
            warn!(%policy_holder, "master contract requested by natural person");
            return Err(CompanyError::invalid("Policy holder must be a legal entity"));
        }
        if let Some(beneficiary) = beneficiary {
            self.require_persons(&[beneficiary])?;
        }

        let contract =
            MasterVehicleContract::new(contract_number.clone(), self.id, beneficiary, policy_holder)?;
        self.issued.reserve(&contract_number)?;
        self.contracts.push(contract.into());
        info!("master contract created");
        Ok(contract_number)
    }

    /// Moves a top-level single-vehicle contract under a master contract
    ///
    /// The single contract leaves the top-level list and is appended to the
    /// master's children. Its number stays reserved.
    ///
    /// # Errors
    ///
    /// - not-found error if either contract is not held at top level
    /// - argument error if the contracts are of the wrong kinds
    /// - argument error if their policy holders differ
    /// - invalid-state error if either is inactive
    #[instrument(skip(self, master_number, single_number), fields(master = %master_number, single = %single_number))]
    pub fn move_single_vehicle_contract_to_master(
        &mut self,
        master_number: &ContractNumber,
        single_number: &ContractNumber,
    ) -> Result<(), CompanyError> {
        let master_index = self.top_level_index(master_number)?;
        let single_index = self.top_level_index(single_number)?;

        let Some(child) = self.contracts[single_index].as_single_vehicle().cloned() else {
            return Err(CompanyError::WrongContractKind(format!(
                "{} is not a single-vehicle contract",
                single_number
            )));
        };
        let Some(master) = self.contracts[master_index].as_master_vehicle_mut() else {
            return Err(CompanyError::WrongContractKind(format!(
                "{} is not a master contract",
                master_number
            )));
        };
        master.adopt(child).inspect_err(|e| {
            warn!(error = %e, "contract move rejected");
        })?;

        self.contracts.remove(single_index);
        Ok(())
    }

    /// Explicitly deactivates a contract; masters cascade to their children
    #[instrument(skip(self, contract_number), fields(contract_number = %contract_number))]
    pub fn deactivate_contract(&mut self, contract_number: &ContractNumber) -> Result<(), CompanyError> {
        match self.require_location(contract_number)? {
            Location::TopLevel(index) => self.contracts[index].deactivate(),
            Location::Child { .. } => self.single_vehicle_mut(contract_number)?.deactivate(),
        }
        Ok(())
    }

    fn top_level_index(&self, number: &ContractNumber) -> Result<usize, CompanyError> {
        match self.require_location(number)? {
            Location::TopLevel(index) => Ok(index),
            Location::Child { .. } => Err(CompanyError::invalid(format!(
                "Contract {} already belongs to a master contract",
                number
            ))),
        }
    }
}
