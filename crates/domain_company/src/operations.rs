//! Charging, payments and claims routed by contract number

use tracing::{info, instrument, warn};

use core_kernel::{Amount, ContractNumber, PartyId};
use domain_billing::accrual::{accrue, accrue_contract};
use domain_claims::settlement::{assess_travel_claim, assess_vehicle_claim};
use domain_claims::ClaimSettlement;
use domain_contract::InsuranceContract;
use crate::company::{InsuranceCompany, Location};
use crate::error::CompanyError;

impl InsuranceCompany {
    /// Accrues every active top-level contract up to the current time
    ///
    /// Masters accrue through their active children.
    ///
    /// # Returns
    ///
    /// Total number of periods charged
    #[instrument(skip(self), fields(now = %self.clock.now()))]
    pub fn charge_premiums_on_contracts(&mut self) -> Result<u32, CompanyError> {
        let now = self.clock.now();
        let mut periods = 0;
        for contract in self.contracts.iter_mut().filter(|c| c.is_active()) {
            periods += accrue_contract(contract, now)?;
        }
        info!(periods, "premiums charged");
        Ok(periods)
    }

    /// Accrues one contract, top level or child, up to the current time
    #[instrument(skip(self, contract_number), fields(contract_number = %contract_number))]
    pub fn charge_premium_on_contract(&mut self, contract_number: &ContractNumber) -> Result<u32, CompanyError> {
        let now = self.clock.now();
        let periods = match self.require_location(contract_number)? {
            Location::TopLevel(index) => accrue_contract(&mut self.contracts[index], now)?,
            Location::Child { .. } => accrue(self.single_vehicle_mut(contract_number)?, now)?,
        };
        Ok(periods)
    }

    /// Applies a payment to a contract at the current time
    ///
    /// Masters spread the payment over their children. A child contract can
    /// also be paid directly by its own number.
    #[instrument(skip(self, contract_number), fields(contract_number = %contract_number))]
    pub fn pay(&mut self, contract_number: &ContractNumber, amount: Amount) -> Result<(), CompanyError> {
        let now = self.clock.now();
        let result = match self.require_location(contract_number)? {
            Location::TopLevel(index) => self.handler.pay(&mut self.contracts[index], amount, now),
            Location::Child { master, child } => {
                let contract = self.contracts[master]
                    .as_master_vehicle_mut()
                    .map(|m| &mut m.children_mut()[child])
                    .ok_or_else(|| CompanyError::not_found(contract_number))?;
                self.handler.pay_scheduled(contract, amount, now)
            }
        };
        result.inspect_err(|e| warn!(error = %e, "payment rejected"))?;
        Ok(())
    }

    /// Settles a travel claim and credits every insured person
    ///
    /// # Errors
    ///
    /// - argument error if `affected` is empty, contains a person who is not
    ///   insured, or the share per person would be zero
    /// - invalid-state error if the contract is inactive
    #[instrument(skip(self, contract_number, affected), fields(contract_number = %contract_number, affected = affected.len()))]
    pub fn process_travel_claim(
        &mut self,
        contract_number: &ContractNumber,
        affected: &[PartyId],
    ) -> Result<ClaimSettlement, CompanyError> {
        let now = self.clock.now();
        let index = match self.require_location(contract_number)? {
            Location::TopLevel(index) => index,
            Location::Child { .. } => {
                return Err(CompanyError::WrongContractKind(format!(
                    "{} is not a travel contract",
                    contract_number
                )))
            }
        };
        let contract = self.contracts[index].as_travel().ok_or_else(|| {
            CompanyError::WrongContractKind(format!("{} is not a travel contract", contract_number))
        })?;

        let settlement = assess_travel_claim(contract, affected, now)
            .inspect_err(|e| warn!(error = %e, "travel claim rejected"))?;
        self.credit_payouts(&settlement)?;

        if let Some(contract) = self.contracts[index].as_travel_mut() {
            settlement.apply(contract)?;
        }
        Ok(settlement)
    }

    /// Settles a vehicle-damage claim and credits the payee
    ///
    /// The contract may be held at top level or under a master.
    ///
    /// # Errors
    ///
    /// - argument error if the damage is not positive or the coverage is zero
    /// - invalid-state error if the contract is inactive
    #[instrument(skip(self, contract_number), fields(contract_number = %contract_number))]
    pub fn process_vehicle_claim(
        &mut self,
        contract_number: &ContractNumber,
        expected_damage: Amount,
    ) -> Result<ClaimSettlement, CompanyError> {
        let now = self.clock.now();
        let rules = self.settlement.clone();
        let settlement = {
            let contract = self.single_vehicle_mut(contract_number)?;
            assess_vehicle_claim(contract, expected_damage, &rules, now)
                .inspect_err(|e| warn!(error = %e, "vehicle claim rejected"))?
        };
        self.credit_payouts(&settlement)?;

        settlement.apply(self.single_vehicle_mut(contract_number)?)?;
        Ok(settlement)
    }

    /// Credits every payout, checking all payees first
    fn credit_payouts(&mut self, settlement: &ClaimSettlement) -> Result<(), CompanyError> {
        for payout in &settlement.payouts {
            self.persons.require(&payout.payee)?;
        }
        for payout in &settlement.payouts {
            self.persons.credit_payout(&payout.payee, payout.amount)?;
        }
        Ok(())
    }
}
