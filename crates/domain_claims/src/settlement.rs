//! Claim settlement
//!
//! # Travel claims
//!
//! The affected persons must be a non-empty subset of the insured persons.
//! Each *insured* person receives `coverage / |affected|` (integer division)
//! and the contract is always deactivated.
//!
//! # Vehicle-damage claims
//!
//! Damage must be positive. The full coverage goes to the beneficiary, or to
//! the policy holder when there is none. The contract is deactivated when the
//! damage reaches the total-loss share of the vehicle's original value.
//!
//! In both cases the contract must be active, and a claim whose payout would
//! be zero is rejected.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::money::{ensure_unit_ratio, meets_ratio};
use core_kernel::{Amount, ClaimId, PartyId, Timestamp};
use domain_contract::{InsuranceContract, SingleVehicleContract, TravelContract};
use crate::claim::{ClaimKind, ClaimSettlement};
use crate::error::ClaimError;
use crate::payment::ClaimPayout;

/// Thresholds used when settling claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementRules {
    /// Share of the vehicle's original value at which damage is a total loss
    pub total_loss_ratio: Decimal,
}

impl Default for SettlementRules {
    fn default() -> Self {
        Self {
            total_loss_ratio: dec!(0.7),
        }
    }
}

impl SettlementRules {
    pub fn validate(&self) -> Result<(), ClaimError> {
        ensure_unit_ratio(self.total_loss_ratio)?;
        Ok(())
    }

    /// Returns true if `damage` is a total loss for a vehicle worth `value`
    pub fn is_total_loss(&self, damage: Amount, value: Amount) -> Result<bool, ClaimError> {
        Ok(meets_ratio(damage, value, self.total_loss_ratio)?)
    }
}

fn ensure_active<C: InsuranceContract>(contract: &C) -> Result<(), ClaimError> {
    if !contract.is_active() {
        return Err(ClaimError::InvalidContract(format!(
            "Contract {} is inactive",
            contract.contract_number()
        )));
    }
    Ok(())
}

fn ensure_payable(amount: Amount) -> Result<(), ClaimError> {
    if amount <= 0 {
        return Err(ClaimError::invalid(format!(
            "Claim would pay out {}, nothing to settle",
            amount
        )));
    }
    Ok(())
}

/// Validates a travel claim and computes its payouts
#[instrument(skip(contract, affected), fields(contract_number = %contract.contract_number(), affected = affected.len()))]
pub fn assess_travel_claim(
    contract: &TravelContract,
    affected: &[PartyId],
    now: Timestamp,
) -> Result<ClaimSettlement, ClaimError> {
    let mut distinct: Vec<PartyId> = Vec::with_capacity(affected.len());
    for person in affected {
        if !distinct.contains(person) {
            distinct.push(*person);
        }
    }
    if distinct.is_empty() {
        return Err(ClaimError::invalid("Affected persons cannot be empty"));
    }
    if let Some(stranger) = distinct.iter().find(|p| !contract.insures(p)) {
        return Err(ClaimError::UninsuredPerson(stranger.to_string()));
    }
    ensure_active(contract)?;

    let persons = Amount::try_from(distinct.len())
        .map_err(|_| ClaimError::invalid("Too many affected persons"))?;
    let share = contract.coverage_amount() / persons;
    ensure_payable(share)?;
    debug!(share, "travel claim assessed");

    Ok(ClaimSettlement {
        id: ClaimId::new_v7(),
        kind: ClaimKind::Travel,
        contract_number: contract.contract_number().clone(),
        settled_at: now,
        payouts: contract
            .insured_persons()
            .iter()
            .map(|p| ClaimPayout {
                payee: *p,
                amount: share,
            })
            .collect(),
        deactivates_contract: true,
    })
}

/// Validates a vehicle-damage claim and computes its payout
#[instrument(skip(contract, rules), fields(contract_number = %contract.contract_number()))]
pub fn assess_vehicle_claim(
    contract: &SingleVehicleContract,
    expected_damage: Amount,
    rules: &SettlementRules,
    now: Timestamp,
) -> Result<ClaimSettlement, ClaimError> {
    if expected_damage <= 0 {
        return Err(ClaimError::invalid(format!(
            "Expected damage must be positive, got {}",
            expected_damage
        )));
    }
    ensure_active(contract)?;
    ensure_payable(contract.coverage_amount())?;

    let total_loss = rules.is_total_loss(expected_damage, contract.vehicle().original_value)?;
    debug!(total_loss, "vehicle claim assessed");

    Ok(ClaimSettlement {
        id: ClaimId::new_v7(),
        kind: ClaimKind::VehicleDamage,
        contract_number: contract.contract_number().clone(),
        settled_at: now,
        payouts: vec![ClaimPayout {
            payee: contract.payee(),
            amount: contract.coverage_amount(),
        }],
        deactivates_contract: total_loss,
    })
}

/// Assesses a travel claim and deactivates the contract
pub fn settle_travel_claim(
    contract: &mut TravelContract,
    affected: &[PartyId],
    now: Timestamp,
) -> Result<ClaimSettlement, ClaimError> {
    let settlement = assess_travel_claim(contract, affected, now)?;
    settlement.apply(contract)?;
    Ok(settlement)
}

/// Assesses a vehicle-damage claim and deactivates the contract on total loss
pub fn settle_vehicle_claim(
    contract: &mut SingleVehicleContract,
    expected_damage: Amount,
    rules: &SettlementRules,
    now: Timestamp,
) -> Result<ClaimSettlement, ClaimError> {
    let settlement = assess_vehicle_claim(contract, expected_damage, rules, now)?;
    settlement.apply(contract)?;
    Ok(settlement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_loss_threshold() {
        let rules = SettlementRules::default();
        assert!(!rules.is_total_loss(10_000, 15_000).unwrap());
        assert!(rules.is_total_loss(10_500, 15_000).unwrap());
        assert!(rules.is_total_loss(11_000, 15_000).unwrap());
    }

    #[test]
    fn test_rules_validation() {
        assert!(SettlementRules::default().validate().is_ok());
        let rules = SettlementRules {
            total_loss_ratio: dec!(-0.1),
        };
        assert!(rules.validate().is_err());
    }
}
