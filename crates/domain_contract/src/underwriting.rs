//! Underwriting rules applied at issuance
//!
//! Rules decide whether a premium is high enough for the risk and derive the
//! coverage amount. Ratios are exact decimals.
//!
//! | Rule | Default |
//! |------|---------|
//! | annual vehicle premium / vehicle value | at least 0.02 |
//! | vehicle coverage / vehicle value | 0.5, truncated |
//! | annual travel premium per insured person | at least 5 |
//! | travel coverage per insured person | 10 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::money::{ensure_positive, ensure_unit_ratio, meets_ratio, scaled_truncated};
use core_kernel::Amount;
use domain_party::Vehicle;
use crate::error::ContractError;
use crate::frequency::PremiumFrequency;
use crate::schedule::annual_premium;

/// Issuance thresholds and coverage derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderwritingRules {
    /// Minimum annual premium as a share of the vehicle's original value
    pub min_vehicle_premium_ratio: Decimal,
    /// Coverage as a share of the vehicle's original value
    pub vehicle_coverage_ratio: Decimal,
    /// Minimum annual premium per insured traveller
    pub travel_min_annual_premium_per_person: Amount,
    /// Coverage per insured traveller
    pub travel_coverage_per_person: Amount,
}

impl Default for UnderwritingRules {
    fn default() -> Self {
        Self {
            min_vehicle_premium_ratio: dec!(0.02),
            vehicle_coverage_ratio: dec!(0.5),
            travel_min_annual_premium_per_person: 5,
            travel_coverage_per_person: 10,
        }
    }
}

impl UnderwritingRules {
    /// Checks that ratios lie in `[0, 1]` and per-person amounts are non-negative
    pub fn validate(&self) -> Result<(), ContractError> {
        ensure_unit_ratio(self.min_vehicle_premium_ratio)?;
        ensure_unit_ratio(self.vehicle_coverage_ratio)?;
        if self.travel_min_annual_premium_per_person < 0 || self.travel_coverage_per_person < 0 {
            return Err(ContractError::validation(
                "Travel per-person amounts must be non-negative",
            ));
        }
        Ok(())
    }

    /// Underwrites a vehicle and returns the coverage amount
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Validation` if the premium is not positive or
    /// its annual equivalent is below the required share of the vehicle value
    pub fn vehicle_coverage(
        &self,
        premium: Amount,
        frequency: PremiumFrequency,
        vehicle: &Vehicle,
    ) -> Result<Amount, ContractError> {
        ensure_positive(premium, "Premium")?;
        let annual = annual_premium(premium, frequency)?;
        if !meets_ratio(annual, vehicle.original_value, self.min_vehicle_premium_ratio)? {
            return Err(ContractError::validation(format!(
                "Annual premium {} is below {} of vehicle value {}",
                annual, self.min_vehicle_premium_ratio, vehicle.original_value
            )));
        }
        Ok(scaled_truncated(vehicle.original_value, self.vehicle_coverage_ratio)?)
    }

    /// Underwrites a group of travellers and returns the coverage amount
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Validation` if there are no persons, the
    /// premium is not positive, or the annual premium is below the per-person
    /// minimum
    pub fn travel_coverage(
        &self,
        premium: Amount,
        frequency: PremiumFrequency,
        persons: usize,
    ) -> Result<Amount, ContractError> {
        ensure_positive(premium, "Premium")?;
        if persons == 0 {
            return Err(ContractError::validation("Insured persons cannot be empty"));
        }
        let persons = Amount::try_from(persons)
            .map_err(|_| ContractError::validation("Too many insured persons"))?;

        let annual = annual_premium(premium, frequency)?;
        let minimum = persons
            .checked_mul(self.travel_min_annual_premium_per_person)
            .ok_or_else(|| ContractError::validation("Minimum premium overflow"))?;
        if annual < minimum {
            return Err(ContractError::validation(format!(
                "Annual premium {} is below the minimum {} for {} persons",
                annual, minimum, persons
            )));
        }

        persons
            .checked_mul(self.travel_coverage_per_person)
            .ok_or_else(|| ContractError::validation("Coverage overflow"))
    }
}
