//! Insured vehicles

use serde::{Deserialize, Serialize};

use core_kernel::Amount;
use crate::error::PartyError;
use crate::validation::is_valid_license_plate;

/// A vehicle that can be covered by a single-vehicle contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Seven uppercase letters or digits
    pub license_plate: String,
    /// Value of the vehicle when new; drives premium floor, coverage and total loss
    pub original_value: Amount,
}

impl Vehicle {
    /// Creates a vehicle
    ///
    /// # Errors
    ///
    /// - `PartyError::InvalidLicensePlate` if the plate is malformed
    /// - `PartyError::InvalidData` if the original value is not positive
    pub fn new(license_plate: impl Into<String>, original_value: Amount) -> Result<Self, PartyError> {
        let license_plate = license_plate.into();
        if !is_valid_license_plate(&license_plate) {
            return Err(PartyError::InvalidLicensePlate(license_plate));
        }
        if original_value <= 0 {
            return Err(PartyError::invalid(format!(
                "Original value must be positive, got {}",
                original_value
            )));
        }

        Ok(Self {
            license_plate,
            original_value,
        })
    }
}
