//! Persons known to an insurer
//!
//! A person is created from a registration number, which also decides the
//! legal form. Policy holders, beneficiaries and insured travellers are all
//! persons; contracts refer to them by `PartyId`.

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, PartyId};
use crate::error::PartyError;
use crate::validation::{classify_registration_number, RegistrationKind};

/// Legal form derived from the registration number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalForm {
    /// A natural person identified by a birth number
    Natural,
    /// A legal entity identified by a company id
    Legal,
}

impl From<RegistrationKind> for LegalForm {
    fn from(kind: RegistrationKind) -> Self {
        match kind {
            RegistrationKind::CompanyId => LegalForm::Legal,
            RegistrationKind::BirthNumber => LegalForm::Natural,
        }
    }
}

/// A person that can hold contracts, be insured, or receive payouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique party identifier
    pub id: PartyId,
    /// Company id or birth number
    pub registration_number: String,
    /// Legal form derived from the registration number
    pub legal_form: LegalForm,
    /// Total received from settled claims
    pub paid_out_amount: Amount,
}

impl Person {
    /// Creates a person from a registration number
    ///
    /// # Arguments
    ///
    /// * `registration_number` - A six/eight digit company id or a nine/ten
    ///   digit birth number
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidRegistrationNumber` if the number is
    /// empty or matches neither format
    pub fn new(registration_number: impl Into<String>) -> Result<Self, PartyError> {
        let registration_number = registration_number.into();
        let kind = classify_registration_number(&registration_number)?;

        Ok(Self {
            id: PartyId::new_v7(),
            registration_number,
            legal_form: kind.into(),
            paid_out_amount: 0,
        })
    }

    /// Returns true for legal entities
    pub fn is_legal_entity(&self) -> bool {
        self.legal_form == LegalForm::Legal
    }

    /// Adds a claim payout to the running total
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidData` if the amount is not positive
    pub fn payout(&mut self, amount: Amount) -> Result<(), PartyError> {
        if amount <= 0 {
            return Err(PartyError::invalid(format!(
                "Payout must be positive, got {}",
                amount
            )));
        }
        self.paid_out_amount = self
            .paid_out_amount
            .checked_add(amount)
            .ok_or_else(|| PartyError::invalid("Paid out amount overflow"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_id_is_legal() {
        let person = Person::new("12345678").unwrap();
        assert!(person.is_legal_entity());
        assert_eq!(person.paid_out_amount, 0);
    }

    #[test]
    fn test_birth_number_is_natural() {
        let person = Person::new("8351068242").unwrap();
        assert_eq!(person.legal_form, LegalForm::Natural);
    }

    #[test]
    fn test_payout_accumulates() {
        let mut person = Person::new("123456").unwrap();
        person.payout(10).unwrap();
        person.payout(5).unwrap();
        assert_eq!(person.paid_out_amount, 15);
    }

    #[test]
    fn test_payout_rejects_non_positive() {
        let mut person = Person::new("123456").unwrap();
        assert!(person.payout(0).is_err());
        assert!(person.payout(-1).is_err());
        assert_eq!(person.paid_out_amount, 0);
    }
}
