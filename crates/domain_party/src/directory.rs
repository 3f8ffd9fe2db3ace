//! In-memory register of persons
//!
//! The directory is the single owner of `Person` values. Contracts only keep
//! `PartyId`s, and claim payouts are credited through the directory.

use std::collections::HashMap;

use tracing::debug;

use core_kernel::{Amount, PartyId};
use crate::error::PartyError;
use crate::person::Person;

/// Persons known to one insurer, keyed by id and unique by registration number
#[derive(Debug, Clone, Default)]
pub struct PersonDirectory {
    persons: HashMap<PartyId, Person>,
    by_registration: HashMap<String, PartyId>,
}

impl PersonDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a person and returns its id
    ///
    /// # Errors
    ///
    /// Returns `PartyError::DuplicateParty` if the registration number is
    /// already registered
    pub fn register(&mut self, person: Person) -> Result<PartyId, PartyError> {
        if self.by_registration.contains_key(&person.registration_number) {
            return Err(PartyError::DuplicateParty(person.registration_number));
        }

        let id = person.id;
        debug!(party_id = %id, legal_form = ?person.legal_form, "registering person");
        self.by_registration.insert(person.registration_number.clone(), id);
        self.persons.insert(id, person);
        Ok(id)
    }

    /// Looks up a person by id
    pub fn get(&self, id: &PartyId) -> Option<&Person> {
        self.persons.get(id)
    }

    /// Looks up a person by id, failing if unknown
    pub fn require(&self, id: &PartyId) -> Result<&Person, PartyError> {
        self.get(id).ok_or_else(|| PartyError::not_found(id))
    }

    /// Looks up a person by registration number
    pub fn find_by_registration_number(&self, number: &str) -> Option<&Person> {
        self.by_registration
            .get(number)
            .and_then(|id| self.persons.get(id))
    }

    /// Returns true if the id is registered
    pub fn contains(&self, id: &PartyId) -> bool {
        self.persons.contains_key(id)
    }

    /// Credits a claim payout to a person
    ///
    /// # Errors
    ///
    /// - `PartyError::PartyNotFound` if the id is unknown
    /// - `PartyError::InvalidData` if the amount is not positive
    pub fn credit_payout(&mut self, id: &PartyId, amount: Amount) -> Result<(), PartyError> {
        let person = self
            .persons
            .get_mut(id)
            .ok_or_else(|| PartyError::not_found(id))?;
        person.payout(amount)
    }

    /// Number of registered persons
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_duplicate_registration_number() {
        let mut directory = PersonDirectory::new();
        directory.register(Person::new("12345678").unwrap()).unwrap();

        let result = directory.register(Person::new("12345678").unwrap());
        assert!(matches!(result, Err(PartyError::DuplicateParty(_))));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_credit_unknown_person() {
        let mut directory = PersonDirectory::new();
        let result = directory.credit_payout(&PartyId::new(), 10);
        assert!(matches!(result, Err(PartyError::PartyNotFound(_))));
    }
}
