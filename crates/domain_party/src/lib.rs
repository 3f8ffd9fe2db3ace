//! Party Domain - Persons and Insured Vehicles
//!
//! This crate provides the validated collaborators the billing core consumes:
//!
//! - **Person**: identified by a registration number. Company ids make a
//!   legal person, birth numbers make a natural person. Only legal persons may
//!   hold a grouping (master) vehicle contract.
//! - **Vehicle**: identified by its license plate, carrying the original value
//!   that drives premium minimums, coverage and the total-loss threshold.
//! - **PersonDirectory**: the in-memory register of persons known to an
//!   insurer, which also accumulates claim payouts.
//!
//! # Example
//!
//! ```rust
//! use domain_party::{LegalForm, Person, PersonDirectory, Vehicle};
//!
//! let company = Person::new("12345678").unwrap();
//! assert_eq!(company.legal_form, LegalForm::Legal);
//!
//! let mut directory = PersonDirectory::new();
//! let id = directory.register(company).unwrap();
//! directory.credit_payout(&id, 500).unwrap();
//! assert_eq!(directory.get(&id).unwrap().paid_out_amount, 500);
//!
//! let car = Vehicle::new("AA111AA", 15_000).unwrap();
//! assert_eq!(car.original_value, 15_000);
//! ```

pub mod person;
pub mod vehicle;
pub mod validation;
pub mod directory;
pub mod error;

pub use person::{LegalForm, Person};
pub use vehicle::Vehicle;
pub use directory::PersonDirectory;
pub use error::PartyError;
