//! Insurance Company - the driver of the billing core
//!
//! An [`InsuranceCompany`] owns everything one insurer needs:
//!
//! - the logical clock every accrual, payment and claim reads
//! - the top-level contracts, in issuance order
//! - the register of issued contract numbers
//! - the person directory that receives claim payouts
//! - the payment handler and its ledger
//! - the underwriting and settlement rules
//!
//! Operations address contracts by number. A single-vehicle contract moved
//! under a master leaves the top level but can still be found, paid and
//! claimed against by its own number.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::ContractNumber;
//! use domain_company::InsuranceCompany;
//! use domain_contract::PremiumFrequency;
//! use domain_party::{Person, Vehicle};
//!
//! let now = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let mut company = InsuranceCompany::new(now);
//! let holder = company.register_person(Person::new("8351068242").unwrap()).unwrap();
//!
//! let number = ContractNumber::new("V-1").unwrap();
//! company
//!     .insure_vehicle(
//!         number.clone(),
//!         None,
//!         holder,
//!         25,
//!         PremiumFrequency::Monthly,
//!         Vehicle::new("AA111AA", 15_000).unwrap(),
//!     )
//!     .unwrap();
//!
//! // charged on issuance
//! assert_eq!(company.balance(&number).unwrap(), 25);
//!
//! company.pay(&number, 25).unwrap();
//! assert_eq!(company.balance(&number).unwrap(), 0);
//! ```

pub mod company;
pub mod issuance;
pub mod operations;
pub mod error;

pub use company::{ContractRef, InsuranceCompany};
pub use error::CompanyError;
