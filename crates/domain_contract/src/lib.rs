//! Contract Domain
//!
//! This crate holds the contract family and the per-contract billing state
//! that the accrual, allocation and settlement engines operate on.
//!
//! # Contract family
//!
//! - **SingleVehicleContract**: one insured vehicle, its own payment schedule
//! - **MasterVehicleContract**: a grouping contract with no schedule of its
//!   own; activity is derived from its children and deactivation cascades
//! - **TravelContract**: a set of insured persons sharing one schedule
//!
//! All three are wrapped by the [`Contract`] enum, which is what an insurer
//! stores. Behaviour shared by every variant lives on the
//! [`InsuranceContract`] trait and schedule access on [`Billable`].
//!
//! # Lifecycle
//!
//! ```text
//! issued (active) --claim/deactivate--> inactive
//! ```
//!
//! A contract never becomes active again.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::{ContractNumber, InsurerId, PartyId};
//! use domain_contract::{
//!     Billable, InsuranceContract, PaymentSchedule, PremiumFrequency, TravelContract,
//! };
//!
//! let now = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let schedule = PaymentSchedule::new(10, PremiumFrequency::Monthly, now).unwrap();
//! let contract = TravelContract::new(
//!     ContractNumber::new("T-1").unwrap(),
//!     InsurerId::new(),
//!     PartyId::new(),
//!     schedule,
//!     30,
//!     vec![PartyId::new(), PartyId::new()],
//! )
//! .unwrap();
//!
//! assert!(contract.is_active());
//! assert_eq!(contract.schedule().premium(), 10);
//! ```

pub mod frequency;
pub mod schedule;
pub mod contract;
pub mod vehicle;
pub mod travel;
pub mod ports;
pub mod underwriting;
pub mod error;

pub use frequency::PremiumFrequency;
pub use schedule::PaymentSchedule;
pub use contract::{Billable, Contract, ContractHeader, ContractKind, InsuranceContract};
pub use vehicle::{MasterVehicleContract, SingleVehicleContract};
pub use travel::TravelContract;
pub use ports::{ContractNumberRegistry, IssuedContractNumbers};
pub use underwriting::UnderwritingRules;
pub use error::ContractError;
