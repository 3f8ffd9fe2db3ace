//! Claims Domain
//!
//! This crate settles claims against contracts. Settlement is split in two:
//! an *assessment* that validates the claim and computes the payouts without
//! touching the contract, and an *application* that performs the lifecycle
//! transition. The insurer credits payouts to persons in between, so a claim
//! whose payee cannot be credited leaves the contract unchanged.
//!
//! # Claim shapes
//!
//! ```text
//! travel:  coverage / |affected| to every insured person -> contract inactive
//! vehicle: full coverage to beneficiary or policy holder -> inactive on total loss
//! ```

pub mod claim;
pub mod payment;
pub mod settlement;
pub mod error;

pub use claim::{ClaimKind, ClaimSettlement};
pub use payment::ClaimPayout;
pub use settlement::SettlementRules;
pub use error::ClaimError;
