//! Core Kernel - Foundational types shared by the billing workspace
//!
//! This crate provides the building blocks used across every domain crate:
//! - Strongly-typed identifiers and contract numbers
//! - Whole-unit amounts with exact decimal ratio comparisons
//! - Calendar arithmetic over the insurer's logical clock
//! - The error taxonomy shared by all domains

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Amount, MoneyError};
pub use temporal::{LogicalClock, TemporalError, Timestamp};
pub use identifiers::{
    ContractNumber, InsurerId, PartyId, PaymentId, ClaimId,
};
pub use error::{CoreError, ErrorKind};
