//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! contract billing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Valid persons, vehicles and the reference clock
//! - `builders`: Builder patterns for companies and schedules
//! - `assertions`: Assertion helpers for balances, ledgers and error kinds
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
