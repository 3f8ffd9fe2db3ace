//! Billing Domain - Accrual, Allocation and the Payment Ledger
//!
//! This crate moves money through contract schedules:
//!
//! - **Accrual** ([`accrual`]): walks a schedule from its due date up to the
//!   insurer's current time, adding one premium per elapsed period.
//! - **Allocation** ([`allocation`]): applies an incoming payment to a
//!   contract; grouping contracts fan the payment out over their children in
//!   two ordered phases.
//! - **Ledger** ([`ledger`]): the time-ordered record of applied payments,
//!   keyed by contract number.
//!
//! Balances grow only through accrual and shrink only through allocation.
//! The current time is always passed in; nothing here reads a clock.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{accrual, PaymentHandler};
//!
//! accrual::accrue_contract(&mut contract, now)?;
//!
//! let mut handler = PaymentHandler::new(insurer_id);
//! handler.pay(&mut contract, 400, now)?;
//! assert_eq!(handler.ledger().total_paid(contract.contract_number()), 400);
//! ```

pub mod accrual;
pub mod allocation;
pub mod ledger;
pub mod error;

pub use allocation::PaymentHandler;
pub use ledger::{PaymentInstance, PaymentLedger};
pub use error::BillingError;
