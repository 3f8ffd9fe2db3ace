//! Per-contract billing state
//!
//! A `PaymentSchedule` is owned by exactly one contract. Its balance only
//! grows through accrual and only shrinks through payment allocation, both of
//! which live in the billing domain; this type only guards its invariants.
//!
//! # Invariants
//!
//! - `premium > 0`, which is what bounds the premium sweep of a group payment
//! - the balance is unclamped: negative values are prepaid credit

use serde::Serialize;

use core_kernel::money::ensure_positive;
use core_kernel::{Amount, Timestamp};
use crate::error::ContractError;
use crate::frequency::PremiumFrequency;

/// Premium, frequency, next due date and outstanding balance of one contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSchedule {
    premium: Amount,
    frequency: PremiumFrequency,
    next_due_date: Timestamp,
    outstanding_balance: Amount,
}

impl PaymentSchedule {
    /// Creates a schedule with a zero balance
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Validation` if the premium is not positive
    pub fn new(
        premium: Amount,
        frequency: PremiumFrequency,
        next_due_date: Timestamp,
    ) -> Result<Self, ContractError> {
        Self::with_balance(premium, frequency, next_due_date, 0)
    }

    /// Creates a schedule with an opening balance
    pub fn with_balance(
        premium: Amount,
        frequency: PremiumFrequency,
        next_due_date: Timestamp,
        outstanding_balance: Amount,
    ) -> Result<Self, ContractError> {
        ensure_positive(premium, "Premium")?;
        Ok(Self {
            premium,
            frequency,
            next_due_date,
            outstanding_balance,
        })
    }

    pub fn premium(&self) -> Amount {
        self.premium
    }

    pub fn frequency(&self) -> PremiumFrequency {
        self.frequency
    }

    pub fn next_due_date(&self) -> Timestamp {
        self.next_due_date
    }

    pub fn outstanding_balance(&self) -> Amount {
        self.outstanding_balance
    }

    /// Returns true if a premium is due at `now`
    pub fn is_due(&self, now: Timestamp) -> bool {
        self.next_due_date <= now
    }

    /// Premium charged over twelve months at the current frequency
    pub fn annual_premium(&self) -> Result<Amount, ContractError> {
        annual_premium(self.premium, self.frequency)
    }

    /// Moves the due date forward by one period
    pub fn advance(&mut self) -> Result<(), ContractError> {
        self.next_due_date = self.frequency.next_due_date(self.next_due_date)?;
        Ok(())
    }

    /// Overwrites the outstanding balance
    pub fn set_balance(&mut self, balance: Amount) {
        self.outstanding_balance = balance;
    }

    /// Changes the premium charged per period
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Validation` if the premium is not positive
    pub fn adjust_premium(&mut self, premium: Amount) -> Result<(), ContractError> {
        ensure_positive(premium, "Premium")?;
        self.premium = premium;
        Ok(())
    }

    /// Changes the billing period for future advances
    pub fn adjust_frequency(&mut self, frequency: PremiumFrequency) {
        self.frequency = frequency;
    }
}

/// Premium charged over twelve months for a per-period premium
pub fn annual_premium(premium: Amount, frequency: PremiumFrequency) -> Result<Amount, ContractError> {
    premium
        .checked_mul(Amount::from(frequency.payments_per_year()))
        .ok_or_else(|| ContractError::validation(format!("Premium {} overflows when annualised", premium)))
}
