//! Payment ledger
//!
//! An append-only record of applied payments, keyed by contract number and
//! kept in time order. Entries at the same instant stay in the order they
//! were recorded.
//!
//! # Invariants
//!
//! - Every entry amount is positive
//! - Entries for one contract are sorted by `paid_at`
//! - Entries are never modified or removed

use std::collections::HashMap;

use serde::Serialize;

use core_kernel::money::ensure_positive;
use core_kernel::{Amount, ContractNumber, PaymentId, Timestamp};
use crate::error::BillingError;

/// One applied payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentInstance {
    /// Unique payment identifier
    pub id: PaymentId,
    /// Insurer time at which the payment was applied
    pub paid_at: Timestamp,
    /// Amount paid, always positive
    pub amount: Amount,
}

impl PaymentInstance {
    /// Creates a ledger entry
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidAmount` if the amount is not positive
    pub fn new(paid_at: Timestamp, amount: Amount) -> Result<Self, BillingError> {
        ensure_positive(amount, "Payment amount")
            .map_err(|e| BillingError::InvalidAmount(e.to_string()))?;
        Ok(Self {
            id: PaymentId::new_v7(),
            paid_at,
            amount,
        })
    }
}

/// Payment history of one insurer
#[derive(Debug, Clone, Default)]
pub struct PaymentLedger {
    entries: HashMap<ContractNumber, Vec<PaymentInstance>>,
}

impl PaymentLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a payment against a contract
    ///
    /// The entry is placed after every existing entry with the same or an
    /// earlier timestamp.
    pub fn record(&mut self, contract_number: &ContractNumber, payment: PaymentInstance) {
        let entries = self.entries.entry(contract_number.clone()).or_default();
        let position = entries.partition_point(|e| e.paid_at <= payment.paid_at);
        entries.insert(position, payment);
    }

    /// All entries for a contract in time order
    pub fn entries(&self, contract_number: &ContractNumber) -> &[PaymentInstance] {
        self.entries
            .get(contract_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Entries with `from <= paid_at <= to`
    pub fn entries_between(
        &self,
        contract_number: &ContractNumber,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<&[PaymentInstance], BillingError> {
        core_kernel::temporal::ensure_ordered(from, to).map_err(core_kernel::CoreError::from)?;
        let entries = self.entries(contract_number);
        let start = entries.partition_point(|e| e.paid_at < from);
        let end = entries.partition_point(|e| e.paid_at <= to);
        Ok(&entries[start..end])
    }

    /// Sum of all payments recorded for a contract
    pub fn total_paid(&self, contract_number: &ContractNumber) -> Amount {
        self.entries(contract_number)
            .iter()
            .fold(0, |total: Amount, e| total.saturating_add(e.amount))
    }

    /// Contracts that have at least one payment
    pub fn contracts(&self) -> impl Iterator<Item = &ContractNumber> {
        self.entries.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2025, 4, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn number() -> ContractNumber {
        ContractNumber::new("C1").unwrap()
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(matches!(
            PaymentInstance::new(at(1, 0), 0),
            Err(BillingError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_out_of_order_records_are_sorted() {
        let mut ledger = PaymentLedger::new();
        ledger.record(&number(), PaymentInstance::new(at(3, 0), 30).unwrap());
        ledger.record(&number(), PaymentInstance::new(at(1, 0), 10).unwrap());
        ledger.record(&number(), PaymentInstance::new(at(2, 0), 20).unwrap());

        let amounts: Vec<_> = ledger.entries(&number()).iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![10, 20, 30]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut ledger = PaymentLedger::new();
        ledger.record(&number(), PaymentInstance::new(at(1, 0), 5).unwrap());
        ledger.record(&number(), PaymentInstance::new(at(1, 0), 7).unwrap());

        let amounts: Vec<_> = ledger.entries(&number()).iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![5, 7]);
        assert_eq!(ledger.total_paid(&number()), 12);
    }

    #[test]
    fn test_entries_between_is_inclusive() {
        let mut ledger = PaymentLedger::new();
        for (day, amount) in [(1, 1), (2, 2), (3, 3), (4, 4)] {
            ledger.record(&number(), PaymentInstance::new(at(day, 0), amount).unwrap());
        }

        let window = ledger.entries_between(&number(), at(2, 0), at(3, 0)).unwrap();
        assert_eq!(window.iter().map(|e| e.amount).collect::<Vec<_>>(), vec![2, 3]);
        assert!(ledger.entries_between(&number(), at(3, 0), at(2, 0)).is_err());
    }

    #[test]
    fn test_unknown_contract_is_empty() {
        let ledger = PaymentLedger::new();
        assert!(ledger.entries(&number()).is_empty());
        assert_eq!(ledger.total_paid(&number()), 0);
    }
}
