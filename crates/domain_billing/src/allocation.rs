//! Payment allocation
//!
//! A `PaymentHandler` belongs to one insurer and owns that insurer's payment
//! ledger. It accepts payments only for active contracts of its own insurer.
//!
//! # Grouping contracts
//!
//! A payment to a master contract is spread over its children in two phases,
//! both visiting children in insertion order and skipping inactive ones:
//!
//! 1. **Balance clearing**: a child with a positive balance that the
//!    remaining amount covers is zeroed and the remaining amount drops by
//!    that balance. A child the remaining amount does not cover has its
//!    balance reduced by the remaining amount, which is *not* reduced.
//! 2. **Premium sweep**: while money remains, each child in turn is credited
//!    one premium, or whatever is left if that is less than a premium.
//!
//! One ledger entry with the full amount is recorded against the master.
//! Child ledgers are untouched.

use tracing::{debug, instrument, warn};

use core_kernel::{Amount, InsurerId, Timestamp};
use domain_contract::{Billable, Contract, InsuranceContract, MasterVehicleContract};
use crate::error::BillingError;
use crate::ledger::{PaymentInstance, PaymentLedger};

/// Billing state of one child as seen by the allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildBalance {
    pub is_active: bool,
    pub balance: Amount,
    pub premium: Amount,
}

/// Computes the balances a group payment leaves on each child
///
/// Pure function over the children's current state; the result has one
/// balance per input child, in the same order.
///
/// # Errors
///
/// - `BillingError::InvalidAmount` if the amount is not positive
/// - `BillingError::EmptyGroup` if no child is active
/// - `BillingError::InvalidAmount` if an active child has a non-positive
///   premium, which would stall the sweep
pub fn allocate_group_payment(
    children: &[ChildBalance],
    amount: Amount,
) -> Result<Vec<Amount>, BillingError> {
    if amount <= 0 {
        return Err(BillingError::InvalidAmount(format!(
            "Payment amount must be positive, got {}",
            amount
        )));
    }
    if !children.iter().any(|c| c.is_active) {
        return Err(BillingError::EmptyGroup("no active child".to_string()));
    }
    if children.iter().any(|c| c.is_active && c.premium <= 0) {
        return Err(BillingError::InvalidAmount(
            "Active child has a non-positive premium".to_string(),
        ));
    }

    let overflow = || BillingError::Overflow("group allocation".to_string());
    let mut balances: Vec<Amount> = children.iter().map(|c| c.balance).collect();
    let mut remaining = amount;

    for (child, balance) in children.iter().zip(balances.iter_mut()) {
        if !child.is_active || *balance <= 0 {
            continue;
        }
        if remaining >= *balance {
            remaining -= *balance;
            *balance = 0;
        } else {
            *balance -= remaining;
        }
    }

    while remaining > 0 {
        for (child, balance) in children.iter().zip(balances.iter_mut()) {
            if !child.is_active {
                continue;
            }
            let credit = child.premium.min(remaining);
            *balance = balance.checked_sub(credit).ok_or_else(overflow)?;
            remaining -= credit;
            if remaining == 0 {
                break;
            }
        }
    }

    Ok(balances)
}

/// Applies payments for one insurer and keeps its ledger
#[derive(Debug, Clone)]
pub struct PaymentHandler {
    insurer: InsurerId,
    ledger: PaymentLedger,
}

impl PaymentHandler {
    /// Creates a handler with an empty ledger
    pub fn new(insurer: InsurerId) -> Self {
        Self {
            insurer,
            ledger: PaymentLedger::new(),
        }
    }

    pub fn insurer(&self) -> InsurerId {
        self.insurer
    }

    pub fn ledger(&self) -> &PaymentLedger {
        &self.ledger
    }

    fn check_payable<C: InsuranceContract + ?Sized>(
        &self,
        contract: &C,
        amount: Amount,
    ) -> Result<(), BillingError> {
        if amount <= 0 {
            return Err(BillingError::InvalidAmount(format!(
                "Payment amount must be positive, got {}",
                amount
            )));
        }
        if !contract.is_active() {
            warn!(contract_number = %contract.contract_number(), "payment to inactive contract rejected");
            return Err(BillingError::InvalidContract(format!(
                "Contract {} is inactive",
                contract.contract_number()
            )));
        }
        if contract.insurer() != self.insurer {
            warn!(contract_number = %contract.contract_number(), "payment to foreign contract rejected");
            return Err(BillingError::InvalidContract(format!(
                "Contract {} belongs to another insurer",
                contract.contract_number()
            )));
        }
        Ok(())
    }

    /// Pays a contract that has its own schedule
    ///
    /// The balance drops by the full amount and may go negative.
    ///
    /// # Errors
    ///
    /// - `BillingError::InvalidAmount` if the amount is not positive
    /// - `BillingError::InvalidContract` if the contract is inactive or
    ///   belongs to another insurer
    #[instrument(skip(self, contract), fields(contract_number = %contract.contract_number()))]
    pub fn pay_scheduled<C: Billable>(
        &mut self,
        contract: &mut C,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), BillingError> {
        self.check_payable(contract, amount)?;
        let balance = contract
            .schedule()
            .outstanding_balance()
            .checked_sub(amount)
            .ok_or_else(|| BillingError::Overflow(contract.contract_number().to_string()))?;
        let payment = PaymentInstance::new(now, amount)?;

        contract.schedule_mut().set_balance(balance);
        self.ledger.record(contract.contract_number(), payment);
        debug!(balance, "payment applied");
        Ok(())
    }

    /// Pays a grouping contract, spreading the amount over its children
    ///
    /// # Errors
    ///
    /// - `BillingError::InvalidAmount` if the amount is not positive
    /// - `BillingError::InvalidContract` if the group is inactive or belongs
    ///   to another insurer
    /// - `BillingError::EmptyGroup` if the group has no children
    #[instrument(skip(self, master), fields(contract_number = %master.contract_number()))]
    pub fn pay_group(
        &mut self,
        master: &mut MasterVehicleContract,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), BillingError> {
        self.check_payable(master, amount)?;
        if master.children().is_empty() {
            return Err(BillingError::EmptyGroup(master.contract_number().to_string()));
        }

        let state: Vec<ChildBalance> = master
            .children()
            .iter()
            .map(|c| ChildBalance {
                is_active: c.is_active(),
                balance: c.schedule().outstanding_balance(),
                premium: c.schedule().premium(),
            })
            .collect();
        let balances = allocate_group_payment(&state, amount)?;
        let payment = PaymentInstance::new(now, amount)?;

        for (child, balance) in master.children_mut().iter_mut().zip(balances) {
            debug!(child = %child.contract_number(), balance, "group payment allocated");
            child.schedule_mut().set_balance(balance);
        }
        self.ledger.record(master.contract_number(), payment);
        Ok(())
    }

    /// Pays any contract, dispatching on its kind
    pub fn pay(
        &mut self,
        contract: &mut Contract,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), BillingError> {
        match contract {
            Contract::SingleVehicle(c) => self.pay_scheduled(c, amount, now),
            Contract::Travel(c) => self.pay_scheduled(c, amount, now),
            Contract::MasterVehicle(c) => self.pay_group(c, amount, now),
        }
    }
}
