//! Premium accrual
//!
//! Accrual is a catch-up loop: while a schedule's due date is not after the
//! current time, one premium is added to the outstanding balance and the due
//! date moves forward one period. Calling it again with the same time is a
//! no-op, and a contract that was skipped for several periods is brought up
//! to date in one call.
//!
//! Inactive contracts never accrue. Grouping contracts have no schedule;
//! accrual goes to their active children instead.

use tracing::{debug, instrument};

use core_kernel::Timestamp;
use domain_contract::{Billable, Contract, InsuranceContract, MasterVehicleContract};
use crate::error::BillingError;

/// Accrues every elapsed period of one scheduled contract
///
/// # Returns
///
/// Number of periods charged
///
/// # Errors
///
/// Returns `BillingError::Overflow` if the balance leaves the `i64` range,
/// or a calendar error if the due date cannot be advanced
#[instrument(skip(contract), fields(contract_number = %contract.contract_number()))]
pub fn accrue<C: Billable>(contract: &mut C, now: Timestamp) -> Result<u32, BillingError> {
    if !contract.is_active() {
        return Ok(0);
    }

    let mut periods = 0;
    while contract.schedule().is_due(now) {
        let schedule = contract.schedule();
        let balance = schedule
            .outstanding_balance()
            .checked_add(schedule.premium())
            .ok_or_else(|| BillingError::Overflow(contract.contract_number().to_string()))?;

        let schedule = contract.schedule_mut();
        schedule.advance()?;
        schedule.set_balance(balance);
        periods += 1;

        debug!(
            balance,
            next_due_date = %contract.schedule().next_due_date(),
            "premium accrued"
        );
    }

    Ok(periods)
}

/// Accrues every active child of a grouping contract
///
/// # Returns
///
/// Total number of periods charged across the children
pub fn accrue_group(master: &mut MasterVehicleContract, now: Timestamp) -> Result<u32, BillingError> {
    let mut periods = 0;
    for child in master.children_mut() {
        if child.is_active() {
            periods += accrue(child, now)?;
        }
    }
    Ok(periods)
}

/// Accrues any contract, dispatching on its kind
pub fn accrue_contract(contract: &mut Contract, now: Timestamp) -> Result<u32, BillingError> {
    match contract {
        Contract::SingleVehicle(c) => accrue(c, now),
        Contract::Travel(c) => accrue(c, now),
        Contract::MasterVehicle(c) => {
            if !c.is_active() {
                return Ok(0);
            }
            accrue_group(c, now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{ContractNumber, InsurerId, PartyId};
    use domain_contract::{PaymentSchedule, PremiumFrequency, TravelContract};

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn travel(due: Timestamp) -> TravelContract {
        TravelContract::new(
            ContractNumber::new("T1").unwrap(),
            InsurerId::new(),
            PartyId::new(),
            PaymentSchedule::new(10, PremiumFrequency::Quarterly, due).unwrap(),
            10,
            vec![PartyId::new()],
        )
        .unwrap()
    }

    #[test]
    fn test_nothing_due_before_date() {
        let mut contract = travel(at(2025, 5, 1));
        assert_eq!(accrue(&mut contract, at(2025, 4, 30)).unwrap(), 0);
        assert_eq!(contract.schedule().outstanding_balance(), 0);
    }

    #[test]
    fn test_due_date_equal_to_now_is_charged() {
        let mut contract = travel(at(2025, 5, 1));
        assert_eq!(accrue(&mut contract, at(2025, 5, 1)).unwrap(), 1);
        assert_eq!(contract.schedule().outstanding_balance(), 10);
        assert_eq!(contract.schedule().next_due_date(), at(2025, 8, 1));
    }

    #[test]
    fn test_catch_up_over_several_periods() {
        let mut contract = travel(at(2025, 1, 1));
        assert_eq!(accrue(&mut contract, at(2025, 12, 31)).unwrap(), 4);
        assert_eq!(contract.schedule().outstanding_balance(), 40);
        assert_eq!(contract.schedule().next_due_date(), at(2026, 1, 1));
        assert_eq!(accrue(&mut contract, at(2025, 12, 31)).unwrap(), 0);
    }

    #[test]
    fn test_inactive_schedule_frozen() {
        let mut contract = travel(at(2025, 1, 1));
        contract.deactivate();
        assert_eq!(accrue(&mut contract, at(2030, 1, 1)).unwrap(), 0);
        assert_eq!(contract.schedule().next_due_date(), at(2025, 1, 1));
    }

    #[test]
    fn test_failed_advance_leaves_balance_untouched() {
        let due = chrono::NaiveDateTime::MAX - chrono::Duration::days(10);
        let mut contract = travel(due);

        assert!(accrue(&mut contract, chrono::NaiveDateTime::MAX).is_err());
        assert!(accrue(&mut contract, chrono::NaiveDateTime::MAX).is_err());
        assert_eq!(contract.schedule().outstanding_balance(), 0);
        assert_eq!(contract.schedule().next_due_date(), due);
    }
}
