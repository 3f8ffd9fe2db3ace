//! Tests for domain_billing

use chrono::{Months, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use core_kernel::{Amount, ContractNumber, ErrorKind, InsurerId, PartyId};
use domain_billing::accrual::{accrue, accrue_contract};
use domain_billing::{BillingError, PaymentHandler};
use domain_contract::{
    Billable, Contract, InsuranceContract, MasterVehicleContract, PaymentSchedule,
    PremiumFrequency, SingleVehicleContract, TravelContract,
};
use domain_party::Vehicle;

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn number(value: &str) -> ContractNumber {
    ContractNumber::new(value).unwrap()
}

fn single(
    value: &str,
    insurer: InsurerId,
    holder: PartyId,
    premium: Amount,
    balance: Amount,
) -> SingleVehicleContract {
    SingleVehicleContract::new(
        number(value),
        insurer,
        None,
        holder,
        PaymentSchedule::with_balance(premium, PremiumFrequency::Monthly, reference_time(), balance)
            .unwrap(),
        7_500,
        Vehicle::new("AA111AA", 15_000).unwrap(),
    )
    .unwrap()
}

fn travel(insurer: InsurerId, premium: Amount, frequency: PremiumFrequency) -> TravelContract {
    TravelContract::new(
        number("T1"),
        insurer,
        PartyId::new(),
        PaymentSchedule::new(premium, frequency, reference_time()).unwrap(),
        30,
        vec![PartyId::new()],
    )
    .unwrap()
}

/// Master with premiums {30, 50, 75, 20} and balances {30, 50, 100, 0}, last child inactive
fn reference_group(insurer: InsurerId) -> MasterVehicleContract {
    let holder = PartyId::new();
    let mut master = MasterVehicleContract::new(number("M1"), insurer, None, holder).unwrap();
    for (value, premium, balance) in [("S1", 30, 30), ("S2", 50, 50), ("S3", 75, 100), ("S4", 20, 0)] {
        master.adopt(single(value, insurer, holder, premium, balance)).unwrap();
    }
    master.child_mut(&number("S4")).unwrap().deactivate();
    master
}

fn balances(master: &MasterVehicleContract) -> Vec<Amount> {
    master
        .children()
        .iter()
        .map(|c| c.schedule().outstanding_balance())
        .collect()
}

// ============================================================================
// Accrual Tests
// ============================================================================

mod accrual_tests {
    use super::*;

    #[test]
    fn test_master_accrues_active_children_only() {
        let insurer = InsurerId::new();
        let mut contract = Contract::from(reference_group(insurer));

        let periods = accrue_contract(&mut contract, reference_time()).unwrap();
        assert_eq!(periods, 3);
        assert_eq!(
            balances(contract.as_master_vehicle().unwrap()),
            vec![60, 100, 175, 0]
        );
    }

    #[test]
    fn test_inactive_master_does_not_accrue() {
        let mut master = reference_group(InsurerId::new());
        master.deactivate();
        let mut contract = Contract::from(master);
        assert_eq!(accrue_contract(&mut contract, reference_time()).unwrap(), 0);
    }

    #[test]
    fn test_month_end_due_dates_clamp() {
        let jan_31 = NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut contract = TravelContract::new(
            number("T1"),
            InsurerId::new(),
            PartyId::new(),
            PaymentSchedule::new(10, PremiumFrequency::Monthly, jan_31).unwrap(),
            10,
            vec![PartyId::new()],
        )
        .unwrap();

        accrue(&mut contract, jan_31).unwrap();
        assert_eq!(
            contract.schedule().next_due_date(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
    }
}

// ============================================================================
// Single Payment Tests
// ============================================================================

mod payment_tests {
    use super::*;

    #[test]
    fn test_payment_reduces_balance_and_records_entry() {
        let insurer = InsurerId::new();
        let mut handler = PaymentHandler::new(insurer);
        let mut contract = single("S1", insurer, PartyId::new(), 100, 250);

        handler.pay_scheduled(&mut contract, 300, reference_time()).unwrap();

        assert_eq!(contract.schedule().outstanding_balance(), -50);
        let entries = handler.ledger().entries(&number("S1"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, 300);
        assert_eq!(entries[0].paid_at, reference_time());
    }

    #[test]
    fn test_inactive_contract_rejected_without_mutation() {
        let insurer = InsurerId::new();
        let mut handler = PaymentHandler::new(insurer);
        let mut contract = single("S1", insurer, PartyId::new(), 100, 250);
        contract.deactivate();

        let err = handler.pay_scheduled(&mut contract, 10, reference_time()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(contract.schedule().outstanding_balance(), 250);
        assert!(handler.ledger().entries(&number("S1")).is_empty());
    }

    #[test]
    fn test_foreign_insurer_rejected() {
        let mut handler = PaymentHandler::new(InsurerId::new());
        let mut contract = single("S1", InsurerId::new(), PartyId::new(), 100, 0);
        assert!(matches!(
            handler.pay_scheduled(&mut contract, 10, reference_time()),
            Err(BillingError::InvalidContract(_))
        ));
    }

    #[test]
    fn test_non_positive_amount_is_argument_error() {
        let insurer = InsurerId::new();
        let mut handler = PaymentHandler::new(insurer);
        let mut contract = single("S1", insurer, PartyId::new(), 100, 0);
        let err = handler.pay_scheduled(&mut contract, 0, reference_time()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }
}

// ============================================================================
// Group Payment Tests
// ============================================================================

mod group_payment_tests {
    use super::*;

    #[test]
    fn test_reference_group_payment() {
        let insurer = InsurerId::new();
        let mut handler = PaymentHandler::new(insurer);
        let mut master = reference_group(insurer);

        handler.pay_group(&mut master, 400, reference_time()).unwrap();

        assert_eq!(balances(&master), vec![-60, -85, -75, 0]);
        let entries = handler.ledger().entries(&number("M1"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, 400);
        for child in ["S1", "S2", "S3", "S4"] {
            assert!(handler.ledger().entries(&number(child)).is_empty());
        }
    }

    #[test]
    fn test_empty_group_rejected() {
        let insurer = InsurerId::new();
        let mut handler = PaymentHandler::new(insurer);
        let mut master = MasterVehicleContract::new(number("M1"), insurer, None, PartyId::new()).unwrap();

        let err = handler.pay_group(&mut master, 100, reference_time()).unwrap_err();
        assert!(matches!(err, BillingError::EmptyGroup(_)));
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn test_group_with_all_children_inactive_is_inactive() {
        let insurer = InsurerId::new();
        let mut handler = PaymentHandler::new(insurer);
        let mut master = reference_group(insurer);
        for child in master.children_mut() {
            child.deactivate();
        }

        assert!(matches!(
            handler.pay_group(&mut master, 100, reference_time()),
            Err(BillingError::InvalidContract(_))
        ));
    }

    #[test]
    fn test_pay_dispatches_on_kind() {
        let insurer = InsurerId::new();
        let mut handler = PaymentHandler::new(insurer);

        let mut group = Contract::from(reference_group(insurer));
        handler.pay(&mut group, 400, reference_time()).unwrap();
        assert_eq!(balances(group.as_master_vehicle().unwrap()), vec![-60, -85, -75, 0]);

        let mut trip = Contract::from(travel(insurer, 10, PremiumFrequency::Annual));
        handler.pay(&mut trip, 15, reference_time()).unwrap();
        assert_eq!(trip.schedule().unwrap().outstanding_balance(), -15);
        assert_eq!(handler.ledger().total_paid(&number("T1")), 15);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn frequency_strategy() -> impl Strategy<Value = PremiumFrequency> {
    prop_oneof![
        Just(PremiumFrequency::Annual),
        Just(PremiumFrequency::SemiAnnual),
        Just(PremiumFrequency::Quarterly),
        Just(PremiumFrequency::Monthly),
    ]
}

proptest! {
    #[test]
    fn prop_accrual_catches_up_and_is_idempotent(
        premium in 1i64..100_000,
        frequency in frequency_strategy(),
        k in 0u32..40,
    ) {
        let mut contract = travel(InsurerId::new(), premium, frequency);
        let now = reference_time()
            .checked_add_months(Months::new(k * frequency.months()))
            .unwrap();

        let periods = accrue(&mut contract, now).unwrap();

        // due date equal to now is charged, so k full periods mean k + 1 charges
        prop_assert_eq!(periods, k + 1);
        prop_assert_eq!(
            contract.schedule().outstanding_balance(),
            premium * i64::from(k + 1)
        );
        prop_assert_eq!(
            contract.schedule().next_due_date(),
            reference_time()
                .checked_add_months(Months::new((k + 1) * frequency.months()))
                .unwrap()
        );

        prop_assert_eq!(accrue(&mut contract, now).unwrap(), 0);
        prop_assert_eq!(
            contract.schedule().outstanding_balance(),
            premium * i64::from(k + 1)
        );
    }

    #[test]
    fn prop_single_payment_subtracts_exactly(
        balance in -1_000_000i64..1_000_000,
        amount in 1i64..1_000_000,
    ) {
        let insurer = InsurerId::new();
        let mut handler = PaymentHandler::new(insurer);
        let mut contract = single("S1", insurer, PartyId::new(), 10, balance);

        handler.pay_scheduled(&mut contract, amount, reference_time()).unwrap();

        prop_assert_eq!(contract.schedule().outstanding_balance(), balance - amount);
        let entries = handler.ledger().entries(&number("S1"));
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(entries[0].amount, amount);
        prop_assert_eq!(entries[0].paid_at, reference_time());
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization_tests {
    use super::*;
    use domain_billing::PaymentInstance;

    #[test]
    fn test_payment_instance_json_shape() {
        let payment = PaymentInstance::new(reference_time(), 250).unwrap();
        let json = serde_json::to_value(&payment).unwrap();

        assert_eq!(json["id"], payment.id.to_string());
        assert_eq!(json["paid_at"], "2025-04-15T12:00:00");
        assert_eq!(json["amount"], 250);
    }
}
