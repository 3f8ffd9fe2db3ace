//! Tests for domain_claims

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use core_kernel::{Amount, ContractNumber, ErrorKind, InsurerId, PartyId};
use domain_claims::settlement::{
    assess_travel_claim, assess_vehicle_claim, settle_travel_claim, settle_vehicle_claim,
};
use domain_claims::{ClaimError, ClaimKind, SettlementRules};
use domain_contract::{
    InsuranceContract, PaymentSchedule, PremiumFrequency, SingleVehicleContract, TravelContract,
};
use domain_party::Vehicle;

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn schedule() -> PaymentSchedule {
    PaymentSchedule::new(100, PremiumFrequency::Annual, reference_time()).unwrap()
}

fn vehicle_contract(beneficiary: Option<PartyId>, holder: PartyId) -> SingleVehicleContract {
    SingleVehicleContract::new(
        ContractNumber::new("V1").unwrap(),
        InsurerId::new(),
        beneficiary,
        holder,
        schedule(),
        7_500,
        Vehicle::new("AA111AA", 15_000).unwrap(),
    )
    .unwrap()
}

fn travel_contract(insured: &[PartyId], coverage: Amount) -> TravelContract {
    TravelContract::new(
        ContractNumber::new("T1").unwrap(),
        InsurerId::new(),
        PartyId::new(),
        schedule(),
        coverage,
        insured.to_vec(),
    )
    .unwrap()
}

// ============================================================================
// Vehicle Claim Tests
// ============================================================================

mod vehicle_claim_tests {
    use super::*;

    #[test]
    fn test_partial_damage_keeps_contract_active() {
        let holder = PartyId::new();
        let mut contract = vehicle_contract(None, holder);

        let settlement =
            settle_vehicle_claim(&mut contract, 10_000, &SettlementRules::default(), reference_time())
                .unwrap();

        assert!(contract.is_active());
        assert_eq!(settlement.kind, ClaimKind::VehicleDamage);
        assert_eq!(settlement.payouts.len(), 1);
        assert_eq!(settlement.payouts[0].payee, holder);
        assert_eq!(settlement.payouts[0].amount, 7_500);
        assert!(!settlement.deactivates_contract);
    }

    #[test]
    fn test_total_loss_deactivates() {
        let beneficiary = PartyId::new();
        let mut contract = vehicle_contract(Some(beneficiary), PartyId::new());

        let settlement =
            settle_vehicle_claim(&mut contract, 11_000, &SettlementRules::default(), reference_time())
                .unwrap();

        assert!(!contract.is_active());
        assert_eq!(settlement.payouts[0].payee, beneficiary);
    }

    #[test]
    fn test_exact_threshold_is_total_loss() {
        let mut contract = vehicle_contract(None, PartyId::new());
        settle_vehicle_claim(&mut contract, 10_500, &SettlementRules::default(), reference_time())
            .unwrap();
        assert!(!contract.is_active());
    }

    #[test]
    fn test_repeat_claims_while_active() {
        let mut contract = vehicle_contract(None, PartyId::new());
        let rules = SettlementRules::default();
        settle_vehicle_claim(&mut contract, 100, &rules, reference_time()).unwrap();
        settle_vehicle_claim(&mut contract, 100, &rules, reference_time()).unwrap();
        settle_vehicle_claim(&mut contract, 14_000, &rules, reference_time()).unwrap();

        let err = settle_vehicle_claim(&mut contract, 100, &rules, reference_time()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_non_positive_damage() {
        let contract = vehicle_contract(None, PartyId::new());
        let err = assess_vehicle_claim(&contract, 0, &SettlementRules::default(), reference_time())
            .unwrap_err();
        assert!(matches!(err, ClaimError::InvalidClaim(_)));
    }

    #[test]
    fn test_zero_coverage_rejected() {
        let mut contract = vehicle_contract(None, PartyId::new());
        contract.set_coverage_amount(0).unwrap();
        let err = settle_vehicle_claim(&mut contract, 12_000, &SettlementRules::default(), reference_time())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(contract.is_active());
    }

    #[test]
    fn test_assessment_does_not_mutate() {
        let contract = vehicle_contract(None, PartyId::new());
        let settlement =
            assess_vehicle_claim(&contract, 12_000, &SettlementRules::default(), reference_time())
                .unwrap();
        assert!(settlement.deactivates_contract);
        assert!(contract.is_active());
    }
}

// ============================================================================
// Travel Claim Tests
// ============================================================================

mod travel_claim_tests {
    use super::*;

    #[test]
    fn test_every_insured_person_paid() {
        let insured: Vec<PartyId> = (0..5).map(|_| PartyId::new()).collect();
        let mut contract = travel_contract(&insured, 30);

        let settlement =
            settle_travel_claim(&mut contract, &insured[..3], reference_time()).unwrap();

        assert_eq!(settlement.kind, ClaimKind::Travel);
        assert_eq!(settlement.payouts.len(), 5);
        assert!(settlement.payouts.iter().all(|p| p.amount == 10));
        assert_eq!(settlement.total_paid(), 50);
        assert!(!contract.is_active());
    }

    #[test]
    fn test_integer_division() {
        let insured: Vec<PartyId> = (0..3).map(|_| PartyId::new()).collect();
        let contract = travel_contract(&insured, 30);
        let settlement = assess_travel_claim(&contract, &insured[..2], reference_time()).unwrap();
        assert!(settlement.payouts.iter().all(|p| p.amount == 15));

        let contract = travel_contract(&insured, 10);
        let settlement = assess_travel_claim(&contract, &insured, reference_time()).unwrap();
        assert!(settlement.payouts.iter().all(|p| p.amount == 3));
    }

    #[test]
    fn test_duplicate_affected_count_once() {
        let insured: Vec<PartyId> = (0..2).map(|_| PartyId::new()).collect();
        let contract = travel_contract(&insured, 20);
        let affected = [insured[0], insured[0]];
        let settlement = assess_travel_claim(&contract, &affected, reference_time()).unwrap();
        assert!(settlement.payouts.iter().all(|p| p.amount == 20));
    }

    #[test]
    fn test_stranger_rejected() {
        let insured = [PartyId::new()];
        let mut contract = travel_contract(&insured, 10);
        let err = settle_travel_claim(&mut contract, &[PartyId::new()], reference_time()).unwrap_err();
        assert!(matches!(err, ClaimError::UninsuredPerson(_)));
        assert!(contract.is_active());
    }

    #[test]
    fn test_empty_affected_rejected() {
        let insured = [PartyId::new()];
        let contract = travel_contract(&insured, 10);
        assert!(matches!(
            assess_travel_claim(&contract, &[], reference_time()),
            Err(ClaimError::InvalidClaim(_))
        ));
    }

    #[test]
    fn test_inactive_contract_rejected() {
        let insured = [PartyId::new()];
        let mut contract = travel_contract(&insured, 10);
        settle_travel_claim(&mut contract, &insured, reference_time()).unwrap();
        let err = settle_travel_claim(&mut contract, &insured, reference_time()).unwrap_err();
        assert!(matches!(err, ClaimError::InvalidContract(_)));
    }

    #[test]
    fn test_zero_share_rejected() {
        let insured: Vec<PartyId> = (0..3).map(|_| PartyId::new()).collect();
        let mut contract = travel_contract(&insured, 2);
        let err = settle_travel_claim(&mut contract, &insured, reference_time()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(contract.is_active());
    }

    #[test]
    fn test_apply_to_wrong_contract() {
        let insured = [PartyId::new()];
        let contract = travel_contract(&insured, 10);
        let settlement = assess_travel_claim(&contract, &insured, reference_time()).unwrap();

        let mut other = vehicle_contract(None, PartyId::new());
        assert!(settlement.apply(&mut other).is_err());
        assert!(other.is_active());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_vehicle_deactivation_matches_threshold(damage in 1i64..30_000) {
        let mut contract = vehicle_contract(None, PartyId::new());
        settle_vehicle_claim(&mut contract, damage, &SettlementRules::default(), reference_time()).unwrap();
        // 70% of 15000
        prop_assert_eq!(contract.is_active(), damage < 10_500);
    }

    #[test]
    fn prop_travel_share_is_floor(coverage in 1i64..100_000, insured in 1usize..10, affected in 1usize..10) {
        let affected = affected.min(insured);
        prop_assume!(coverage / affected as i64 > 0);
        let persons: Vec<PartyId> = (0..insured).map(|_| PartyId::new()).collect();
        let contract = travel_contract(&persons, coverage);

        let settlement = assess_travel_claim(&contract, &persons[..affected], reference_time()).unwrap();
        prop_assert_eq!(settlement.payouts.len(), insured);
        for payout in &settlement.payouts {
            prop_assert_eq!(payout.amount, coverage / affected as i64);
        }
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization_tests {
    use super::*;

    #[test]
    fn test_vehicle_settlement_json_shape() {
        let beneficiary = PartyId::new();
        let mut contract = vehicle_contract(Some(beneficiary), PartyId::new());
        let settlement =
            settle_vehicle_claim(&mut contract, 11_000, &SettlementRules::default(), reference_time())
                .unwrap();
        let json = serde_json::to_value(&settlement).unwrap();

        assert_eq!(json["kind"], "vehicle_damage");
        assert_eq!(json["contract_number"], "V1");
        assert_eq!(json["settled_at"], "2025-04-15T12:00:00");
        assert_eq!(json["deactivates_contract"], true);
        assert_eq!(json["payouts"][0]["payee"], beneficiary.to_string());
        assert_eq!(json["payouts"][0]["amount"], 7_500);
    }
}
