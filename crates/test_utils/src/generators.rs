//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::Amount;
use domain_billing::allocation::ChildBalance;
use domain_contract::PremiumFrequency;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating premium frequencies
pub fn frequency_strategy() -> impl Strategy<Value = PremiumFrequency> {
    prop_oneof![
        Just(PremiumFrequency::Annual),
        Just(PremiumFrequency::SemiAnnual),
        Just(PremiumFrequency::Quarterly),
        Just(PremiumFrequency::Monthly),
    ]
}

/// Strategy for generating valid premiums
pub fn premium_strategy() -> impl Strategy<Value = Amount> {
    1i64..10_000i64
}

/// Strategy for generating balances, credit included
pub fn balance_strategy() -> impl Strategy<Value = Amount> {
    -10_000i64..10_000i64
}

/// Strategy for generating positive payment amounts
pub fn payment_amount_strategy() -> impl Strategy<Value = Amount> {
    1i64..50_000i64
}

/// Strategy for generating vehicle values
pub fn vehicle_value_strategy() -> impl Strategy<Value = Amount> {
    1i64..1_000_000i64
}

/// Strategy for generating ratios in `[0, 1]` with four decimal places
pub fn unit_ratio_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000u32).prop_map(|n| Decimal::new(n as i64, 4))
}

/// Strategy for generating valid license plates (seven uppercase letters or digits)
pub fn license_plate_strategy() -> impl Strategy<Value = String> {
    "[A-Z0-9]{7}"
}

/// Strategy for generating valid company ids (six or eight digits)
pub fn company_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{6}", "[0-9]{8}"]
}

/// Strategy for generating valid ten-digit birth numbers
///
/// Builds `yymmdd` plus a three-digit serial and appends the check digit
/// that makes the alternating digit sum divisible by 11. Serials whose check
/// digit would be 10 are rejected.
pub fn birth_number_strategy() -> impl Strategy<Value = String> {
    (0u32..100, 1u32..=12, prop::bool::ANY, 1u32..=28, 0u32..1000)
        .prop_filter_map("check digit out of range", |(yy, mm, female, dd, serial)| {
            let month = if female { mm + 50 } else { mm };
            let body = format!("{:02}{:02}{:02}{:03}", yy, month, dd, serial);
            let alternating: i64 = body
                .bytes()
                .enumerate()
                .map(|(i, b)| {
                    let digit = i64::from(b - b'0');
                    if i % 2 == 0 { digit } else { -digit }
                })
                .sum();
            let check = alternating.rem_euclid(11);
            (check < 10).then(|| format!("{}{}", body, check))
        })
}

/// Strategy for generating any valid registration number
pub fn registration_number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![company_id_strategy(), birth_number_strategy()]
}

/// Strategy for generating master-contract children
pub fn child_balance_strategy() -> impl Strategy<Value = ChildBalance> {
    (prop::bool::weighted(0.8), balance_strategy(), premium_strategy()).prop_map(
        |(is_active, balance, premium)| ChildBalance {
            is_active,
            balance,
            premium,
        },
    )
}

/// Strategy for generating a non-empty master-contract group
pub fn child_group_strategy() -> impl Strategy<Value = Vec<ChildBalance>> {
    prop::collection::vec(child_balance_strategy(), 1..8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_party::validation::{is_birth_number, is_company_id, is_valid_license_plate};

    proptest! {
        #[test]
        fn test_birth_numbers_are_valid(number in birth_number_strategy()) {
            prop_assert!(is_birth_number(&number), "generated {}", number);
        }

        #[test]
        fn test_company_ids_are_valid(number in company_id_strategy()) {
            prop_assert!(is_company_id(&number));
        }

        #[test]
        fn test_license_plates_are_valid(plate in license_plate_strategy()) {
            prop_assert!(is_valid_license_plate(&plate));
        }

        #[test]
        fn test_unit_ratio_in_range(ratio in unit_ratio_strategy()) {
            prop_assert!(ratio >= Decimal::ZERO && ratio <= Decimal::ONE);
        }
    }
}
