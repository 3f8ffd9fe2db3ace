//! Custom Test Assertions
//!
//! Provides assertion helpers for companies and domain errors that give
//! more meaningful messages than standard assertions.

use core_kernel::{Amount, ContractNumber, ErrorKind};
use domain_company::{CompanyError, InsuranceCompany};

/// Asserts the outstanding balance of a contract
///
/// # Panics
///
/// Panics if the contract is unknown, unscheduled, or the balance differs
pub fn assert_balance(company: &InsuranceCompany, number: &ContractNumber, expected: Amount) {
    let actual = company
        .balance(number)
        .unwrap_or_else(|e| panic!("No balance for contract {}: {}", number, e));
    assert_eq!(
        actual, expected,
        "Balance mismatch on contract {}: actual={}, expected={}",
        number, actual, expected
    );
}

/// Asserts the amounts recorded against a contract, in ledger order
pub fn assert_ledger_amounts(company: &InsuranceCompany, number: &ContractNumber, expected: &[Amount]) {
    let actual: Vec<Amount> = company
        .payment_history(number)
        .iter()
        .map(|p| p.amount)
        .collect();
    assert_eq!(
        actual, expected,
        "Ledger mismatch on contract {}: actual={:?}, expected={:?}",
        number, actual, expected
    );
}

/// Asserts whether a contract is active
pub fn assert_active(company: &InsuranceCompany, number: &ContractNumber, expected: bool) {
    let contract = company
        .contract(number)
        .unwrap_or_else(|| panic!("Contract {} not found", number));
    assert_eq!(
        contract.is_active(),
        expected,
        "Contract {} expected active={}",
        number,
        expected
    );
}

/// Asserts that a result failed with the given error kind
pub fn assert_error_kind<T: std::fmt::Debug>(result: Result<T, CompanyError>, expected: ErrorKind) {
    match result {
        Ok(value) => panic!("Expected {:?} error, got Ok({:?})", expected, value),
        Err(e) => assert_eq!(
            e.kind(),
            expected,
            "Error kind mismatch: {} is {:?}, expected {:?}",
            e,
            e.kind(),
            expected
        ),
    }
}
