//! Identifier validation rules
//!
//! # Registration numbers
//!
//! - **Company id**: exactly 6 or 8 ASCII digits.
//! - **Birth number**: exactly 9 or 10 ASCII digits laid out as `YYMMDD...`.
//!   - The month is 01-12, or 51-62 for women (offset by 50).
//!   - Nine-digit numbers were issued up to 1953 only.
//!   - Ten-digit numbers carry a check: the alternating digit sum
//!     (`d0 - d1 + d2 - ...`) is divisible by 11.
//!   - The encoded date of birth must exist. Years are always read as
//!     `19YY`.
//!
//! # License plates
//!
//! Exactly 7 characters, each an uppercase letter or a digit.

use chrono::NaiveDate;

use crate::error::PartyError;

/// Last year in which nine-digit birth numbers were issued
const LAST_NINE_DIGIT_YEAR: i32 = 1953;

/// Which registration scheme a number belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    CompanyId,
    BirthNumber,
}

/// Classifies a registration number
///
/// # Errors
///
/// Returns `PartyError::InvalidRegistrationNumber` if the number is neither
/// a company id nor a valid birth number
pub fn classify_registration_number(number: &str) -> Result<RegistrationKind, PartyError> {
    if is_company_id(number) {
        return Ok(RegistrationKind::CompanyId);
    }
    if is_birth_number(number) {
        return Ok(RegistrationKind::BirthNumber);
    }
    Err(PartyError::InvalidRegistrationNumber(number.to_string()))
}

/// Returns true for a six or eight digit company id
pub fn is_company_id(number: &str) -> bool {
    matches!(number.len(), 6 | 8) && all_digits(number)
}

/// Returns true for a well-formed nine or ten digit birth number
pub fn is_birth_number(number: &str) -> bool {
    if !matches!(number.len(), 9 | 10) || !all_digits(number) {
        return false;
    }

    let digits: Vec<u32> = number.bytes().map(|b| u32::from(b - b'0')).collect();
    let yy = digits[0] * 10 + digits[1];
    let month = digits[2] * 10 + digits[3];
    if !(1..=12).contains(&month) && !(51..=62).contains(&month) {
        return false;
    }

    let year = 1900 + yy as i32;

    if digits.len() == 9 {
        if year > LAST_NINE_DIGIT_YEAR {
            return false;
        }
    } else if !alternating_sum_divisible_by_11(&digits) {
        return false;
    }

    birth_date(year, month, digits[4] * 10 + digits[5]).is_some()
}

/// Returns true for a seven character plate of uppercase letters and digits
pub fn is_valid_license_plate(plate: &str) -> bool {
    plate.chars().count() == 7
        && plate
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit())
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn alternating_sum_divisible_by_11(digits: &[u32]) -> bool {
    let sum: i64 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { i64::from(d) } else { -i64::from(d) })
        .sum();
    sum % 11 == 0
}

fn birth_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let month = if month > 50 { month - 50 } else { month };
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_ids() {
        assert!(is_company_id("123456"));
        assert!(is_company_id("12345678"));
        assert!(!is_company_id("1234567"));
        assert!(!is_company_id("12345a"));
        assert!(!is_company_id("-12345"));
    }

    #[test]
    fn test_ten_digit_birth_numbers() {
        // 1983-01-06, female month offset
        assert!(is_birth_number("8351068242"));
        // 1904-02-11
        assert!(is_birth_number("0402114911"));
        // checksum broken
        assert!(!is_birth_number("8351068243"));
    }

    #[test]
    fn test_years_read_as_nineteen_hundreds() {
        // 29 February 1904 exists
        assert!(is_birth_number("0402290020"));
        // 29 February 1900 does not
        assert!(!is_birth_number("0002290013"));
    }

    #[test]
    fn test_nine_digit_birth_numbers() {
        assert!(is_birth_number("520101123"));
        // nine digits after 1953
        assert!(!is_birth_number("600101123"));
        // 30 February
        assert!(!is_birth_number("500230123"));
    }

    #[test]
    fn test_month_ranges() {
        assert!(!is_birth_number("501301123"));
        assert!(!is_birth_number("506301123"));
        assert!(is_birth_number("505101123"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify_registration_number("12345678").unwrap(),
            RegistrationKind::CompanyId
        );
        assert_eq!(
            classify_registration_number("8351068242").unwrap(),
            RegistrationKind::BirthNumber
        );
        assert!(classify_registration_number("").is_err());
        assert!(classify_registration_number("abc").is_err());
    }

    #[test]
    fn test_license_plates() {
        assert!(is_valid_license_plate("AA111AA"));
        assert!(is_valid_license_plate("BANAN22"));
        assert!(!is_valid_license_plate("aa111AA"));
        assert!(!is_valid_license_plate("AA111A"));
        assert!(!is_valid_license_plate("AA-11AA"));
        assert!(!is_valid_license_plate(""));
    }
}
