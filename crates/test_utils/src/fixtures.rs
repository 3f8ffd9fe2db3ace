//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data. Every registration number and plate here
//! passes validation.

use chrono::{NaiveDate, NaiveDateTime};
use core_kernel::ContractNumber;
use domain_party::{Person, Vehicle};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Reference clock reading: 15 April 2025, noon
    pub fn reference_time() -> NaiveDateTime {
        Self::at(2025, 4, 15)
    }

    /// Noon on the given day
    pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("fixture date must exist")
    }
}

/// Fixture for persons
pub struct PersonFixtures;

impl PersonFixtures {
    /// Birth number of a woman born 6 January 1983
    pub const NATURAL_1: &'static str = "8351068242";
    /// Birth number of a man born 11 February 1904
    pub const NATURAL_2: &'static str = "0402114911";
    /// Eight-digit company id
    pub const LEGAL: &'static str = "12345678";
    /// Six-digit company id
    pub const LEGAL_SHORT: &'static str = "123456";

    pub fn natural_1() -> Person {
        Person::new(Self::NATURAL_1).expect("valid birth number")
    }

    pub fn natural_2() -> Person {
        Person::new(Self::NATURAL_2).expect("valid birth number")
    }

    pub fn legal() -> Person {
        Person::new(Self::LEGAL).expect("valid company id")
    }

    pub fn legal_short() -> Person {
        Person::new(Self::LEGAL_SHORT).expect("valid company id")
    }
}

/// Fixture for vehicles
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// Worth 15000: minimum annual premium 300, coverage 7500, total loss at 10500
    pub fn aa111aa() -> Vehicle {
        Vehicle::new("AA111AA", 15_000).expect("valid vehicle")
    }

    /// Worth 22000
    pub fn banan22() -> Vehicle {
        Vehicle::new("BANAN22", 22_000).expect("valid vehicle")
    }

    /// Worth 8000
    pub fn somryba() -> Vehicle {
        Vehicle::new("SOMRYBA", 8_000).expect("valid vehicle")
    }

    /// Worth 40000
    pub fn icooked() -> Vehicle {
        Vehicle::new("ICOOKED", 40_000).expect("valid vehicle")
    }
}

/// Shorthand for a contract number
pub fn contract_number(value: &str) -> ContractNumber {
    ContractNumber::new(value).expect("non-empty contract number")
}
