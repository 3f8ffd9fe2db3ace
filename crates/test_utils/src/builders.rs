//! Test Data Builders
//!
//! Builders that let tests specify only the relevant fields and take
//! defaults for everything else.

use chrono::NaiveDateTime;
use core_kernel::PartyId;
use domain_claims::SettlementRules;
use domain_company::InsuranceCompany;
use domain_contract::UnderwritingRules;

use crate::fixtures::{PersonFixtures, TemporalFixtures};

/// A company with the fixture persons already registered
pub struct TestCompany {
    pub company: InsuranceCompany,
    /// Natural person, birth number `8351068242`
    pub natural_1: PartyId,
    /// Natural person, birth number `0402114911`
    pub natural_2: PartyId,
    /// Legal person, company id `12345678`
    pub legal: PartyId,
}

/// Builder for `TestCompany`
pub struct TestCompanyBuilder {
    now: NaiveDateTime,
    underwriting: UnderwritingRules,
    settlement: SettlementRules,
}

impl Default for TestCompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCompanyBuilder {
    /// Creates a builder at the reference time with default rules
    pub fn new() -> Self {
        Self {
            now: TemporalFixtures::reference_time(),
            underwriting: UnderwritingRules::default(),
            settlement: SettlementRules::default(),
        }
    }

    /// Sets the initial clock reading
    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// Sets the underwriting rules
    pub fn with_underwriting(mut self, rules: UnderwritingRules) -> Self {
        self.underwriting = rules;
        self
    }

    /// Sets the settlement rules
    pub fn with_settlement(mut self, rules: SettlementRules) -> Self {
        self.settlement = rules;
        self
    }

    /// Builds the company and registers the fixture persons
    pub fn build(self) -> TestCompany {
        let mut company = InsuranceCompany::with_rules(self.now, self.underwriting, self.settlement)
            .expect("valid test rules");
        let natural_1 = company
            .register_person(PersonFixtures::natural_1())
            .expect("fresh directory");
        let natural_2 = company
            .register_person(PersonFixtures::natural_2())
            .expect("fresh directory");
        let legal = company
            .register_person(PersonFixtures::legal())
            .expect("fresh directory");

        TestCompany {
            company,
            natural_1,
            natural_2,
            legal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_builder_registers_fixtures() {
        let test = TestCompanyBuilder::new().build();
        assert_eq!(test.company.persons().len(), 3);
        assert!(test.company.person(&test.legal).unwrap().is_legal_entity());
        assert_eq!(test.company.current_time(), TemporalFixtures::reference_time());
    }
}
