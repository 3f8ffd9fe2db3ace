//! Premium payment frequency

use serde::{Deserialize, Serialize};

use core_kernel::temporal::{add_months, TemporalError, Timestamp};

/// How often a premium falls due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumFrequency {
    /// Once a year
    Annual,
    /// Twice a year
    SemiAnnual,
    /// Four times a year
    Quarterly,
    /// Every month
    Monthly,
}

impl PremiumFrequency {
    /// Length of one billing period in months
    pub fn months(&self) -> u32 {
        match self {
            PremiumFrequency::Annual => 12,
            PremiumFrequency::SemiAnnual => 6,
            PremiumFrequency::Quarterly => 3,
            PremiumFrequency::Monthly => 1,
        }
    }

    /// Number of billing periods in a year
    pub fn payments_per_year(&self) -> u32 {
        12 / self.months()
    }

    /// Due date one period after `from`
    pub fn next_due_date(&self, from: Timestamp) -> Result<Timestamp, TemporalError> {
        add_months(from, self.months())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_divide_year() {
        for frequency in [
            PremiumFrequency::Annual,
            PremiumFrequency::SemiAnnual,
            PremiumFrequency::Quarterly,
            PremiumFrequency::Monthly,
        ] {
            assert_eq!(frequency.months() * frequency.payments_per_year(), 12);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PremiumFrequency::SemiAnnual).unwrap();
        assert_eq!(json, "\"semi_annual\"");
    }
}
