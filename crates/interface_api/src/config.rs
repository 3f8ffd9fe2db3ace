//! API configuration

use chrono::NaiveDateTime;
use serde::Deserialize;

use domain_claims::SettlementRules;
use domain_contract::UnderwritingRules;

/// API configuration
///
/// Read from `API_`-prefixed environment variables. Nested keys use `__`,
/// e.g. `API_RULES__VEHICLE_COVERAGE_RATIO=0.6`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level, overridden by `RUST_LOG`
    pub log_level: String,
    /// Initial reading of the insurer's logical clock; wall clock when unset
    pub start_time: Option<NaiveDateTime>,
    /// Issuance thresholds
    pub rules: UnderwritingRules,
    /// Claim thresholds
    pub settlement: SettlementRules,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            start_time: None,
            rules: UnderwritingRules::default(),
            settlement: SettlementRules::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("API")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.rules.vehicle_coverage_ratio, dec!(0.5));
        assert_eq!(config.settlement.total_loss_ratio, dec!(0.7));
        assert!(config.start_time.is_none());
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: ApiConfig = serde_json::from_str(
            r#"{"port": 9090, "rules": {"travel_coverage_per_person": 25}}"#,
        )
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.rules.travel_coverage_per_person, 25);
        assert_eq!(config.rules.travel_min_annual_premium_per_person, 5);
    }
}
