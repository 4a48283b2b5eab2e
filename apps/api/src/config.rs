//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Pricing policy knobs (tax rate, shipping threshold and rate)
//! live here rather than in call sites so deployments can tune them.

use serde::{Deserialize, Serialize};
use std::env;

use verdant_core::shipping::{FLAT_SHIPPING_RATE_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};
use verdant_core::tax::DEFAULT_TAX_RATE_BPS;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// SQLite database file path
    pub database_path: String,

    /// Fallback sales tax rate in basis points (800 = 8%)
    pub tax_rate_bps: u32,

    /// Orders at or above this subtotal (cents) ship free
    pub free_shipping_threshold_cents: i64,

    /// Flat shipping rate (cents) below the threshold
    pub flat_shipping_rate_cents: i64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "./verdant.db".to_string()),

            tax_rate_bps: env::var("TAX_RATE_BPS")
                .unwrap_or_else(|_| DEFAULT_TAX_RATE_BPS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TAX_RATE_BPS".to_string()))?,

            free_shipping_threshold_cents: env::var("FREE_SHIPPING_THRESHOLD_CENTS")
                .unwrap_or_else(|_| FREE_SHIPPING_THRESHOLD_CENTS.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("FREE_SHIPPING_THRESHOLD_CENTS".to_string())
                })?,

            flat_shipping_rate_cents: env::var("FLAT_SHIPPING_RATE_CENTS")
                .unwrap_or_else(|_| FLAT_SHIPPING_RATE_CENTS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FLAT_SHIPPING_RATE_CENTS".to_string()))?,
        };

        Ok(config)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            http_port: 8001,
            database_path: "./verdant.db".to_string(),
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            free_shipping_threshold_cents: FREE_SHIPPING_THRESHOLD_CENTS,
            flat_shipping_rate_cents: FLAT_SHIPPING_RATE_CENTS,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_storefront_policy() {
        let config = ApiConfig::default();
        assert_eq!(config.http_port, 8001);
        assert_eq!(config.tax_rate_bps, 800);
        assert_eq!(config.free_shipping_threshold_cents, 5000);
        assert_eq!(config.flat_shipping_rate_cents, 899);
    }
}
