//! Configuration loading and management

use crate::core::ConsoleError;
use serde::{Deserialize, Serialize};

/// Connection settings for the coupon API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/Coupons` routes hang off
    pub base_url: String,

    /// Per-request timeout. No timeout when absent.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Defaults applied by the coupon form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponDefaults {
    /// Length of the default validity window, in days from today
    pub validity_days: u32,

    /// Length of generated coupon codes
    pub code_length: usize,

    /// Largest batch a single generated-coupon save may create
    pub max_batch: u32,
}

impl Default for CouponDefaults {
    fn default() -> Self {
        Self {
            validity_days: 7,
            code_length: 8,
            max_batch: 100,
        }
    }
}

/// Complete console configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub coupons: CouponDefaults,
}

impl ConsoleConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConsoleError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConsoleError::Config(format!("Failed to read {}: {}", path, e)))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConsoleError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConsoleError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConsoleError::Config("api.base_url must not be empty".to_string()));
        }
        if self.coupons.code_length < 4 {
            return Err(ConsoleError::Config(format!(
                "coupons.code_length must be at least 4 (got {})",
                self.coupons.code_length
            )));
        }
        if self.coupons.max_batch == 0 {
            return Err(ConsoleError::Config("coupons.max_batch must be at least 1".to_string()));
        }
        Ok(())
    }
}
