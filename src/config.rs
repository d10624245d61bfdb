//! Service configuration with validation and defaults.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level lottery service configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LotteryConfig {
    pub draw: DrawConfig,
    pub api: ApiConfig,
}

/// Draw cadence and fee settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Seconds between drawings. The design granularity is one minute;
    /// changing this is an ops choice, not a structural one.
    pub period_secs: u64,
    /// Flat participation fee accrued per registration call.
    pub fee: f64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            period_secs: 60,
            fee: 100.0,
        }
    }
}

impl DrawConfig {
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.period_secs)
    }
}

/// HTTP boundary settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origins: vec!["*".to_string()],
            request_timeout_secs: 30,
        }
    }
}

impl LotteryConfig {
    /// Reject configurations the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draw.period_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "draw.period_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.draw.fee.is_finite() || self.draw.fee < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "draw.fee",
                reason: format!("must be a non-negative amount, got {}", self.draw.fee),
            });
        }
        if self.api.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.request_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
