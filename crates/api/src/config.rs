//! Process configuration, read from environment variables.

use std::net::SocketAddr;

use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use stockroom_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "STOCKROOM_BIND_ADDR";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const SEED_VAR: &str = "STOCKROOM_SEED";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Threshold used by the dashboard's low-stock list.
    pub low_stock_threshold: u64,
    /// Start from the seed catalog (`true`) or an empty table.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            seed: true,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| invalid(BIND_ADDR_VAR, &bind_addr, e.to_string()))?;

        let low_stock_threshold = match lookup(LOW_STOCK_THRESHOLD_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| invalid(LOW_STOCK_THRESHOLD_VAR, &raw, e.to_string()))?,
            None => DEFAULT_LOW_STOCK_THRESHOLD,
        };

        let seed = match lookup(SEED_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|e| invalid(SEED_VAR, &raw, e.to_string()))?,
            None => true,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| invalid(LOG_FORMAT_VAR, &raw, e))?,
            None => LogFormat::Json,
        };

        Ok(Self {
            bind_addr,
            low_stock_threshold,
            seed,
            log_format,
        })
    }
}

fn invalid(var: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason,
    }
}
