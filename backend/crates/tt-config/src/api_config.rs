use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use uuid::Uuid;

/// Account used when a request carries no X-Account-Id header
pub const DEFAULT_ACCOUNT_ID: &str = "00000000-0000-0000-0000-000000000001";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub default_account_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_account_id: DEFAULT_ACCOUNT_ID.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Uuid::parse_str(&self.default_account_id).map_err(|e| {
            ConfigError::api(format!(
                "api.default_account_id must be a UUID, got '{}': {}",
                self.default_account_id, e
            ))
        })?;
        Ok(())
    }

    /// The default account as a UUID; falls back to the built-in default
    /// when the configured value does not parse
    pub fn default_account_uuid(&self) -> Uuid {
        Uuid::parse_str(&self.default_account_id)
            .or_else(|_| Uuid::parse_str(DEFAULT_ACCOUNT_ID))
            .unwrap_or_default()
    }
}
