// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Connector configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Default Salt Edge Compliance base URL.
pub const DEFAULT_PRIORA_BASE_URL: &str = "https://priora.saltedge.com/";

/// Gateway-facing configuration.
///
/// `app_id` / `app_secret` identify this connector at the gateway and are
/// also what gateway-originated requests must present in the `App-Id` /
/// `App-Secret` headers.
#[derive(Debug, Clone)]
pub struct PrioraConfig {
    /// Registered connector code.
    pub app_code: String,
    /// Unique connector App ID.
    pub app_id: String,
    /// Unique connector App Secret.
    pub app_secret: String,
    /// Gateway base URL for session callbacks.
    pub base_url: String,
    /// Public host of this connector, used when building absolute URLs.
    pub connector_host: String,
}

impl PrioraConfig {
    /// Load gateway configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            app_code: env::var("PRIORA_APP_CODE").context("PRIORA_APP_CODE must be set")?,
            app_id: env::var("PRIORA_APP_ID").context("PRIORA_APP_ID must be set")?,
            app_secret: env::var("PRIORA_APP_SECRET").context("PRIORA_APP_SECRET must be set")?,
            base_url: env::var("PRIORA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PRIORA_BASE_URL.to_string()),
            connector_host: env::var("CONNECTOR_HOST").context("CONNECTOR_HOST must be set")?,
        })
    }
}

/// Dashboard session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session lifetime in days
    pub session_max_age_days: u64,
    /// Seeded dashboard administrator email.
    pub admin_email: String,
    /// Seeded dashboard administrator password.
    pub admin_password: String,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            session_max_age_days: env::var("SESSION_MAX_AGE_DAYS")
                .unwrap_or_else(|_| "14".to_string())
                .parse()
                .context("SESSION_MAX_AGE_DAYS must be a valid number")?,
            admin_email: env::var("DASHBOARD_ADMIN_EMAIL")
                .context("DASHBOARD_ADMIN_EMAIL must be set")?,
            admin_password: env::var("DASHBOARD_ADMIN_PASSWORD")
                .context("DASHBOARD_ADMIN_PASSWORD must be set")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_priora() {
        assert_eq!(DEFAULT_PRIORA_BASE_URL, "https://priora.saltedge.com/");
    }

    #[test]
    fn test_session_config_default_max_age() {
        env::remove_var("SESSION_MAX_AGE_DAYS");
        env::set_var("DASHBOARD_ADMIN_EMAIL", "admin@example.com");
        env::set_var("DASHBOARD_ADMIN_PASSWORD", "changeme");

        let config = SessionConfig::from_env().unwrap();
        assert_eq!(config.session_max_age_days, 14);
    }
}
