// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Session callbacks to the Priora gateway.
//!
//! After a token creation attempt the connector notifies the gateway about
//! the session outcome. Delivery is best-effort; failures are logged and do
//! not affect the API response.

use crate::services::config::PrioraConfig;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Success payload for `sessions/{session_secret}/success`.
#[derive(Debug, Serialize)]
struct SessionSuccessPayload<'a> {
    user_id: &'a str,
    token_expires_at: DateTime<Utc>,
}

/// Failure payload for `sessions/{session_secret}/fail`.
#[derive(Debug, Serialize)]
struct SessionFailPayload<'a> {
    error_class: &'a str,
    error_message: &'a str,
}

/// HTTP client for gateway session callbacks.
pub struct CallbackClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_secret: String,
}

impl CallbackClient {
    pub fn new(config: &PrioraConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
        }
    }

    fn session_url(&self, session_secret: &str, outcome: &str) -> String {
        format!(
            "{}/api/connectors/v2/sessions/{}/{}",
            self.base_url, session_secret, outcome
        )
    }

    async fn post_json<T: Serialize>(&self, url: &str, payload: &T) -> Result<()> {
        let response = self
            .http
            .post(url)
            .header("App-Id", &self.app_id)
            .header("App-Secret", &self.app_secret)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("callback request to {url} failed"))?;

        response
            .error_for_status()
            .with_context(|| format!("callback to {url} rejected"))?;
        Ok(())
    }

    /// Notify the gateway that the session produced a token.
    pub async fn send_session_success(
        &self,
        session_secret: &str,
        user_id: &str,
        token_expires_at: DateTime<Utc>,
    ) -> Result<()> {
        let url = self.session_url(session_secret, "success");
        self.post_json(
            &url,
            &SessionSuccessPayload {
                user_id,
                token_expires_at,
            },
        )
        .await
    }

    /// Notify the gateway that the session failed.
    pub async fn send_session_fail(
        &self,
        session_secret: &str,
        error_class: &str,
        error_message: &str,
    ) -> Result<()> {
        let url = self.session_url(session_secret, "fail");
        self.post_json(
            &url,
            &SessionFailPayload {
                error_class,
                error_message,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_url_shape() {
        let client = CallbackClient::new(&PrioraConfig {
            app_code: "demo_connector".to_string(),
            app_id: "id".to_string(),
            app_secret: "secret".to_string(),
            base_url: "https://priora.saltedge.com/".to_string(),
            connector_host: "https://connector.example.com".to_string(),
        });
        assert_eq!(
            client.session_url("sessionSecret", "success"),
            "https://priora.saltedge.com/api/connectors/v2/sessions/sessionSecret/success"
        );
        assert_eq!(
            client.session_url("sessionSecret", "fail"),
            "https://priora.saltedge.com/api/connectors/v2/sessions/sessionSecret/fail"
        );
    }
}
