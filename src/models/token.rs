// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Maximum consent validity window, in days. A `valid_until` further out than
/// this is clamped to it.
pub const CONSENT_MAX_PERIOD_DAYS: i64 = 90;

// ============================================================================
// Token Status
// ============================================================================

/// Lifecycle status of an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// Authorizes account information endpoints until expiry.
    Confirmed,
    /// Explicitly revoked by the gateway.
    Revoked,
}

// ============================================================================
// Consent
// ============================================================================

/// Access scope requested by the TPP for a token.
///
/// Either a global consent (`all_accounts`) or explicit per-IBAN lists for
/// balances and transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderConsents {
    /// Global consent marker, e.g. "allAccounts".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_access_consent: Option<String>,
    /// IBANs the TPP may read balances for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances: Option<Vec<String>>,
    /// IBANs the TPP may read transactions for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<String>>,
}

impl ProviderConsents {
    /// Consent covering all accounts of the user.
    pub fn all_accounts() -> Self {
        Self {
            global_access_consent: Some("allAccounts".to_string()),
            balances: None,
            transactions: None,
        }
    }

    /// A consent with neither a global marker nor any explicit IBAN is empty
    /// and grants nothing.
    pub fn is_empty(&self) -> bool {
        self.global_access_consent.is_none()
            && self.balances.as_ref().is_none_or(|v| v.is_empty())
            && self.transactions.as_ref().is_none_or(|v| v.is_empty())
    }
}

// ============================================================================
// Token record
// ============================================================================

/// Access token record.
///
/// Only the SHA-256 hash of the access token is kept; the raw token is
/// returned once at creation and never stored.
#[derive(Debug, Clone)]
pub struct Token {
    pub id: Uuid,
    /// Gateway session this token was created for. Unique per token.
    pub session_secret: String,
    pub provider_code: String,
    pub tpp_app_name: String,
    pub authorization_type: String,
    /// Provider-side user the token grants access to.
    pub user_id: String,
    pub status: TokenStatus,
    pub access_token_hash: String,
    pub requested_consent: ProviderConsents,
    pub token_expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Token {
    /// Check if the token has expired.
    pub fn is_expired(&self) -> bool {
        self.token_expires_at < Utc::now()
    }
}

/// Turn an inclusive consent expiry date into the instant it stops being
/// valid: the start of the following day (UTC), so the whole of
/// `valid_until` is still covered.
pub fn expiry_instant(valid_until: NaiveDate) -> DateTime<Utc> {
    (valid_until + Duration::days(1))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

// ============================================================================
// API Request Types
// ============================================================================

/// Request to create an access token for a TPP session.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTokenRequest {
    /// Human readable provider identifier.
    pub provider_code: String,
    /// TPP application name.
    pub app_name: String,
    /// Authorization type used for token creation. Must be one of the
    /// provider's supported types.
    pub authorization_type: String,
    /// URL the customer is redirected to after authorizing on the provider side.
    pub redirect_url: String,
    /// Gateway session secret this token creation belongs to.
    pub session_secret: String,
    /// Requested access scope.
    pub access: ProviderConsents,
    /// Inclusive consent expiry date (ISO date). Clamped to now + 90 days
    /// when missing or further out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
}

// ============================================================================
// API Response Types
// ============================================================================

/// Response after creating a token. Carries the raw access token, which is
/// shown exactly once.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTokenResponse {
    pub success: bool,
    pub message: String,
    pub session_secret: String,
    pub access_token: String,
    pub token_expires_at: DateTime<Utc>,
}

/// Response after revoking a token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RevokeTokenResponse {
    pub success: bool,
    pub message: String,
    pub session_secret: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn token_expiring_at(expires_at: DateTime<Utc>) -> Token {
        Token {
            id: Uuid::new_v4(),
            session_secret: "secret1".to_string(),
            provider_code: "demobank".to_string(),
            tpp_app_name: "tppAppName".to_string(),
            authorization_type: "oauth".to_string(),
            user_id: "1".to_string(),
            status: TokenStatus::Confirmed,
            access_token_hash: "hash".to_string(),
            requested_consent: ProviderConsents::all_accounts(),
            token_expires_at: expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_expiry_check() {
        assert!(!token_expiring_at(Utc::now() + Duration::days(1)).is_expired());
        assert!(token_expiring_at(Utc::now() - Duration::seconds(1)).is_expired());
    }

    #[test]
    fn test_expiry_instant_covers_the_whole_consented_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let instant = expiry_instant(date);
        assert_eq!(instant.to_rfc3339(), "2026-03-15T00:00:00+00:00");
    }

    #[test]
    fn test_empty_consent() {
        assert!(ProviderConsents::default().is_empty());
        assert!(!ProviderConsents::all_accounts().is_empty());

        let explicit = ProviderConsents {
            global_access_consent: None,
            balances: Some(vec!["DE89370400440532013000".to_string()]),
            transactions: None,
        };
        assert!(!explicit.is_empty());
    }

    #[test]
    fn test_consent_serialization_skips_absent_fields() {
        let json = serde_json::to_string(&ProviderConsents::all_accounts()).unwrap();
        assert_eq!(json, r#"{"global_access_consent":"allAccounts"}"#);
    }
}
