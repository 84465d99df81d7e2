// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Dashboard user and session models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ============================================================================
// Database-shaped records
// ============================================================================

/// Dashboard user record.
#[derive(Debug, Clone)]
pub struct DashboardUser {
    pub user_id: Uuid,
    pub email: String,
    /// SHA-256 hash of the password. Raw passwords are never kept.
    pub password_hash: String,
    pub created_at: i64,
}

/// Dashboard session record.
#[derive(Debug, Clone)]
pub struct Session {
    /// SHA-256 hash of the session token.
    pub session_id: String,
    pub user_id: Uuid,
    pub created_at: i64,
    pub expires_at: i64,
}

impl Session {
    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp_millis();
        self.expires_at < now
    }
}

/// Authenticated dashboard user context extracted from the session cookie.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

// ============================================================================
// API Request Types
// ============================================================================

/// Request to sign in to the dashboard.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// API Response Types
// ============================================================================

/// Generic message response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Dashboard index summary. Served regardless of authentication state;
/// `signed_in` reflects whether a valid session cookie was presented.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub connector: String,
    pub version: String,
    pub signed_in: bool,
    pub tokens_total: usize,
    pub tokens_revoked: usize,
    pub error_reports: usize,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expiry() {
        let expired_session = Session {
            session_id: "test".to_string(),
            user_id: Uuid::new_v4(),
            created_at: 0,
            expires_at: 0, // Expired at epoch
        };
        assert!(expired_session.is_expired());

        let future_timestamp = chrono::Utc::now().timestamp_millis() + 3600000; // 1 hour from now
        let valid_session = Session {
            session_id: "test".to_string(),
            user_id: Uuid::new_v4(),
            created_at: 0,
            expires_at: future_timestamp,
        };
        assert!(!valid_session.is_expired());
    }
}
