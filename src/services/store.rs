// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! In-memory state for tokens, dashboard users/sessions, and error reports.
//!
//! The connector holds no persistent data model; everything here is
//! request-scoped bookkeeping that lives for the lifetime of the process.

use crate::models::error_report::ErrorReport;
use crate::models::session::{DashboardUser, Session};
use crate::models::token::{Token, TokenStatus};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Token counters for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCounts {
    pub total: usize,
    pub revoked: usize,
}

/// Insert failed because a token with the same session secret already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateSessionSecret;

/// Shared in-memory store.
#[derive(Default)]
pub struct ConnectorStore {
    /// Tokens keyed by id.
    tokens: RwLock<HashMap<Uuid, Token>>,
    /// Dashboard users keyed by email.
    users: RwLock<HashMap<String, DashboardUser>>,
    /// Dashboard sessions keyed by session token hash.
    sessions: RwLock<HashMap<String, Session>>,
    error_reports: RwLock<Vec<ErrorReport>>,
}

impl ConnectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Token Operations ==========

    /// Insert a token. Session secret uniqueness is checked under the same
    /// write lock as the insert, so concurrent creates cannot both slip past
    /// the check.
    pub async fn insert_token(&self, token: Token) -> Result<(), DuplicateSessionSecret> {
        let mut tokens = self.tokens.write().await;
        if tokens
            .values()
            .any(|t| t.session_secret == token.session_secret)
        {
            return Err(DuplicateSessionSecret);
        }
        tokens.insert(token.id, token);
        Ok(())
    }

    pub async fn find_token_by_access_hash(&self, access_token_hash: &str) -> Option<Token> {
        self.tokens
            .read()
            .await
            .values()
            .find(|t| t.access_token_hash == access_token_hash)
            .cloned()
    }

    /// Mark the token with the given access token hash as revoked.
    /// Returns the updated token, or `None` if no token matches.
    pub async fn revoke_token(&self, access_token_hash: &str) -> Option<Token> {
        let mut tokens = self.tokens.write().await;
        let token = tokens
            .values_mut()
            .find(|t| t.access_token_hash == access_token_hash)?;
        token.status = TokenStatus::Revoked;
        Some(token.clone())
    }

    pub async fn token_counts(&self) -> TokenCounts {
        let tokens = self.tokens.read().await;
        TokenCounts {
            total: tokens.len(),
            revoked: tokens
                .values()
                .filter(|t| t.status == TokenStatus::Revoked)
                .count(),
        }
    }

    // ========== Dashboard User Operations ==========

    pub async fn insert_user(&self, user: DashboardUser) {
        self.users.write().await.insert(user.email.clone(), user);
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<DashboardUser> {
        self.users.read().await.get(email).cloned()
    }

    pub async fn find_user_by_id(&self, user_id: Uuid) -> Option<DashboardUser> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.user_id == user_id)
            .cloned()
    }

    // ========== Dashboard Session Operations ==========

    pub async fn insert_session(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.session_id.clone(), session);
    }

    pub async fn get_session(&self, session_id_hash: &str) -> Option<Session> {
        self.sessions.read().await.get(session_id_hash).cloned()
    }

    pub async fn delete_session(&self, session_id_hash: &str) {
        self.sessions.write().await.remove(session_id_hash);
    }

    // ========== Error Report Operations ==========

    pub async fn insert_error_report(&self, report: ErrorReport) {
        self.error_reports.write().await.push(report);
    }

    pub async fn error_report_count(&self) -> usize {
        self.error_reports.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::ProviderConsents;
    use chrono::{Duration, Utc};

    fn sample_token(session_secret: &str, access_token_hash: &str) -> Token {
        Token {
            id: Uuid::new_v4(),
            session_secret: session_secret.to_string(),
            provider_code: "demobank".to_string(),
            tpp_app_name: "tppAppName".to_string(),
            authorization_type: "oauth".to_string(),
            user_id: "1".to_string(),
            status: TokenStatus::Confirmed,
            access_token_hash: access_token_hash.to_string(),
            requested_consent: ProviderConsents::all_accounts(),
            token_expires_at: Utc::now() + Duration::days(90),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_token_rejects_duplicate_session_secret() {
        let store = ConnectorStore::new();
        store
            .insert_token(sample_token("secret1", "hash1"))
            .await
            .unwrap();

        assert_eq!(
            store.insert_token(sample_token("secret1", "hash2")).await,
            Err(DuplicateSessionSecret)
        );
        assert_eq!(store.token_counts().await.total, 1);
    }

    #[tokio::test]
    async fn test_find_token_by_access_hash() {
        let store = ConnectorStore::new();
        store
            .insert_token(sample_token("secret1", "hash1"))
            .await
            .unwrap();

        let found = store.find_token_by_access_hash("hash1").await.unwrap();
        assert_eq!(found.session_secret, "secret1");
        assert!(store.find_token_by_access_hash("hash2").await.is_none());
    }

    #[tokio::test]
    async fn test_revoke_token_updates_status_and_counts() {
        let store = ConnectorStore::new();
        store
            .insert_token(sample_token("secret1", "hash1"))
            .await
            .unwrap();
        store
            .insert_token(sample_token("secret2", "hash2"))
            .await
            .unwrap();

        let revoked = store.revoke_token("hash1").await.unwrap();
        assert_eq!(revoked.status, TokenStatus::Revoked);
        assert!(store.revoke_token("missing").await.is_none());

        let counts = store.token_counts().await;
        assert_eq!(counts, TokenCounts { total: 2, revoked: 1 });
    }

    #[tokio::test]
    async fn test_session_insert_get_delete() {
        let store = ConnectorStore::new();
        let session = Session {
            session_id: "hash".to_string(),
            user_id: Uuid::new_v4(),
            created_at: 0,
            expires_at: Utc::now().timestamp_millis() + 3600000,
        };
        store.insert_session(session).await;
        assert!(store.get_session("hash").await.is_some());

        store.delete_session("hash").await;
        assert!(store.get_session("hash").await.is_none());
    }

    #[tokio::test]
    async fn test_error_report_count() {
        let store = ConnectorStore::new();
        assert_eq!(store.error_report_count().await, 0);
        store
            .insert_error_report(ErrorReport {
                id: Uuid::new_v4(),
                error_class: "ConnectionLost".to_string(),
                error_message: "socket closed".to_string(),
                request_id: None,
                reported_at: Utc::now(),
            })
            .await;
        assert_eq!(store.error_report_count().await, 1);
    }
}
