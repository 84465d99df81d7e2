// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Dashboard authentication service: password sign-in and session management.

use crate::models::session::{AuthUser, DashboardUser, Session};
use crate::services::config::SessionConfig;
use crate::services::logging::anonymize_email;
use crate::services::store::ConnectorStore;
use anyhow::{Context, Result};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

/// Dashboard authentication service.
pub struct AuthService {
    store: Arc<ConnectorStore>,
    config: SessionConfig,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(store: Arc<ConnectorStore>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    // ========== Token Generation ==========

    /// Generate a secure random token.
    /// Returns (raw_token, hash) - raw_token is sent to user, hash is stored.
    pub fn generate_token() -> (String, String) {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        let raw_token = hex::encode(bytes);
        let hash = Self::hash_token(&raw_token);
        (raw_token, hash)
    }

    /// Hash a token for storage.
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Hash a password for storage. The email is mixed in as a salt so equal
    /// passwords of different users hash differently.
    pub fn hash_password(email: &str, password: &str) -> String {
        Self::hash_token(&format!("{email}:{password}"))
    }

    // ========== User Seeding ==========

    /// Seed the configured dashboard administrator.
    pub async fn seed_admin(&self) {
        let user = DashboardUser {
            user_id: Uuid::new_v4(),
            email: self.config.admin_email.clone(),
            password_hash: Self::hash_password(&self.config.admin_email, &self.config.admin_password),
            created_at: chrono::Utc::now().timestamp_millis(),
        };
        tracing::info!(
            "seeded dashboard admin: email={}",
            anonymize_email(&user.email)
        );
        self.store.insert_user(user).await;
    }

    // ========== Sign In / Sign Out ==========

    /// Verify credentials and create a session.
    /// Returns the raw session token, or `None` on invalid credentials.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Option<String>> {
        let user = match self.store.find_user_by_email(email).await {
            Some(u) => u,
            None => {
                tracing::warn!(
                    "sign-in failed: unknown email {}",
                    anonymize_email(email)
                );
                return Ok(None);
            }
        };

        if user.password_hash != Self::hash_password(email, password) {
            tracing::warn!(
                "sign-in failed: bad password for {}",
                anonymize_email(email)
            );
            return Ok(None);
        }

        let (session_token, session_hash) = Self::generate_token();
        let now = chrono::Utc::now().timestamp_millis();
        let expires_at = now + (self.config.session_max_age_days as i64 * 24 * 60 * 60 * 1000);

        self.store
            .insert_session(Session {
                session_id: session_hash,
                user_id: user.user_id,
                created_at: now,
                expires_at,
            })
            .await;

        tracing::info!(
            "user signed in: user_id={}, email={}",
            user.user_id,
            anonymize_email(&user.email)
        );

        Ok(Some(session_token))
    }

    /// Validate a session token and return the authenticated user context.
    pub async fn validate_session(&self, session_token: &str) -> Result<Option<AuthUser>> {
        let session_hash = Self::hash_token(session_token);

        let session = match self.store.get_session(&session_hash).await {
            Some(s) => s,
            None => return Ok(None),
        };

        if session.is_expired() {
            // Clean up expired session
            self.store.delete_session(&session_hash).await;
            return Ok(None);
        }

        let user = self
            .store
            .find_user_by_id(session.user_id)
            .await
            .context("session refers to an unknown user")?;

        Ok(Some(AuthUser {
            user_id: user.user_id,
            email: user.email,
        }))
    }

    /// Sign out - invalidate session.
    pub async fn sign_out(&self, session_token: &str) -> Result<()> {
        let session_hash = Self::hash_token(session_token);
        self.store.delete_session(&session_hash).await;
        Ok(())
    }

    /// Session lifetime, for cookie max-age.
    pub fn session_max_age_days(&self) -> u64 {
        self.config.session_max_age_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        AuthService::new(
            Arc::new(ConnectorStore::new()),
            SessionConfig {
                session_max_age_days: 14,
                admin_email: "admin@example.com".to_string(),
                admin_password: "hunter2!".to_string(),
            },
        )
    }

    #[test]
    fn test_generate_token_produces_unique_tokens() {
        let (token1, _) = AuthService::generate_token();
        let (token2, _) = AuthService::generate_token();
        assert_ne!(token1, token2);
    }

    #[test]
    fn test_generate_token_produces_valid_hex() {
        let (token, hash) = AuthService::generate_token();
        assert_eq!(token.len(), 64); // 32 bytes = 64 hex chars
        assert_eq!(hash.len(), 64); // SHA-256 = 64 hex chars
        assert!(hex::decode(&token).is_ok());
        assert!(hex::decode(&hash).is_ok());
    }

    #[test]
    fn test_hash_token_is_deterministic() {
        let token = "test_token_123";
        let hash1 = AuthService::hash_token(token);
        let hash2 = AuthService::hash_token(token);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_password_hash_is_salted_by_email() {
        let hash1 = AuthService::hash_password("a@example.com", "pw");
        let hash2 = AuthService::hash_password("b@example.com", "pw");
        assert_ne!(hash1, hash2);
    }

    #[tokio::test]
    async fn test_sign_in_with_valid_credentials() {
        let service = test_service();
        service.seed_admin().await;

        let token = service
            .sign_in("admin@example.com", "hunter2!")
            .await
            .unwrap()
            .expect("expected a session token");

        let auth_user = service.validate_session(&token).await.unwrap().unwrap();
        assert_eq!(auth_user.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_sign_in_with_bad_password() {
        let service = test_service();
        service.seed_admin().await;

        let result = service.sign_in("admin@example.com", "wrong").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_sign_in_with_unknown_email() {
        let service = test_service();
        service.seed_admin().await;

        let result = service.sign_in("nobody@example.com", "hunter2!").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_invalidates_session() {
        let service = test_service();
        service.seed_admin().await;

        let token = service
            .sign_in("admin@example.com", "hunter2!")
            .await
            .unwrap()
            .unwrap();
        service.sign_out(&token).await.unwrap();

        assert!(service.validate_session(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_validate_session_rejects_garbage_token() {
        let service = test_service();
        service.seed_admin().await;

        assert!(service
            .validate_session("not-a-real-token")
            .await
            .unwrap()
            .is_none());
    }
}
