// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Access token lifecycle: creation, revocation, and request authorization.

use crate::models::token::{
    expiry_instant, CreateTokenRequest, Token, TokenStatus, CONSENT_MAX_PERIOD_DAYS,
};
use crate::services::auth::AuthService;
use crate::services::auth_middleware::ApiError;
use crate::services::callbacks::CallbackClient;
use crate::services::logging::anonymize_token;
use crate::services::provider::Provider;
use crate::services::store::ConnectorStore;
use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// A freshly issued token together with its raw access token.
#[derive(Debug)]
pub struct IssuedToken {
    pub token: Token,
    pub access_token: String,
}

/// Token lifecycle service.
pub struct TokenService {
    store: Arc<ConnectorStore>,
    provider: Arc<dyn Provider>,
    /// Gateway callback client; `None` disables callbacks (tests, dev).
    callbacks: Option<Arc<CallbackClient>>,
}

/// Clamp a requested consent expiry to the maximum allowed window. The date
/// is inclusive: `valid_until == today` keeps the token valid through today.
/// Returns the effective expiry date, or `None` if the request lies in the past.
pub fn effective_valid_until(requested: Option<NaiveDate>, today: NaiveDate) -> Option<NaiveDate> {
    let max = today + Duration::days(CONSENT_MAX_PERIOD_DAYS);
    match requested {
        Some(d) if d < today => None,
        Some(d) => Some(d.min(max)),
        None => Some(max),
    }
}

impl TokenService {
    pub fn new(
        store: Arc<ConnectorStore>,
        provider: Arc<dyn Provider>,
        callbacks: Option<Arc<CallbackClient>>,
    ) -> Self {
        Self {
            store,
            provider,
            callbacks,
        }
    }

    // ========== Creation ==========

    /// Create an access token for a gateway session.
    ///
    /// Validation failures trigger a fail callback to the gateway before the
    /// error is returned; a successful creation triggers a success callback.
    pub async fn create(&self, request: CreateTokenRequest) -> Result<IssuedToken, ApiError> {
        match self.validate_and_issue(&request).await {
            Ok(issued) => {
                self.spawn_success_callback(&issued.token);
                Ok(issued)
            }
            Err(err) => {
                self.spawn_fail_callback(&request.session_secret, &err);
                Err(err)
            }
        }
    }

    async fn validate_and_issue(&self, request: &CreateTokenRequest) -> Result<IssuedToken, ApiError> {
        url::Url::parse(&request.redirect_url).map_err(|_| {
            ApiError::bad_request("InvalidAttributeValue", "redirect_url is not a valid URL")
        })?;

        if request.access.is_empty() {
            return Err(ApiError::bad_request(
                "InvalidAttributeValue",
                "access consent is empty",
            ));
        }

        // Rejects unknown authorization types with InvalidAuthorizationType.
        let user_id = self.provider.authorize_user(&request.authorization_type)?;

        let valid_until = effective_valid_until(request.valid_until, Utc::now().date_naive())
            .ok_or_else(|| {
                ApiError::bad_request("InvalidAttributeValue", "valid_until is in the past")
            })?;

        let (access_token, access_token_hash) = AuthService::generate_token();
        let token = Token {
            id: Uuid::new_v4(),
            session_secret: request.session_secret.clone(),
            provider_code: request.provider_code.clone(),
            tpp_app_name: request.app_name.clone(),
            authorization_type: request.authorization_type.clone(),
            user_id,
            status: TokenStatus::Confirmed,
            access_token_hash,
            requested_consent: request.access.clone(),
            token_expires_at: expiry_instant(valid_until),
            created_at: Utc::now(),
        };

        self.store.insert_token(token.clone()).await.map_err(|_| {
            ApiError::bad_request(
                "DuplicatedSessionSecret",
                "a token already exists for this session secret",
            )
        })?;

        tracing::info!(
            "token issued: session_secret={}, tpp={}, expires_at={}",
            token.session_secret,
            token.tpp_app_name,
            token.token_expires_at
        );

        Ok(IssuedToken {
            token,
            access_token,
        })
    }

    // ========== Revocation ==========

    /// Revoke the token identified by the given raw access token.
    pub async fn revoke(&self, access_token: &str) -> Result<Token, ApiError> {
        let hash = AuthService::hash_token(access_token);
        let token = self
            .store
            .revoke_token(&hash)
            .await
            .ok_or_else(|| ApiError::not_found("TokenNotFound", "No token for access token"))?;

        tracing::info!(
            "token revoked: session_secret={}, access_token={}",
            token.session_secret,
            anonymize_token(access_token)
        );

        Ok(token)
    }

    // ========== Request Authorization ==========

    /// Resolve a bearer access token into an authorized token record.
    pub async fn authorize(&self, access_token: &str) -> Result<Token, ApiError> {
        let hash = AuthService::hash_token(access_token);
        let token = self
            .store
            .find_token_by_access_hash(&hash)
            .await
            .ok_or_else(|| ApiError::unauthorized("InvalidToken", "Unknown access token"))?;

        if token.status == TokenStatus::Revoked {
            return Err(ApiError::unauthorized(
                "TokenRevoked",
                "Access token has been revoked",
            ));
        }
        if token.is_expired() {
            return Err(ApiError::unauthorized(
                "TokenExpired",
                "Access token has expired",
            ));
        }
        Ok(token)
    }

    // ========== Callbacks ==========

    fn spawn_success_callback(&self, token: &Token) {
        let Some(callbacks) = self.callbacks.clone() else {
            return;
        };
        let session_secret = token.session_secret.clone();
        let user_id = token.user_id.clone();
        let expires_at = token.token_expires_at;
        tokio::spawn(async move {
            if let Err(e) = callbacks
                .send_session_success(&session_secret, &user_id, expires_at)
                .await
            {
                tracing::warn!("session success callback failed: {e:#}");
            }
        });
    }

    fn spawn_fail_callback(&self, session_secret: &str, error: &ApiError) {
        let Some(callbacks) = self.callbacks.clone() else {
            return;
        };
        let session_secret = session_secret.to_string();
        let error_class = error.error_class.clone();
        let error_message = error.error_message.clone();
        tokio::spawn(async move {
            if let Err(e) = callbacks
                .send_session_fail(&session_secret, &error_class, &error_message)
                .await
            {
                tracing::warn!("session fail callback failed: {e:#}");
            }
        });
    }
}
