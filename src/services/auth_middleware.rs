// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Request authentication helpers for Axum.
//!
//! Provides helper functions and types shared by the route handlers:
//! - `SESSION_COOKIE_NAME`: the cookie name for dashboard sessions
//! - `extract_session_token` / `create_session_cookie` / `clear_session_cookie`
//! - `extract_bearer_token`: access token from the `Authorization` header
//! - `require_gateway_credentials`: `App-Id` / `App-Secret` header check
//! - `ApiError`: error type serialized as `{error_class, error_message}`

use crate::models::error_report::ErrorResponse;
use crate::services::config::PrioraConfig;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tower_cookies::{Cookie, Cookies};

/// Cookie name for the dashboard session.
pub const SESSION_COOKIE_NAME: &str = "connector_session";

// ---------------------------------------------------------------------------
// API errors
// ---------------------------------------------------------------------------

/// API error response carrying a machine-readable error class.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error_class: String,
    pub error_message: String,
}

impl ApiError {
    fn new(status: StatusCode, error_class: &str, error_message: impl Into<String>) -> Self {
        Self {
            status,
            error_class: error_class.to_string(),
            error_message: error_message.into(),
        }
    }

    pub fn bad_request(error_class: &str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_class, message)
    }

    pub fn unauthorized(error_class: &str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_class, message)
    }

    pub fn not_found(error_class: &str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_class, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!("internal API error: {message}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error_class: self.error_class,
                error_message: self.error_message,
            }),
        )
            .into_response()
    }
}

// ---------------------------------------------------------------------------
// Dashboard session cookies
// ---------------------------------------------------------------------------

/// Extract the session token from cookies.
pub fn extract_session_token(cookies: &Cookies) -> Option<String> {
    cookies
        .get(SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
}

/// Create a session cookie with the given token.
pub fn create_session_cookie(token: &str, max_age_days: u64) -> Cookie<'static> {
    let max_age_secs = max_age_days * 24 * 60 * 60;
    Cookie::build((SESSION_COOKIE_NAME, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(tower_cookies::cookie::SameSite::Lax)
        .max_age(tower_cookies::cookie::time::Duration::seconds(
            max_age_secs as i64,
        ))
        .build()
}

/// Create a cookie that clears the session (for sign-out).
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .max_age(tower_cookies::cookie::time::Duration::ZERO)
        .build()
}

// ---------------------------------------------------------------------------
// Gateway and TPP authentication
// ---------------------------------------------------------------------------

/// Extract the bearer access token from the `Authorization` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Require gateway credentials on a request.
///
/// Gateway-originated endpoints (token create, error reporting) must carry
/// `App-Id` and `App-Secret` headers matching the connector registration.
pub fn require_gateway_credentials(
    headers: &HeaderMap,
    config: &PrioraConfig,
) -> Result<(), ApiError> {
    let app_id = headers.get("App-Id").and_then(|v| v.to_str().ok());
    let app_secret = headers.get("App-Secret").and_then(|v| v.to_str().ok());

    match (app_id, app_secret) {
        (Some(id), Some(secret)) if id == config.app_id && secret == config.app_secret => Ok(()),
        _ => Err(ApiError::unauthorized(
            "InvalidGatewayCredentials",
            "App-Id or App-Secret header is missing or does not match",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn test_config() -> PrioraConfig {
        PrioraConfig {
            app_code: "demo_connector".to_string(),
            app_id: "app-id-1".to_string(),
            app_secret: "app-secret-1".to_string(),
            base_url: "https://priora.saltedge.com/".to_string(),
            connector_host: "https://connector.example.com".to_string(),
        }
    }

    #[test]
    fn test_session_cookie_name() {
        assert_eq!(SESSION_COOKIE_NAME, "connector_session");
    }

    #[test]
    fn test_api_error_status_codes() {
        use axum::body::Body;
        use axum::http::Response;

        let response: Response<Body> =
            ApiError::bad_request("InvalidAttributeValue", "bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response: Response<Body> =
            ApiError::unauthorized("TokenExpired", "expired").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response: Response<Body> =
            ApiError::not_found("AccountNotFound", "missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response: Response<Body> = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_create_session_cookie() {
        let cookie = create_session_cookie("test_token", 14);
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "test_token");
        assert!(cookie.http_only().unwrap_or(false));
    }

    #[test]
    fn test_clear_session_cookie() {
        let cookie = clear_session_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "");
    }

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abcdef123456"),
        );
        assert_eq!(
            extract_bearer_token(&headers),
            Some("abcdef123456".to_string())
        );
    }

    #[test]
    fn test_extract_bearer_token_missing_or_malformed() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(extract_bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_gateway_credentials_match() {
        let config = test_config();
        let mut headers = HeaderMap::new();
        headers.insert("App-Id", HeaderValue::from_static("app-id-1"));
        headers.insert("App-Secret", HeaderValue::from_static("app-secret-1"));
        assert!(require_gateway_credentials(&headers, &config).is_ok());
    }

    #[test]
    fn test_gateway_credentials_mismatch() {
        let config = test_config();
        let mut headers = HeaderMap::new();
        headers.insert("App-Id", HeaderValue::from_static("app-id-1"));
        headers.insert("App-Secret", HeaderValue::from_static("wrong"));
        let err = require_gateway_credentials(&headers, &config).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error_class, "InvalidGatewayCredentials");
    }

    #[test]
    fn test_gateway_credentials_missing() {
        let config = test_config();
        assert!(require_gateway_credentials(&HeaderMap::new(), &config).is_err());
    }
}
