// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers for the dashboard surface, and router
//! construction.
//!
//! This module is `pub` so that integration tests can build a test router
//! directly without starting the full binary.

use crate::models::session::DashboardResponse;
use crate::models::version::VersionResponse;
use crate::routes::{priora_router, users_router, ConnectorApiDoc};
use crate::services::auth::AuthService;
use crate::services::auth_middleware::extract_session_token;
use crate::services::config::PrioraConfig;
use crate::services::provider::Provider;
use crate::services::store::ConnectorStore;
use crate::services::tokens::TokenService;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_cookies::{CookieManagerLayer, Cookies};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `CONNECTOR_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("CONNECTOR_VERSION");

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ConnectorStore>,
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub provider: Arc<dyn Provider>,
    pub priora_config: Arc<PrioraConfig>,
}

// ---------------------------------------------------------------------------
// Dashboard route handlers
// ---------------------------------------------------------------------------

pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        connector: "priora-connector".to_string(),
        version: VERSION.to_string(),
    })
}

/// GET / - dashboard index. Served regardless of authentication state.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Json<DashboardResponse> {
    let signed_in = match extract_session_token(&cookies) {
        Some(token) => matches!(
            state.auth_service.validate_session(&token).await,
            Ok(Some(_))
        ),
        None => false,
    };

    let counts = state.store.token_counts().await;
    let error_reports = state.store.error_report_count().await;

    Json(DashboardResponse {
        connector: "priora-connector".to_string(),
        version: VERSION.to_string(),
        signed_in,
        tokens_total: counts.total,
        tokens_revoked: counts.revoked,
        error_reports,
    })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the Axum application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/version", get(version_handler))
        .nest("/users", users_router())
        .nest("/api/priora/v2", priora_router())
        .with_state(state)
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ConnectorApiDoc::openapi()),
        )
        .layer(CookieManagerLayer::new())
}
