// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Token endpoints of the gateway API.

use crate::app::AppState;
use crate::models::error_report::ErrorResponse;
use crate::models::token::{CreateTokenRequest, CreateTokenResponse, RevokeTokenResponse};
use crate::services::auth_middleware::{
    extract_bearer_token, require_gateway_credentials, ApiError,
};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

/// POST /api/priora/v2/tokens - create an access token for a gateway session.
#[utoipa::path(
    post,
    path = "/api/priora/v2/tokens",
    tag = "tokens",
    request_body = CreateTokenRequest,
    responses(
        (status = 200, body = CreateTokenResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTokenRequest>,
) -> Result<Json<CreateTokenResponse>, ApiError> {
    require_gateway_credentials(&headers, &state.priora_config)?;

    let issued = state.token_service.create(payload).await?;

    Ok(Json(CreateTokenResponse {
        success: true,
        message: "Access token issued".to_string(),
        session_secret: issued.token.session_secret,
        access_token: issued.access_token,
        token_expires_at: issued.token.token_expires_at,
    }))
}

/// PATCH /api/priora/v2/tokens/revoke - revoke the bearer access token.
#[utoipa::path(
    patch,
    path = "/api/priora/v2/tokens/revoke",
    tag = "tokens",
    responses(
        (status = 200, body = RevokeTokenResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer_token" = [])),
)]
pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RevokeTokenResponse>, ApiError> {
    require_gateway_credentials(&headers, &state.priora_config)?;

    let access_token = extract_bearer_token(&headers)
        .ok_or_else(|| ApiError::unauthorized("InvalidToken", "Missing bearer access token"))?;

    let token = state.token_service.revoke(&access_token).await?;

    Ok(Json(RevokeTokenResponse {
        success: true,
        message: "Access token revoked".to_string(),
        session_secret: token.session_secret,
    }))
}
