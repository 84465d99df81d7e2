// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Dashboard session endpoints (sign-in / sign-out).

use crate::app::AppState;
use crate::models::error_report::ErrorResponse;
use crate::models::session::{MessageResponse, SignInRequest};
use crate::services::auth_middleware::{
    clear_session_cookie, create_session_cookie, extract_session_token, ApiError,
};
use axum::extract::State;
use axum::Json;
use tower_cookies::Cookies;

/// POST /users/sign_in - verify credentials and set the session cookie.
#[utoipa::path(
    post,
    path = "/users/sign_in",
    tag = "users",
    request_body = SignInRequest,
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let session_token = state
        .auth_service
        .sign_in(&payload.email, &payload.password)
        .await
        .map_err(|e| ApiError::internal(format!("sign-in failed: {e:#}")))?
        .ok_or_else(|| {
            ApiError::unauthorized("InvalidCredentials", "Invalid email or password")
        })?;

    cookies.add(create_session_cookie(
        &session_token,
        state.auth_service.session_max_age_days(),
    ));

    Ok(Json(MessageResponse {
        success: true,
        message: "Signed in successfully".to_string(),
    }))
}

/// DELETE /users/sign_out - invalidate the session and clear the cookie.
#[utoipa::path(
    delete,
    path = "/users/sign_out",
    tag = "users",
    responses((status = 200, body = MessageResponse)),
)]
pub async fn sign_out(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Json<MessageResponse>, ApiError> {
    if let Some(session_token) = extract_session_token(&cookies) {
        let _ = state.auth_service.sign_out(&session_token).await;
    }

    // Clear the cookie regardless
    cookies.remove(clear_session_cookie());

    Ok(Json(MessageResponse {
        success: true,
        message: "Signed out successfully".to_string(),
    }))
}
