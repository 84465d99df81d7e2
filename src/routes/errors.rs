// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Client error reporting endpoint of the gateway API.

use crate::app::AppState;
use crate::models::error_report::{ErrorReport, ErrorResponse, ReportErrorRequest};
use crate::models::session::MessageResponse;
use crate::services::auth_middleware::{require_gateway_credentials, ApiError};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

/// POST /api/priora/v2/errors - record an error observed by the gateway.
#[utoipa::path(
    post,
    path = "/api/priora/v2/errors",
    tag = "errors",
    request_body = ReportErrorRequest,
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ReportErrorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_gateway_credentials(&headers, &state.priora_config)?;

    tracing::warn!(
        "client error reported: class={}, message={}, request_id={:?}",
        payload.error_class,
        payload.error_message,
        payload.request_id
    );

    state
        .store
        .insert_error_report(ErrorReport {
            id: Uuid::new_v4(),
            error_class: payload.error_class,
            error_message: payload.error_message,
            request_id: payload.request_id,
            reported_at: Utc::now(),
        })
        .await;

    Ok(Json(MessageResponse {
        success: true,
        message: "Error report recorded".to_string(),
    }))
}
