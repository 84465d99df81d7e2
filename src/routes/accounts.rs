// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Payment account endpoints of the gateway API. All of them require a
//! bearer access token issued by the tokens endpoint.

use crate::app::AppState;
use crate::models::account::{AccountsResponse, TransactionsQuery, TransactionsResponse};
use crate::models::error_report::ErrorResponse;
use crate::models::token::Token;
use crate::services::auth_middleware::{extract_bearer_token, ApiError};
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

/// Resolve the bearer access token into an authorized token record.
pub(crate) async fn authorize_request(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Token, ApiError> {
    let access_token = extract_bearer_token(headers)
        .ok_or_else(|| ApiError::unauthorized("InvalidToken", "Missing bearer access token"))?;
    state.token_service.authorize(&access_token).await
}

/// GET /api/priora/v2/accounts - list payment accounts of the token's user.
#[utoipa::path(
    get,
    path = "/api/priora/v2/accounts",
    tag = "accounts",
    responses(
        (status = 200, body = AccountsResponse),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer_token" = [])),
)]
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AccountsResponse>, ApiError> {
    let token = authorize_request(&state, &headers).await?;
    let accounts = state.provider.accounts_of_user(&token.user_id)?;
    Ok(Json(AccountsResponse { data: accounts }))
}

/// GET /api/priora/v2/accounts/{id}/transactions - list transactions of one account.
#[utoipa::path(
    get,
    path = "/api/priora/v2/accounts/{id}/transactions",
    tag = "accounts",
    params(
        ("id" = String, Path, description = "Account id"),
        TransactionsQuery,
    ),
    responses(
        (status = 200, body = TransactionsResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer_token" = [])),
)]
pub async fn transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let token = authorize_request(&state, &headers).await?;
    let transactions = state.provider.transactions_of_account(
        &token.user_id,
        &id,
        query.from_date,
        query.to_date,
    )?;
    Ok(Json(TransactionsResponse { data: transactions }))
}
