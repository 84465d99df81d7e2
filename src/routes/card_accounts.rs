// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Card account endpoints of the gateway API.

use crate::app::AppState;
use crate::models::account::{
    CardAccountsResponse, CardTransactionsResponse, TransactionsQuery,
};
use crate::models::error_report::ErrorResponse;
use crate::routes::accounts::authorize_request;
use crate::services::auth_middleware::ApiError;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

/// GET /api/priora/v2/card_accounts - list card accounts of the token's user.
#[utoipa::path(
    get,
    path = "/api/priora/v2/card_accounts",
    tag = "card_accounts",
    responses(
        (status = 200, body = CardAccountsResponse),
        (status = 401, body = ErrorResponse),
    ),
    security(("bearer_token" = [])),
)]
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CardAccountsResponse>, ApiError> {
    let token = authorize_request(&state, &headers).await?;
    let card_accounts = state.provider.card_accounts_of_user(&token.user_id)?;
    Ok(Json(CardAccountsResponse {
        data: card_accounts,
    }))
}

/// GET /api/priora/v2/card_accounts/{account_id}/transactions - list card
/// transactions. The `account_id` path segment is mandatory; without it no
/// route matches.
#[utoipa::path(
    get,
    path = "/api/priora/v2/card_accounts/{account_id}/transactions",
    tag = "card_accounts",
    params(
        ("account_id" = String, Path, description = "Card account id"),
        TransactionsQuery,
    ),
    responses(
        (status = 200, body = CardTransactionsResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
    ),
    security(("bearer_token" = [])),
)]
pub async fn transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(account_id): Path<String>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<CardTransactionsResponse>, ApiError> {
    let token = authorize_request(&state, &headers).await?;
    let transactions = state.provider.transactions_of_card_account(
        &token.user_id,
        &account_id,
        query.from_date,
        query.to_date,
    )?;
    Ok(Json(CardTransactionsResponse { data: transactions }))
}
