// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use priora_connector::app::{create_router, AppState, VERSION};
use priora_connector::services::auth::AuthService;
use priora_connector::services::callbacks::CallbackClient;
use priora_connector::services::config::{PrioraConfig, SessionConfig};
use priora_connector::services::provider::DemoProvider;
use priora_connector::services::store::ConnectorStore;
use priora_connector::services::tokens::TokenService;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let priora_config = Arc::new(PrioraConfig::from_env()?);
    let session_config = SessionConfig::from_env()?;

    let port = env::var("CONNECTOR_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .context("CONNECTOR_PORT must be a valid port number")?;

    let store = Arc::new(ConnectorStore::new());
    let provider = Arc::new(DemoProvider::seeded());

    // Gateway callbacks are opt-in; without them token outcomes are only
    // visible through the API responses.
    let callbacks_enabled = env::var("PRIORA_CALLBACKS_ENABLED")
        .map(|v| v == "true")
        .unwrap_or(false);
    let callbacks = callbacks_enabled.then(|| Arc::new(CallbackClient::new(&priora_config)));
    if callbacks.is_none() {
        tracing::info!("gateway session callbacks disabled");
    }

    let token_service = Arc::new(TokenService::new(
        store.clone(),
        provider.clone(),
        callbacks,
    ));

    let auth_service = Arc::new(AuthService::new(store.clone(), session_config));
    auth_service.seed_admin().await;

    let state = AppState {
        store,
        token_service,
        auth_service,
        provider,
        priora_config: priora_config.clone(),
    };

    let app = create_router(state);

    // Bind to 0.0.0.0 to accept connections from any network interface (required for Docker)
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        "priora-connector v{} listening on {} (host {})",
        VERSION,
        addr,
        priora_config.connector_host
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
