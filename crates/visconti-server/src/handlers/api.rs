//! Health and runtime configuration endpoints

// axum handlers are async even when they never await
#![allow(clippy::unused_async)]

use crate::state::AppState;
use axum::{Json, extract::State};
use std::sync::Arc;
use visconti_core::ClientConfig;

/// Liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}

/// Settings the dashboard fetches once at startup
pub async fn client_config(State(state): State<Arc<AppState>>) -> Json<ClientConfig> {
    Json(state.client_config.clone())
}
