//! Route definitions for the static host

use crate::{handlers::api, state::AppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Build the API part of the router; everything else falls through to the
/// bundle
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/config.json", get(api::client_config))
        .route("/health", get(api::health_check))
}
