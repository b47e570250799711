//! Web server setup

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use visconti_core::Config;

/// Build the complete application: endpoints first, then files from the
/// bundle directory, then `index.html` for client-side routes
pub fn build_app(config: Config) -> Router {
    let assets = config.server.assets_dir.clone();
    let index = ServeFile::new(assets.join("index.html"));
    let state = Arc::new(AppState::new(config));

    build_routes()
        .fallback_service(ServeDir::new(assets).fallback(index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
