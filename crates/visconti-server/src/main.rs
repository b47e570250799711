//! Static host for the Visconti admin dashboard
#![forbid(unsafe_code)]

use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};
use visconti_core::Config;
use visconti_server::build_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    visconti_core::init_logging(&config.logging)?;
    if let Some(e) = load_error {
        warn!(error = %e, "failed to load config, using defaults");
    }

    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| format!("invalid server host '{}': {e}", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);

    info!(
        %addr,
        assets = %config.server.assets_dir.display(),
        api = %config.api.base_url,
        "starting Visconti admin host"
    );

    let app = build_app(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
