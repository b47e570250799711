//! Core types and configuration for the Visconti admin dashboard

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod locale;
pub mod types;
pub mod upload;

// Re-export commonly used types
pub use config::{ClientConfig, Config};
pub use error::{Error, Result};
pub use locale::{Locale, Strings};
pub use types::{
    BadgeId, Category, GroupedMenu, ImageId, MenuImage, MenuItem, MenuItemId, NewOfferBadge,
    OfferBadge,
};
pub use upload::{MAX_IMAGE_BYTES, PendingFile};

/// Initialize the logging system for native binaries
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if the level directive is invalid or a global subscriber
/// is already installed.
pub fn init_logging(logging: &config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| Error::configuration(format!("invalid log level: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed.map_err(|e| Error::configuration(format!("logging already initialized: {e}")))?;

    tracing::info!(level = %logging.level, format = %logging.format, "logging initialized");
    Ok(())
}
