//! Configuration management for the Visconti admin dashboard

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// User interface configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Static host configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every API path is joined to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// User interface configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language of every user-facing string
    #[serde(default)]
    pub locale: Locale,
}

/// Static host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled dashboard bundle
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Settings the browser application needs at startup
///
/// Served as `/config.json` by the static host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the backend REST API
    pub api_base_url: String,

    /// Active string table
    #[serde(default)]
    pub locale: Locale,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:5000/".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from an optional `visconti` file and `VISCONTI_*`
    /// environment variables
    ///
    /// Nested keys use a double underscore, e.g. `VISCONTI_API__BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("visconti").required(false))
            .add_source(
                config::Environment::with_prefix("VISCONTI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The subset of settings handed to the browser application
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api.base_url.clone(),
            locale: self.ui.locale,
        }
    }
}

impl ClientConfig {
    /// Settings captured at compile time, used when no runtime document is
    /// reachable
    pub fn build_defaults() -> Self {
        let api_base_url = option_env!("VISCONTI_API_BASE_URL")
            .map_or_else(default_base_url, ToString::to_string);
        let locale = option_env!("VISCONTI_LOCALE")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        Self {
            api_base_url,
            locale,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Config::default().client_config()
    }
}
