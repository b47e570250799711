//! Browser adapters: token storage, confirmation prompts, file reading, and
//! runtime configuration

use crate::state::session::{CredentialStore, TOKEN_KEY};
use tracing::{info, warn};
use visconti_client::ApiClient;
use visconti_core::{ClientConfig, Error, PendingFile, Result};
use wasm_bindgen_futures::JsFuture;
use web_sys::Storage;

/// Token store backed by `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCredentialStore;

impl BrowserCredentialStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for BrowserCredentialStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn store(&self, token: &str) -> Result<()> {
        let storage =
            Self::storage().ok_or_else(|| Error::Other("localStorage is unavailable".into()))?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|e| Error::Other(format!("failed to persist token: {e:?}")))
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(TOKEN_KEY) {
            warn!(error = ?e, "failed to clear stored token");
        }
    }
}

/// Ask a yes/no question with `window.confirm`
pub fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

/// Read a selected file into memory
///
/// # Errors
///
/// Returns an error if the browser fails to read the file.
pub async fn read_file(file: web_sys::File) -> Result<PendingFile> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| Error::Other(format!("failed to read '{}': {e:?}", file.name())))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(PendingFile::new(file.name(), file.type_(), bytes))
}

/// First file chosen in the input that fired `event`
pub fn selected_file(event: &web_sys::Event) -> Option<web_sys::File> {
    let input = leptos::prelude::event_target::<web_sys::HtmlInputElement>(event);
    let file = input.files()?.get(0);
    // Let the same file be picked again
    input.set_value("");
    file
}

/// Fetch `/config.json` from the serving origin, falling back to the values
/// captured at build time
pub async fn load_client_config() -> ClientConfig {
    let Some(origin) = web_sys::window().and_then(|window| window.location().origin().ok()) else {
        return ClientConfig::build_defaults();
    };

    match ApiClient::fetch_client_config(&format!("{origin}/config.json")).await {
        Ok(config) => {
            info!(api = %config.api_base_url, locale = %config.locale, "runtime configuration loaded");
            config
        }
        Err(e) => {
            warn!(error = %e, "runtime configuration unavailable, using build defaults");
            ClientConfig::build_defaults()
        }
    }
}
