//! Browser entry point for the Visconti admin dashboard
#![forbid(unsafe_code)]

use leptos::prelude::*;
use std::rc::Rc;
use std::sync::Arc;
use tracing::info;
use visconti_admin::platform::{self, BrowserCredentialStore};
use visconti_admin::state::session::Session;
use visconti_admin::{AdminContext, App, logging};
use visconti_client::ApiClient;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_console_logging(option_env!("VISCONTI_LOG").unwrap_or("info"));

    wasm_bindgen_futures::spawn_local(async {
        let config = platform::load_client_config().await;
        info!(api = %config.api_base_url, locale = %config.locale, "starting admin dashboard");

        let api = Rc::new(ApiClient::new(config.api_base_url.clone()));
        let session = Session::from_store(Arc::new(BrowserCredentialStore));
        let context = AdminContext::new(api, config, session);

        mount_to_body(move || view! { <App context=context /> });
    });
}
