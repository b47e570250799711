//! Application context
//!
//! Shared handles provided once at the root through the Leptos context API.

use crate::state::session::{LOGIN_PATH, Session};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use std::fmt;
use std::rc::Rc;
use visconti_client::AdminApi;
use visconti_core::{ClientConfig, Strings};

/// App-wide handles
#[derive(Clone, Copy)]
pub struct AdminContext {
    api: StoredValue<SendWrapper<Rc<dyn AdminApi>>>,
    config: StoredValue<ClientConfig>,
    /// Text in the configured language
    pub strings: &'static Strings,
    /// Signed-in state
    pub session: RwSignal<Session>,
}

impl AdminContext {
    /// Bundle the backend, configuration and session
    pub fn new(api: Rc<dyn AdminApi>, config: ClientConfig, session: Session) -> Self {
        Self {
            strings: config.locale.strings(),
            api: StoredValue::new(SendWrapper::new(api)),
            config: StoredValue::new(config),
            session: RwSignal::new(session),
        }
    }

    /// Backend handle
    pub fn api(&self) -> Rc<dyn AdminApi> {
        self.api.with_value(|api| Rc::clone(api))
    }

    /// Active configuration
    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// End the session; returns the path to navigate to
    pub fn logout(&self) -> &'static str {
        self.session.update(Session::logout);
        LOGIN_PATH
    }
}

impl fmt::Debug for AdminContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminContext")
            .field("config", &self.config.get_value())
            .finish_non_exhaustive()
    }
}

/// Provide the context to every descendant
pub fn provide_admin_context(context: AdminContext) {
    provide_context(context);
}

/// The context provided at the root
pub fn use_admin() -> AdminContext {
    expect_context::<AdminContext>()
}
