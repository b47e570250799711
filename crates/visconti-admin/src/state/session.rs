//! Placeholder admin session
//!
//! Presence of a stored token is the only access check. There is no expiry
//! and no server-side validation.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;
use visconti_core::{Error, Result};

/// Storage key of the persisted token
pub const TOKEN_KEY: &str = "adminToken";

/// Route of the login view
pub const LOGIN_PATH: &str = "/admin/login";

/// Route shown after login
pub const HOME_PATH: &str = "/admin/dashboard";

/// Where the session token is persisted
pub trait CredentialStore: fmt::Debug {
    /// Read the stored token
    fn load(&self) -> Option<String>;

    /// Persist `token`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn store(&self, token: &str) -> Result<()>;

    /// Forget the stored token
    fn clear(&self);
}

/// Credential store kept in memory
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// A store that already holds `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Outcome of the guard check on a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the protected content
    Render,
    /// Navigate to the given path instead
    Redirect(&'static str),
}

/// The signed-in state of the dashboard
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore + Send + Sync>,
    token: Option<String>,
}

impl Session {
    /// Restore the session from whatever `store` holds
    pub fn from_store(store: Arc<dyn CredentialStore + Send + Sync>) -> Self {
        let token = store.load().filter(|token| !token.is_empty());
        Self { store, token }
    }

    /// Current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is present
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store `token` and mark the session signed in
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank token, or the store's error.
    pub fn login(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::validation("token", "access token is required"));
        }

        self.store.store(token)?;
        self.token = Some(token.to_string());
        info!("admin session started");
        Ok(())
    }

    /// Forget the token
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        info!("admin session ended");
    }

    /// Decide whether a protected view may render
    pub const fn guard(&self) -> GuardDecision {
        if self.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect(LOGIN_PATH)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_store_redirects() {
        let session = Session::from_store(Arc::new(MemoryCredentialStore::default()));
        assert!(!session.is_authenticated());
        assert_eq!(session.guard(), GuardDecision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_stored_token_renders() {
        let session = Session::from_store(Arc::new(MemoryCredentialStore::with_token("abc")));
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(session.guard(), GuardDecision::Render);
    }

    #[test]
    fn test_login_and_logout_write_through() {
        let store = Arc::new(MemoryCredentialStore::default());
        let mut session = Session::from_store(store.clone());

        assert!(session.login("   ").is_err());
        assert_eq!(store.load(), None);

        session.login(" secret ").unwrap();
        assert_eq!(store.load().as_deref(), Some("secret"));
        assert_eq!(session.guard(), GuardDecision::Render);

        session.logout();
        assert_eq!(store.load(), None);
        assert_eq!(session.guard(), GuardDecision::Redirect(LOGIN_PATH));
    }
}
