//! Static host for the Visconti admin dashboard
//!
//! Serves the compiled browser bundle, the runtime configuration document the
//! bundle reads at startup, and a health probe.

#![forbid(unsafe_code)]

pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use server::build_app;
pub use state::AppState;
