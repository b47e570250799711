//! REST client for the Visconti restaurant backend
//!
//! [`AdminApi`] is the seam the dashboard views depend on. [`ApiClient`]
//! implements it over HTTP; with the `mock` feature, [`MockAdminApi`] provides
//! an in-memory backend for tests.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api;
pub mod client;
pub mod error;

#[cfg(feature = "mock")]
pub mod mock;

pub use api::{AdminApi, MenuItemForm};
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};

#[cfg(feature = "mock")]
pub use mock::{Call, MockAdminApi, Operation};
