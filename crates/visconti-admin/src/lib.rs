//! Visconti admin dashboard
//!
//! A client-side rendered Leptos application for managing the restaurant's
//! menu items, offer badges and printed-menu photos.
//!
//! View behavior lives in [`state`] as plain state machines driven through
//! the [`visconti_client::AdminApi`] trait, so it runs and tests without a
//! browser. [`pages`] and [`components`] render that state; [`platform`]
//! adapts browser APIs.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod app;
pub mod components;
pub mod context;
pub mod logging;
pub mod pages;
pub mod platform;
pub mod state;

pub use app::App;
pub use context::AdminContext;
