//! Page components for the admin dashboard

pub mod dashboard;
pub mod gallery;
pub mod login;
pub mod menu;
pub mod not_found;
pub mod offers;
pub mod settings;

use crate::state::ViewScope;
use leptos::prelude::on_cleanup;

/// A load scope that is cancelled when the calling view unmounts
pub(crate) fn mount_scope() -> ViewScope {
    let scope = ViewScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });
    scope
}
