//! Read-only view of the active configuration

use crate::context::use_admin;
use leptos::prelude::*;

/// Settings page component
#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_admin();
    let strings = ctx.strings;
    let config = ctx.config();

    view! {
        <section class="settings">
            <h2>{strings.settings_title}</h2>
            <dl class="settings-list">
                <dt>{strings.settings_api_base_url}</dt>
                <dd><code>{config.api_base_url}</code></dd>
                <dt>{strings.settings_locale}</dt>
                <dd>{config.locale.code()}</dd>
            </dl>
        </section>
    }
}
