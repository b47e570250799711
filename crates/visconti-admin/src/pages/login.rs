//! Placeholder login: stores whatever token is entered

use crate::context::use_admin;
use crate::state::session::HOME_PATH;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tracing::warn;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_admin();
    let strings = ctx.strings;
    let navigate = use_navigate();
    let token = RwSignal::new(String::new());
    let rejected = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entered = token.get_untracked();
        match ctx.session.try_update(|session| session.login(&entered)) {
            Some(Ok(())) => {
                rejected.set(false);
                navigate(
                    HOME_PATH,
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                );
            }
            Some(Err(e)) => {
                warn!(error = %e, "login refused");
                rejected.set(true);
            }
            None => {}
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>{strings.login_title}</h1>
                <label for="admin-token">{strings.login_token_label}</label>
                <input
                    id="admin-token"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || token.get()
                    on:input=move |ev| token.set(event_target_value(&ev))
                />
                <Show when=move || rejected.get()>
                    <p class="form-error">{strings.login_token_required}</p>
                </Show>
                <button type="submit" class="btn btn-primary">{strings.login_submit}</button>
            </form>
        </div>
    }
}
