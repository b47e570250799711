//! 404 Not Found page

use crate::context::use_admin;
use crate::state::session::HOME_PATH;
use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    let strings = use_admin().strings;

    view! {
        <div class="not-found">
            <h2>{strings.not_found_title}</h2>
            <p>{strings.not_found_body}</p>
            <A href=HOME_PATH attr:class="btn btn-primary">{strings.back_to_dashboard}</A>
        </div>
    }
}
