//! Inline status banner for gallery notices

use crate::context::use_admin;
use crate::state::gallery::Notice;
use leptos::prelude::*;

/// Shows the current notice, styled as success or error
#[component]
pub fn NoticeBanner(
    /// Notice to show, if any
    #[prop(into)]
    notice: Signal<Option<Notice>>,
) -> impl IntoView {
    let strings = use_admin().strings;

    move || {
        notice.get().map(|notice| {
            let class = if notice.is_error() {
                "notice notice-error"
            } else {
                "notice notice-success"
            };
            view! { <div class=class role="status">{notice.text(strings)}</div> }
        })
    }
}
