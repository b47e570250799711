//! Previous/next controls over a [`Pager`]

use crate::context::use_admin;
use crate::state::pagination::Pager;
use leptos::prelude::*;

/// Pagination component
///
/// Renders nothing when everything fits on one page.
#[component]
pub fn Pagination(
    /// Cursor over the list
    #[prop(into)]
    pager: Signal<Pager>,
    /// Number of items being paged
    #[prop(into)]
    len: Signal<usize>,
    /// Go back one page
    on_prev: Callback<()>,
    /// Go forward one page
    on_next: Callback<()>,
) -> impl IntoView {
    let strings = use_admin().strings;
    let total_pages = move || Pager::total_pages(len.get());

    view! {
        <Show when=move || Pager::shows_controls(len.get())>
            <div class="pagination">
                <button
                    class="pagination-btn"
                    disabled=move || !pager.get().has_prev()
                    on:click=move |_| on_prev.run(())
                >
                    {strings.previous}
                </button>

                <span class="pagination-info">
                    {strings.page} " " {move || pager.get().page() + 1} " " {strings.of} " "
                    {total_pages}
                </span>

                <button
                    class="pagination-btn"
                    disabled=move || !pager.get().has_next(len.get())
                    on:click=move |_| on_next.run(())
                >
                    {strings.next}
                </button>
            </div>
        </Show>
    }
}
