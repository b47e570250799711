//! Offer badges: list, create, delete

use super::mount_scope;
use crate::components::Loading;
use crate::context::use_admin;
use crate::platform;
use crate::state::offers::{self, BadgeDraft, OffersState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use visconti_core::{BadgeId, OfferBadge};

/// Offer badges page component
#[component]
pub fn OffersPage() -> impl IntoView {
    let ctx = use_admin();
    let strings = ctx.strings;
    let state = RwSignal::new(OffersState::default());
    let scope = mount_scope();

    let api = ctx.api();
    spawn_local(async move {
        offers::load(&state, api.as_ref(), &scope).await;
    });

    let on_delete = Callback::new(move |id: BadgeId| {
        let api = ctx.api();
        spawn_local(async move {
            offers::delete(
                &state,
                api.as_ref(),
                &platform::confirm,
                strings.confirm_delete_badge,
                id,
            )
            .await;
        });
    });

    view! {
        <section class="offers">
            <BadgeForm state=state />

            <div class="card">
                <h2>{strings.offers_all_title}</h2>
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=move || view! { <Loading message=strings.loading_badges /> }
                >
                    <Show
                        when=move || state.with(|s| !s.badges.is_empty())
                        fallback=move || view! { <p class="empty-state">{strings.no_badges}</p> }
                    >
                        <div class="badge-grid">
                            {move || {
                                state
                                    .with(|s| s.badges.clone())
                                    .into_iter()
                                    .map(|badge| view! { <BadgeCard badge=badge on_delete=on_delete /> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </section>
    }
}

/// Form for a new badge
#[component]
fn BadgeForm(state: RwSignal<OffersState>) -> impl IntoView {
    let ctx = use_admin();
    let strings = ctx.strings;

    let read = move |f: fn(&BadgeDraft) -> String| state.with(|s| f(&s.draft));
    let write = move |f: &dyn Fn(&mut BadgeDraft)| state.update(|s| f(&mut s.draft));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        spawn_local(async move {
            offers::create(&state, api.as_ref()).await;
        });
    };

    view! {
        <form class="card badge-form" on:submit=on_submit>
            <h2>{strings.offers_new_title}</h2>
            <label>
                {strings.field_title}
                <input
                    type="text"
                    prop:value=move || read(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        write(&|d| d.title.clone_from(&value));
                    }
                />
            </label>
            <label>
                {strings.field_description}
                <textarea
                    prop:value=move || read(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        write(&|d| d.description.clone_from(&value));
                    }
                ></textarea>
            </label>
            <label>
                {strings.field_discount}
                <input
                    type="number"
                    min="0"
                    max="100"
                    prop:value=move || read(|d| d.discount.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        write(&|d| d.discount.clone_from(&value));
                    }
                />
            </label>
            <label>
                {strings.field_expiry_date}
                <input
                    type="date"
                    prop:value=move || read(|d| d.expiry_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        write(&|d| d.expiry_date.clone_from(&value));
                    }
                />
            </label>
            <Show when=move || state.with(|s| s.invalid)>
                <p class="form-error">{strings.badge_fields_required}</p>
            </Show>
            <button type="submit" class="btn btn-primary" disabled=move || state.with(|s| s.submitting)>
                {move || if state.with(|s| s.submitting) { strings.adding_badge } else { strings.add_badge }}
            </button>
        </form>
    }
}

/// One badge in the list
#[component]
fn BadgeCard(badge: OfferBadge, on_delete: Callback<BadgeId>) -> impl IntoView {
    let strings = use_admin().strings;
    let id = badge.id.clone();

    view! {
        <article class="badge-card" class:inactive=!badge.is_active>
            <h3>{badge.title.clone()}</h3>
            {badge
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .map(|d| view! { <p class="badge-description">{d}</p> })}
            <p class="badge-discount">{badge.discount.to_string()} {strings.percent_off}</p>
            <p class="badge-expiry">{strings.expires} " " {badge.expiry_date.to_string()}</p>
            <button class="btn btn-danger" on:click=move |_| on_delete.run(id.clone())>
                {strings.delete}
            </button>
        </article>
    }
}
