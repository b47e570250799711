//! Menu management: filter, paginate, create, edit and delete items

use super::mount_scope;
use crate::components::{Loading, Pagination};
use crate::context::use_admin;
use crate::platform;
use crate::state::menu::{self, CategoryFilter, MenuDraft, MenuState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;
use visconti_core::{Category, MenuItem, MenuItemId};

/// Menu management page component
#[component]
pub fn MenuPage() -> impl IntoView {
    let ctx = use_admin();
    let strings = ctx.strings;
    let state = RwSignal::new(MenuState::default());
    let scope = mount_scope();

    let api = ctx.api();
    spawn_local(async move {
        menu::load(&state, api.as_ref(), &scope).await;
    });

    let on_edit = Callback::new(move |id: MenuItemId| {
        state.update(|s| {
            s.open_edit(&id);
        });
    });
    let on_delete = Callback::new(move |id: MenuItemId| {
        let api = ctx.api();
        spawn_local(async move {
            menu::delete(
                &state,
                api.as_ref(),
                &platform::confirm,
                strings.confirm_delete_item,
                id,
            )
            .await;
        });
    });

    let filtered_len = Signal::derive(move || state.with(MenuState::filtered_len));
    let pager = Signal::derive(move || state.with(|s| s.pager));

    view! {
        <section class="menu-management">
            <div class="section-header">
                <h2>{strings.menu_title}</h2>
                <div class="section-actions">
                    <CategorySelect
                        value=Signal::derive(move || state.with(|s| s.filter.value()))
                        include_all=true
                        on_change=Callback::new(move |value: String| {
                            state.update(|s| s.set_filter(CategoryFilter::from_value(&value)));
                        })
                    />
                    <button class="btn btn-primary" on:click=move |_| state.update(MenuState::open_new)>
                        {strings.add_item}
                    </button>
                </div>
            </div>

            <Show when=move || state.with(|s| s.draft.is_some())>
                <MenuItemFormPanel state=state />
            </Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=move || view! { <Loading message=strings.loading_menu /> }
            >
                <Show
                    when=move || state.with(MenuState::has_visible_items)
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>{strings.no_menu_items}</p>
                            <button class="btn btn-primary" on:click=move |_| state.update(MenuState::open_new)>
                                {strings.add_first_item}
                            </button>
                        </div>
                    }
                >
                    <div class="menu-grid">
                        {move || {
                            state
                                .with(MenuState::page_items)
                                .into_iter()
                                .map(|item| view! {
                                    <MenuItemCard item=item on_edit=on_edit on_delete=on_delete />
                                })
                                .collect_view()
                        }}
                    </div>
                    <Pagination
                        pager=pager
                        len=filtered_len
                        on_prev=Callback::new(move |()| state.update(MenuState::prev_page))
                        on_next=Callback::new(move |()| state.update(MenuState::next_page))
                    />
                </Show>
            </Show>
        </section>
    }
}

/// Category selector, optionally with an "all" entry
#[component]
fn CategorySelect(
    /// Selected wire value
    #[prop(into)]
    value: Signal<&'static str>,
    /// Offer the "all categories" option
    include_all: bool,
    /// Called with the chosen wire value
    on_change: Callback<String>,
) -> impl IntoView {
    let strings = use_admin().strings;

    view! {
        <select
            class="category-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {include_all.then(|| view! {
                <option value=CategoryFilter::ALL_VALUE>{strings.all_categories}</option>
            })}
            {Category::ALL
                .into_iter()
                .map(|category| view! {
                    <option value=category.as_str()>{category.label()}</option>
                })
                .collect_view()}
        </select>
    }
}

/// One item in the grid
#[component]
fn MenuItemCard(
    item: MenuItem,
    on_edit: Callback<MenuItemId>,
    on_delete: Callback<MenuItemId>,
) -> impl IntoView {
    let strings = use_admin().strings;
    let edit_id = item.id.clone();
    let delete_id = item.id.clone();

    view! {
        <article class="menu-card" class:unavailable=!item.available>
            {(!item.image.is_empty()).then(|| view! {
                <img class="menu-card-image" src=item.image.clone() alt=item.name.clone() />
            })}
            <div class="menu-card-body">
                <h3>{item.name.clone()}</h3>
                <p class="menu-card-description">{item.description.clone()}</p>
                <div class="menu-card-meta">
                    <span class="price">"£" {item.price.clone()}</span>
                    <span class="category-tag">{item.category.label()}</span>
                </div>
                <div class="menu-card-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_edit.run(edit_id.clone())>
                        {strings.edit}
                    </button>
                    <button class="btn btn-danger" on:click=move |_| on_delete.run(delete_id.clone())>
                        {strings.delete}
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Create/edit form with a live preview card
#[component]
fn MenuItemFormPanel(state: RwSignal<MenuState>) -> impl IntoView {
    let ctx = use_admin();
    let strings = ctx.strings;

    let read = move |f: fn(&MenuDraft) -> String| {
        state.with(|s| s.draft.as_ref().map(f).unwrap_or_default())
    };
    let is_edit = move || state.with(|s| s.draft.as_ref().is_some_and(MenuDraft::is_edit));
    let category = move || state.with(|s| s.draft.as_ref().map(|d| d.category).unwrap_or_default());
    let edit_draft = move |f: &dyn Fn(&mut MenuDraft)| {
        state.update(|s| {
            if let Some(draft) = s.draft.as_mut() {
                f(draft);
            }
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = platform::selected_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match platform::read_file(file).await {
                Ok(pending) => state.update(|s| s.select_image(pending)),
                Err(e) => error!(error = %e, "failed to read selected image"),
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        spawn_local(async move {
            menu::submit(&state, api.as_ref()).await;
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal menu-form" on:submit=on_submit>
                <h3>
                    {move || if is_edit() { strings.edit_item_title } else { strings.add_item_title }}
                </h3>

                <div class="menu-form-body">
                    <div class="menu-form-fields">
                        <label>
                            {strings.field_name}
                            <input
                                type="text"
                                required
                                placeholder=strings.placeholder_name
                                prop:value=move || read(|d| d.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_draft(&|d| d.name.clone_from(&value));
                                }
                            />
                        </label>
                        <label>
                            {strings.field_description}
                            <textarea
                                placeholder=strings.placeholder_description
                                prop:value=move || read(|d| d.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_draft(&|d| d.description.clone_from(&value));
                                }
                            ></textarea>
                        </label>
                        <label>
                            {strings.field_price}
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                required
                                prop:value=move || read(|d| d.price.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_draft(&|d| d.price.clone_from(&value));
                                }
                            />
                        </label>
                        <label>
                            {strings.field_category}
                            <CategorySelect
                                value=Signal::derive(move || category().as_str())
                                include_all=false
                                on_change=Callback::new(move |value: String| {
                                    if let Ok(category) = value.parse::<Category>() {
                                        edit_draft(&|d| d.category = category);
                                    }
                                })
                            />
                        </label>
                        <label class="file-picker">
                            {strings.field_image}
                            <input type="file" accept="image/*" on:change=on_file />
                            <span class="file-picker-hint">{strings.click_to_upload}</span>
                        </label>
                    </div>

                    <div class="menu-form-preview">
                        <h4>{strings.preview}</h4>
                        <article class="menu-card preview">
                            {move || {
                                state
                                    .with(|s| {
                                        s.draft
                                            .as_ref()
                                            .and_then(|d| d.image.preview().map(str::to_string))
                                    })
                                    .map(|src| view! { <img class="menu-card-image" src=src /> })
                            }}
                            <div class="menu-card-body">
                                <h3>
                                    {move || {
                                        let name = read(|d| d.name.clone());
                                        if name.is_empty() { strings.placeholder_name.to_string() } else { name }
                                    }}
                                </h3>
                                <p class="menu-card-description">
                                    {move || {
                                        let description = read(|d| d.description.clone());
                                        if description.is_empty() {
                                            strings.placeholder_description.to_string()
                                        } else {
                                            description
                                        }
                                    }}
                                </p>
                                <div class="menu-card-meta">
                                    <span class="price">{move || read(MenuDraft::price_label)}</span>
                                    <span class="category-tag">{move || category().label()}</span>
                                </div>
                            </div>
                        </article>
                    </div>
                </div>

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| state.update(MenuState::close_form)
                    >
                        {strings.cancel}
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || state.with(|s| s.submitting)
                    >
                        {move || if is_edit() { strings.save_existing_item } else { strings.save_new_item }}
                    </button>
                </div>
            </form>
        </div>
    }
}
