//! Menu image gallery page

use super::mount_scope;
use crate::components::{Loading, NoticeBanner};
use crate::context::use_admin;
use crate::platform;
use crate::state::gallery::{self, GalleryState, NOTICE_TTL_MS};
use crate::state::{StateCell, ViewScope};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;
use visconti_core::{ImageId, MenuImage};

/// Take the notice behind `ticket` down once it has been visible long enough
async fn expire_later(state: RwSignal<GalleryState>, ticket: Option<u64>) {
    if let Some(ticket) = ticket {
        TimeoutFuture::new(NOTICE_TTL_MS).await;
        state.with_state(|s| s.expire_notice(ticket));
    }
}

/// Gallery page component
#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_admin();
    let strings = ctx.strings;
    let state = RwSignal::new(GalleryState::default());
    let scope = mount_scope();

    let api = ctx.api();
    let load_scope = scope.clone();
    spawn_local(async move {
        gallery::load(&state, api.as_ref(), &load_scope).await;
    });

    let scope = StoredValue::new(scope);
    let on_delete = Callback::new(move |id: ImageId| {
        let api = ctx.api();
        let scope: ViewScope = scope.get_value();
        spawn_local(async move {
            let ticket = gallery::delete(
                &state,
                api.as_ref(),
                &platform::confirm,
                strings.confirm_delete_image,
                id,
                &scope,
            )
            .await;
            expire_later(state, ticket).await;
        });
    });
    let on_upload = move |_| {
        let api = ctx.api();
        let scope: ViewScope = scope.get_value();
        spawn_local(async move {
            let ticket = gallery::upload(&state, api.as_ref(), &scope).await;
            expire_later(state, ticket).await;
        });
    };
    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = platform::selected_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match platform::read_file(file).await {
                Ok(pending) => {
                    state.update(|s| {
                        s.select_file(pending);
                    });
                }
                Err(e) => error!(error = %e, "failed to read selected image"),
            }
        });
    };

    view! {
        <section class="gallery">
            <header class="section-header">
                <h2>{strings.gallery_title}</h2>
                <p>{strings.gallery_intro}</p>
            </header>

            <NoticeBanner notice=Signal::derive(move || state.with(|s| s.notice.clone())) />

            <div class="card upload-card">
                <h3>{strings.upload_new_image}</h3>
                {move || match state.with(|s| s.preview.clone()) {
                    Some(src) => view! {
                        <div class="upload-preview">
                            <img src=src alt=strings.preview />
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| state.update(GalleryState::clear_selection)
                            >
                                {strings.remove}
                            </button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <label class="dropzone">
                            <p>{strings.drag_or_click}</p>
                            <span class="btn btn-secondary">{strings.select_image}</span>
                            <input type="file" accept="image/*" hidden on:change=on_file />
                        </label>
                    }
                    .into_any(),
                }}
                <button
                    class="btn btn-primary"
                    disabled=move || state.with(|s| s.uploading)
                    on:click=on_upload
                >
                    {move || if state.with(|s| s.uploading) { strings.uploading } else { strings.upload_image }}
                </button>
            </div>

            <div class="card">
                <h3>
                    {strings.uploaded_images} " (" {move || state.with(|s| s.images.len())} ")"
                </h3>
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=move || view! { <Loading message=strings.loading /> }
                >
                    <Show
                        when=move || state.with(|s| !s.images.is_empty())
                        fallback=move || view! {
                            <div class="empty-state">
                                <p>{strings.no_images}</p>
                                <p>{strings.no_images_hint}</p>
                            </div>
                        }
                    >
                        <div class="image-grid">
                            {move || {
                                state
                                    .with(|s| s.images.clone())
                                    .into_iter()
                                    .map(|image| {
                                        let busy = Signal::derive({
                                            let id = image.id.clone();
                                            move || state.with(|s| s.deleting.as_ref() == Some(&id))
                                        });
                                        view! { <ImageCard image=image busy=busy on_delete=on_delete /> }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </section>
    }
}

/// One stored image
#[component]
fn ImageCard(
    image: MenuImage,
    /// Delete of this image in flight
    busy: Signal<bool>,
    on_delete: Callback<ImageId>,
) -> impl IntoView {
    let strings = use_admin().strings;
    let id = image.id.clone();

    view! {
        <figure class="image-card">
            <img src=image.image_url.clone() alt=strings.nav_menu_images />
            <figcaption>
                <span class="uploaded-on">{strings.uploaded_on} " " {image.uploaded_label()}</span>
                <button
                    class="btn btn-danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_delete.run(id.clone())
                >
                    {move || if busy.get() { "…" } else { strings.delete }}
                </button>
            </figcaption>
        </figure>
    }
}
