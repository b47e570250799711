//! Admin layout: session guard, sidebars, top bar and page outlet

use crate::context::use_admin;
use crate::state::navigation::{NAV_ENTRIES, ShellState, page_title};
use crate::state::session::{GuardDecision, Session};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

/// Layout wrapping every protected route
///
/// Nothing below it renders until the session holds a token; without one the
/// guard navigates to the login view.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let ctx = use_admin();
    let navigate = use_navigate();
    let shell = RwSignal::new(ShellState::default());

    Effect::new(move |_| {
        if let GuardDecision::Redirect(path) = ctx.session.with(Session::guard) {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <Show when=move || ctx.session.with(Session::is_authenticated)>
            <div class="admin-layout">
                <DesktopSidebar shell=shell />
                <MobileSidebar shell=shell />
                <div class="admin-main">
                    <TopBar shell=shell />
                    <main class="admin-content">
                        <Outlet />
                    </main>
                </div>
            </div>
        </Show>
    }
}

/// Destination links shared by both sidebars
#[component]
fn NavLinks(
    /// Called after a destination is chosen
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let strings = use_admin().strings;
    let location = use_location();

    NAV_ENTRIES
        .iter()
        .map(|entry| {
            let href = entry.href;
            let is_active = move || location.pathname.with(|path| entry.is_active(path));
            view! {
                <li>
                    <A href=href>
                        <span
                            class="nav-link"
                            class:active=is_active
                            on:click=move |_| {
                                if let Some(callback) = on_navigate {
                                    callback.run(());
                                }
                            }
                        >
                            <span class="nav-icon">{entry.icon}</span>
                            <span class="nav-label">{entry.label(strings)}</span>
                        </span>
                    </A>
                </li>
            }
        })
        .collect_view()
}

/// Logout button shared by both sidebars
#[component]
fn LogoutButton() -> impl IntoView {
    let ctx = use_admin();
    let navigate = use_navigate();

    view! {
        <button
            class="logout-btn"
            on:click=move |_| {
                let path = ctx.logout();
                navigate(path, NavigateOptions::default());
            }
        >
            <span class="nav-icon">"⎋"</span>
            <span class="nav-label">{ctx.strings.logout}</span>
        </button>
    }
}

/// Persistent sidebar for wide screens
#[component]
fn DesktopSidebar(shell: RwSignal<ShellState>) -> impl IntoView {
    let strings = use_admin().strings;

    view! {
        <aside
            class="sidebar sidebar-desktop"
            class:collapsed=move || !shell.with(|s| s.sidebar_expanded)
        >
            <div class="sidebar-header">
                <span class="brand">{strings.app_title}</span>
                <button
                    class="sidebar-toggle"
                    aria-label=strings.toggle_sidebar
                    on:click=move |_| shell.update(ShellState::toggle_sidebar)
                >
                    {move || if shell.with(|s| s.sidebar_expanded) { "«" } else { "»" }}
                </button>
            </div>
            <ul class="nav-list">
                <NavLinks />
            </ul>
            <LogoutButton />
        </aside>
    }
}

/// Overlay sidebar for narrow screens
#[component]
fn MobileSidebar(shell: RwSignal<ShellState>) -> impl IntoView {
    let strings = use_admin().strings;
    let close = Callback::new(move |()| shell.update(ShellState::close_mobile));

    view! {
        <Show when=move || shell.with(|s| s.mobile_open)>
            <div class="sidebar-backdrop" on:click=move |_| close.run(())></div>
            <aside class="sidebar sidebar-mobile">
                <div class="sidebar-header">
                    <span class="brand">{strings.app_title}</span>
                    <button
                        class="sidebar-close"
                        aria-label=strings.close_navigation
                        on:click=move |_| close.run(())
                    >
                        "×"
                    </button>
                </div>
                <ul class="nav-list">
                    <NavLinks on_navigate=close />
                </ul>
                <LogoutButton />
            </aside>
        </Show>
    }
}

/// Header with the page title
#[component]
fn TopBar(shell: RwSignal<ShellState>) -> impl IntoView {
    let strings = use_admin().strings;
    let location = use_location();
    let title = move || location.pathname.with(|path| page_title(path, strings));

    view! {
        <header class="top-bar">
            <button
                class="mobile-menu-btn"
                aria-label=strings.open_navigation
                on:click=move |_| shell.update(ShellState::open_mobile)
            >
                "☰"
            </button>
            <h1 class="page-title">{title}</h1>
            <span class="welcome">{strings.welcome}</span>
        </header>
    }
}
