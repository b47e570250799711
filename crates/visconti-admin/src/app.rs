//! Main Leptos application component with routing

use crate::components::AdminLayout;
use crate::context::{AdminContext, provide_admin_context};
use crate::pages::{
    dashboard::DashboardPage, gallery::GalleryPage, login::LoginPage, menu::MenuPage,
    not_found::NotFound, offers::OffersPage, settings::SettingsPage,
};
use crate::state::session::HOME_PATH;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Main application component
#[component]
pub fn App(
    /// Handles shared by every view
    context: AdminContext,
) -> impl IntoView {
    provide_admin_context(context);

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                <Route path=path!("/admin/login") view=LoginPage />
                <ParentRoute path=path!("/admin") view=AdminLayout>
                    <Route path=path!("") view=|| view! { <Redirect path=HOME_PATH /> } />
                    <Route path=path!("dashboard") view=DashboardPage />
                    <Route path=path!("menu") view=MenuPage />
                    <Route path=path!("offer") view=OffersPage />
                    <Route path=path!("settings") view=SettingsPage />
                    <Route path=path!("menu-img") view=GalleryPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
