//! Dashboard page with headline metrics

use super::mount_scope;
use crate::context::use_admin;
use crate::state::dashboard::{self, DashboardState};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Main dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_admin();
    let strings = ctx.strings;
    let state = RwSignal::new(DashboardState::default());
    let scope = mount_scope();

    let api = ctx.api();
    spawn_local(async move {
        dashboard::load(&state, api.as_ref(), &scope).await;
    });

    let menu_items = move || {
        if state.with(|s| s.loading) {
            strings.loading.to_string()
        } else {
            state.with(DashboardState::menu_items_display).to_string()
        }
    };

    view! {
        <div class="dashboard">
            <div class="dashboard-grid">
                <StatCard title=strings.stat_orders_today>{strings.coming_soon}</StatCard>
                <StatCard title=strings.stat_revenue_today>{strings.coming_soon}</StatCard>
                <StatCard title=strings.stat_menu_items>{menu_items}</StatCard>
                <StatCard title=strings.stat_active_orders>{strings.coming_soon}</StatCard>
            </div>
        </div>
    }
}

/// One metric tile
#[component]
fn StatCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-card">
            <h3>{title}</h3>
            <p class="stat-value">{children()}</p>
        </div>
    }
}
