//! Loading component for displaying loading states

use leptos::prelude::*;

/// Loading spinner with a caption
#[component]
pub fn Loading(
    /// Caption under the spinner
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}
