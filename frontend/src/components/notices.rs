use leptos::*;

use crate::snapshot::format::{FOOTER_NOTE, NO_MATCHES_MESSAGE, UNAVAILABLE_MESSAGE};

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="container container--centered">
            <div class="loader" role="status" aria-label="Loading scan results"></div>
        </div>
    }
}

/// Shown when the snapshot could not be loaded, whatever the cause.
#[component]
pub fn AdvisoryPanel() -> impl IntoView {
    view! {
        <div class="card notice notice--unavailable" role="alert">
            <span class="notice__icon text-red">"!"</span>
            <p>{UNAVAILABLE_MESSAGE}</p>
        </div>
    }
}

#[component]
pub fn NoMatchesPanel() -> impl IntoView {
    view! {
        <div class="card notice notice--empty">
            <p class="text-secondary">{NO_MATCHES_MESSAGE}</p>
        </div>
    }
}

#[component]
pub fn DashboardFooter() -> impl IntoView {
    view! {
        <footer class="dashboard__footer">
            <p>{FOOTER_NOTE}</p>
        </footer>
    }
}
