use leptos::*;

use crate::snapshot::{
    format::{DASHBOARD_SUBTITLE, DASHBOARD_TITLE, LAST_UPDATED_PREFIX},
    view::HeaderView,
};

#[component]
pub fn DashboardHeader(header: HeaderView) -> impl IntoView {
    let HeaderView {
        last_updated,
        scanned,
    } = header;

    view! {
        <header class="dashboard__header">
            <div>
                <h1>{DASHBOARD_TITLE}</h1>
                <p class="text-secondary text-sm">{DASHBOARD_SUBTITLE}</p>
            </div>
            <div class="card dashboard__status text-secondary text-sm">
                <span class="dashboard__updated">{LAST_UPDATED_PREFIX}{last_updated}</span>
                {scanned.map(|label| view! { <span class="dashboard__scanned">{label}</span> })}
            </div>
        </header>
    }
}
