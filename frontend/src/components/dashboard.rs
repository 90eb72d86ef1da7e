use leptos::*;
use leptos_meta::{Title, provide_meta_context};

use crate::snapshot::{
    format::DASHBOARD_TITLE,
    state::LoadState,
    view::{DashboardView, project},
};

#[cfg(target_arch = "wasm32")]
use crate::snapshot::loader::{LoaderConfig, load_snapshot};

use super::{
    header::DashboardHeader,
    notices::{AdvisoryPanel, DashboardFooter, LoadingIndicator, NoMatchesPanel},
    stock_card::CardGrid,
};

/// Top-level dashboard owning the session's [`LoadState`].
#[component]
pub fn Dashboard() -> impl IntoView {
    provide_meta_context();

    let load_state = create_rw_signal(LoadState::Pending);

    #[cfg(target_arch = "wasm32")]
    start_snapshot_load(load_state, LoaderConfig::default());

    let dashboard = create_memo(move |_| load_state.with(project));

    view! {
        <Title text=DASHBOARD_TITLE />
        {move || render_dashboard(dashboard.get())}
    }
}

fn render_dashboard(dashboard: DashboardView) -> View {
    match dashboard {
        DashboardView::Loading => view! { <LoadingIndicator /> }.into_view(),
        DashboardView::Unavailable { header } => view! {
            <div class="container">
                <DashboardHeader header=header />
                <AdvisoryPanel />
                <DashboardFooter />
            </div>
        }
        .into_view(),
        DashboardView::Empty { header } => view! {
            <div class="container">
                <DashboardHeader header=header />
                <NoMatchesPanel />
                <DashboardFooter />
            </div>
        }
        .into_view(),
        DashboardView::Populated { header, cards } => view! {
            <div class="container">
                <DashboardHeader header=header />
                <CardGrid cards=cards />
                <DashboardFooter />
            </div>
        }
        .into_view(),
    }
}

#[cfg(target_arch = "wasm32")]
fn start_snapshot_load(load_state: RwSignal<LoadState>, config: LoaderConfig) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = load_snapshot(&config).await;
        if load_state.try_update(|state| state.resolve(outcome)).is_none() {
            log::debug!("dashboard was torn down before the snapshot arrived");
        }
    });
}
