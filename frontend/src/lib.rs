//! Read-only dashboard for the daily Camarilla/CPR scan.
//!
//! The page fetches the scan's `data.json` once, keeps the outcome in a
//! [`LoadState`] and renders it through [`project`]. Everything except the
//! fetch itself runs natively, which is how the tests exercise it.

use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
pub mod constants;
mod logging;
pub mod snapshot;

pub use components::dashboard::Dashboard;
pub use logging::init_logging;
pub use snapshot::loader::{LoadError, LoaderConfig, load_snapshot, parse_snapshot};
pub use snapshot::state::LoadState;
pub use snapshot::types::{DailyLevels, DisplayValue, Entry, PivotRange, Snapshot};
pub use snapshot::view::{CardView, DashboardView, HeaderView, project};

/// Page root; the dashboard is the only thing on it.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-root">
            <Dashboard />
        </main>
    }
}

/// Browser entry point: console logging, panic hook, then mount.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
    init_logging();
    console_error_panic_hook::set_once();

    leptos::mount_to_body(|| view! { <App /> });
    Ok(())
}
