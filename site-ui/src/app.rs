//! App Root Component
//!
//! Provides the page state and starts the one-time data load.

use leptos::*;

use crate::api;
use crate::pages::Home;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Load once on mount; the loading flag drops whatever the outcome
    create_effect(move |previous: Option<()>| {
        if previous.is_some() {
            return;
        }
        let state = state.clone();
        spawn_local(async move {
            let site = api::load_site().await;
            state.site.set(site);
        });
    });

    view! { <Home /> }
}
