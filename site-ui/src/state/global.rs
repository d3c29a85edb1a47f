//! Global Application State
//!
//! Reactive state management using Leptos signals.

use dois_de_muitos::SiteState;
use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Loaded documents plus the loading flag; replaced once by the loader
    pub site: RwSignal<SiteState>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        site: create_rw_signal(SiteState::new()),
    };

    provide_context(state);
}
