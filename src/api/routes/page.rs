//! Page Route
//!
//! - GET / - The site rendered from the current documents

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::render::{render_page, PageView};

/// GET /
///
/// Loads the documents on every request and renders the completed page.
/// Load failures are only logged; the page renders whatever the policy kept.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let site = state.site_state().await;
    Html(render_page(&PageView::from_state(&site)))
}
