//! Loading Component

use dois_de_muitos::render::LOADING_MESSAGE;
use leptos::*;

/// Full-page loading spinner, the only thing shown until the load settles
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="w-full h-screen flex items-center justify-center bg-black">
            <div class="text-white text-center">
                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-white mx-auto mb-4" />
                <p>{LOADING_MESSAGE}</p>
            </div>
        </div>
    }
}
