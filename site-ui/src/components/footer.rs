//! Footer

use dois_de_muitos::render::FOOTER_LINES;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/20 py-8 px-6 text-center text-gray-400">
            <p>{FOOTER_LINES[0]}</p>
            <p class="mt-2">{FOOTER_LINES[1]}</p>
        </footer>
    }
}
