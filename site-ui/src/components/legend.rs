//! Category Legend
//!
//! Overlay in the scene's top-right corner listing the six categories in
//! table order.

use dois_de_muitos::render::{LegendEntry, LEGEND_TITLE};
use leptos::*;

#[component]
pub fn Legend(entries: Vec<LegendEntry>) -> impl IntoView {
    view! {
        <aside class="absolute top-4 right-6 text-sm z-20 bg-black/70 p-4 rounded-xl border border-white/20 text-white">
            <h2 class="text-lg font-semibold mb-2">{LEGEND_TITLE}</h2>
            <ul class="space-y-1">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li data-category=entry.key>
                                <span
                                    class="inline-block w-3 h-3 rounded-full mr-2"
                                    style=format!("background-color: {}", entry.color)
                                />
                                <b>{entry.label}</b>
                                ": "
                                {entry.description}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
