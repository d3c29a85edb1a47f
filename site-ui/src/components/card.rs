//! Card Parts
//!
//! Labelled fields and outbound link buttons shared by the cards.

use dois_de_muitos::render::{Field, LinkButton, LinkKind};
use leptos::*;

/// Button colors per link kind
pub fn link_class(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Listen => "text-xs bg-blue-600 hover:bg-blue-700 px-3 py-1 rounded",
        LinkKind::Download => "text-xs bg-green-600 hover:bg-green-700 px-3 py-1 rounded",
        LinkKind::Project => "text-xs bg-orange-600 hover:bg-orange-700 px-3 py-1 rounded",
    }
}

#[component]
pub fn FieldList(fields: Vec<Field>) -> impl IntoView {
    view! {
        <div class="text-xs text-gray-400 space-y-1">
            {fields
                .into_iter()
                .map(|f| {
                    view! {
                        <p>
                            <span class="font-semibold">{f.label}":"</span>
                            " "
                            {f.value}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Opens in a new tab
#[component]
pub fn LinkButtonView(link: LinkButton) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class=link_class(link.kind)
        >
            {link.kind.label()}
        </a>
    }
}
