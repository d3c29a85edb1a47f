//! NFT Card

use dois_de_muitos::render::NftCard;
use leptos::*;

use super::card::{FieldList, LinkButtonView};

/// One certified work: emoji, title, description, metadata and its links
#[component]
pub fn NftCardView(card: NftCard) -> impl IntoView {
    let links = (!card.links.is_empty()).then(|| {
        view! {
            <div class="flex gap-2 mt-4">
                {card
                    .links
                    .into_iter()
                    .map(|link| view! { <LinkButtonView link=link /> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="bg-white/5 border border-white/20 rounded-lg p-6 hover:border-white/40 transition">
            <div class="text-3xl mb-3">{card.emoji}</div>
            <h3 class="text-xl font-semibold mb-2">{card.title}</h3>
            <p class="text-sm text-gray-300 mb-4">{card.description}</p>
            <FieldList fields=card.fields />
            {links}
        </div>
    }
}
