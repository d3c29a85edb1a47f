//! Project Card

use dois_de_muitos::render::ProjectCard;
use leptos::*;

use super::card::{FieldList, LinkButtonView};

#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    view! {
        <div class="bg-white/5 border border-white/20 rounded-lg p-6 hover:border-white/40 transition">
            <div class="text-3xl mb-3">{card.emoji}</div>
            <h3 class="text-xl font-semibold mb-2">{card.title}</h3>
            <p class="text-sm text-gray-300 mb-4">{card.description}</p>
            <FieldList fields=card.fields />
            {card.link.map(|link| {
                view! {
                    <div class="flex gap-2 mt-4">
                        <LinkButtonView link=link />
                    </div>
                }
            })}
        </div>
    }
}
