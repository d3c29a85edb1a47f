//! Donations Section
//!
//! Totals grid and the list of actions, in document order. Only mounted
//! when the donation summary loaded.

use dois_de_muitos::render::{DonationPanel, ACTIONS_HEADING, DONATION_HEADING};
use leptos::*;

use super::card::FieldList;

#[component]
pub fn Donations(panel: DonationPanel) -> impl IntoView {
    view! {
        <section id="doacoes" class="max-w-6xl mx-auto px-6 py-16">
            <h2 class="text-4xl font-bold mb-8 text-center">{DONATION_HEADING}</h2>
            <div class="bg-white/5 border border-white/20 rounded-lg p-8 mb-8">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-8">
                    {panel
                        .stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div>
                                    <p class="text-sm text-gray-400">{stat.label}</p>
                                    <p class="text-2xl font-bold">{stat.value}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <h3 class="text-2xl font-semibold mb-4">{ACTIONS_HEADING}</h3>
                <div class="space-y-4">
                    {panel
                        .actions
                        .into_iter()
                        .map(|action| {
                            view! {
                                <div class="border-l-4 border-orange-500 pl-4">
                                    <h4 class="font-semibold mb-1">{action.title}</h4>
                                    <p class="text-sm text-gray-300 mb-2">{action.description}</p>
                                    <FieldList fields=action.fields />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
