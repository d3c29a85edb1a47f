//! Home Page
//!
//! The whole site: scene with legend, NFT and project grids, the optional
//! donations section and the footer. Only the spinner shows while loading.

use dois_de_muitos::render::{LoadedPage, PageView, NFT_HEADING, PROJECT_HEADING};
use leptos::*;

use crate::components::{
    Donations, Footer, Legend, Loading, NftCardView, ProjectCardView, SceneCanvas,
};
use crate::state::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_memo(move |_| state.site.with(PageView::from_state));

    move || match page.get() {
        PageView::Loading => view! { <Loading /> }.into_view(),
        PageView::Loaded(loaded) => view! { <LoadedHome page=loaded /> }.into_view(),
    }
}

#[component]
fn LoadedHome(page: LoadedPage) -> impl IntoView {
    view! {
        <div class="bg-black text-white min-h-screen">
            <div class="w-full h-screen relative overflow-hidden">
                <SceneCanvas />
                <Legend entries=page.legend />
            </div>

            <div class="relative z-10 bg-gradient-to-b from-transparent via-black to-black">
                <section id="nfts" class="max-w-6xl mx-auto px-6 py-16">
                    <h2 class="text-4xl font-bold mb-8 text-center">{NFT_HEADING}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {page
                            .nfts
                            .into_iter()
                            .map(|card| view! { <NftCardView card=card /> })
                            .collect_view()}
                    </div>
                </section>

                <section id="projetos" class="max-w-6xl mx-auto px-6 py-16">
                    <h2 class="text-4xl font-bold mb-8 text-center">{PROJECT_HEADING}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {page
                            .projects
                            .into_iter()
                            .map(|card| view! { <ProjectCardView card=card /> })
                            .collect_view()}
                    </div>
                </section>

                {page.donations.map(|panel| view! { <Donations panel=panel /> })}

                <Footer />
            </div>
        </div>
    }
}
