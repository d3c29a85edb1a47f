//! Scene Canvas
//!
//! Mount point for the helix background. Owns the [`SceneRenderer`] for as
//! long as the component lives: every state change is synced into it and
//! unmounting disposes it, which stops the frame loop, removes the resize
//! listener and the canvas.

use std::cell::RefCell;
use std::rc::Rc;

use dois_de_muitos::render::SCENE_MOUNT_ID;
use dois_de_muitos::scene::{ScenePhase, SceneParams, SceneRenderer};
use leptos::*;

use crate::scene::BrowserHost;
use crate::state::GlobalState;

type SharedRenderer = Rc<RefCell<SceneRenderer<BrowserHost>>>;

#[component]
pub fn SceneCanvas() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let renderer: SharedRenderer = Rc::new(RefCell::new(SceneRenderer::new(
        BrowserHost::new(SCENE_MOUNT_ID),
        SceneParams::default(),
    )));

    let for_effect = Rc::clone(&renderer);
    create_effect(move |_| {
        let site = state.site.get();
        for_effect.borrow_mut().sync(&site);

        // The mount div may not be attached yet on the first run
        if !site.is_loading() && for_effect.borrow().phase() == ScenePhase::Uninitialized {
            let retry = Rc::clone(&for_effect);
            request_animation_frame(move || retry.borrow_mut().sync(&site));
        }
    });

    on_cleanup(move || renderer.borrow_mut().dispose());

    view! { <div id=SCENE_MOUNT_ID class="absolute inset-0" /> }
}
