//! Browser Host
//!
//! [`SceneHost`] over `window`. The frame loop and the resize listener are
//! both returned as [`CancelHandle`]s; cancelling drops the JS closure so
//! nothing keeps firing after the scene is gone.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dois_de_muitos::scene::{
    CancelHandle, FrameLoopHandle, ListenerHandle, RenderSurface, SceneHost, Viewport,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::canvas::CanvasSurface;

/// Host bound to the element with id `mount_id`
#[derive(Debug, Clone)]
pub struct BrowserHost {
    mount_id: String,
}

impl BrowserHost {
    pub fn new(mount_id: &str) -> Self {
        Self {
            mount_id: mount_id.to_string(),
        }
    }
}

fn window_viewport(window: &Window) -> Viewport {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Viewport::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Option<i32> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

impl SceneHost for BrowserHost {
    type Surface = CanvasSurface;

    fn viewport(&self) -> Viewport {
        web_sys::window()
            .map(|w| window_viewport(&w))
            .unwrap_or(Viewport::new(0, 0))
    }

    fn create_surface(&self, viewport: Viewport) -> Option<CanvasSurface> {
        let document = web_sys::window()?.document()?;
        let mount = document.get_element_by_id(&self.mount_id)?;

        let mut surface = CanvasSurface::create(&document)?;
        mount.append_child(surface.element()).ok()?;
        surface.set_size(viewport);
        Some(surface)
    }

    fn schedule_frames(&self, mut frame: Box<dyn FnMut()>) -> FrameLoopHandle {
        let Some(window) = web_sys::window() else {
            return CancelHandle::noop();
        };

        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        // The closure re-requests itself through `callback`; cancelling takes
        // it out, which ends the loop and breaks the Rc cycle.
        let next = Rc::clone(&callback);
        let next_pending = Rc::clone(&pending);
        let loop_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            next_pending.set(None);
            frame();
            if let Some(cb) = next.borrow().as_ref() {
                next_pending.set(request_frame(&loop_window, cb));
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = callback.borrow().as_ref() {
            pending.set(request_frame(&window, cb));
        }

        CancelHandle::new(move || {
            if let Some(id) = pending.take() {
                let _ = window.cancel_animation_frame(id);
            }
            callback.borrow_mut().take();
        })
    }

    fn on_resize(&self, mut handler: Box<dyn FnMut(Viewport)>) -> ListenerHandle {
        let Some(window) = web_sys::window() else {
            return CancelHandle::noop();
        };

        let listener_window = window.clone();
        let listener = Closure::wrap(Box::new(move || {
            handler(window_viewport(&listener_window));
        }) as Box<dyn FnMut()>);

        if window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            .is_err()
        {
            return CancelHandle::noop();
        }

        CancelHandle::new(move || {
            let _ = window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            drop(listener);
        })
    }

    fn random_seed(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
