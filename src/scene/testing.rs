//! In-memory scene host for lifecycle tests.
//!
//! Frames only advance when the test calls [`TestHost::tick`], and resize
//! events only fire through [`TestHost::resize`].

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::camera::Viewport;
use super::lifecycle::{CancelHandle, RenderSurface, SceneHost};
use super::model::SceneFrame;

/// What happened to one surface
#[derive(Debug, Clone)]
pub struct SurfaceLog {
    pub size: Viewport,
    pub resizes: usize,
    pub draws: usize,
    pub released: bool,
    pub last_frame: Option<SceneFrame>,
}

pub struct TestSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl TestSurface {
    pub fn size(&self) -> Viewport {
        self.log.borrow().size
    }
}

impl RenderSurface for TestSurface {
    fn set_size(&mut self, viewport: Viewport) {
        let mut log = self.log.borrow_mut();
        log.size = viewport;
        log.resizes += 1;
    }

    fn draw(&mut self, frame: &SceneFrame) {
        let mut log = self.log.borrow_mut();
        assert!(!log.released, "draw after release");
        log.draws += 1;
        log.last_frame = Some(frame.clone());
    }

    fn release(&mut self) {
        self.log.borrow_mut().released = true;
    }
}

type FrameFn = Box<dyn FnMut()>;
type ResizeFn = Box<dyn FnMut(Viewport)>;

#[derive(Default)]
struct Inner {
    viewport: Cell<Option<Viewport>>,
    mount_unavailable: Cell<bool>,
    next_id: Cell<usize>,
    frames: RefCell<BTreeMap<usize, FrameFn>>,
    resizes: RefCell<BTreeMap<usize, ResizeFn>>,
    surfaces: RefCell<Vec<Rc<RefCell<SurfaceLog>>>>,
}

impl Inner {
    fn next_id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

#[derive(Clone, Default)]
pub struct TestHost {
    inner: Rc<Inner>,
}

impl TestHost {
    pub fn new(width: u32, height: u32) -> Self {
        let host = Self::default();
        host.inner.viewport.set(Some(Viewport::new(width, height)));
        host
    }

    pub fn set_mount_available(&self, available: bool) {
        self.inner.mount_unavailable.set(!available);
    }

    /// Run every registered frame callback `n` times
    pub fn tick(&self, n: usize) {
        for _ in 0..n {
            let ids: Vec<usize> = self.inner.frames.borrow().keys().copied().collect();
            for id in ids {
                let callback = self.inner.frames.borrow_mut().remove(&id);
                if let Some(mut callback) = callback {
                    callback();
                    self.inner.frames.borrow_mut().insert(id, callback);
                }
            }
        }
    }

    /// Change the viewport and notify listeners
    pub fn resize(&self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        self.inner.viewport.set(Some(viewport));

        let ids: Vec<usize> = self.inner.resizes.borrow().keys().copied().collect();
        for id in ids {
            let handler = self.inner.resizes.borrow_mut().remove(&id);
            if let Some(mut handler) = handler {
                handler(viewport);
                self.inner.resizes.borrow_mut().insert(id, handler);
            }
        }
    }

    pub fn frame_callbacks(&self) -> usize {
        self.inner.frames.borrow().len()
    }

    pub fn resize_listeners(&self) -> usize {
        self.inner.resizes.borrow().len()
    }

    pub fn surfaces_created(&self) -> usize {
        self.inner.surfaces.borrow().len()
    }

    pub fn released_surfaces(&self) -> usize {
        self.inner
            .surfaces
            .borrow()
            .iter()
            .filter(|s| s.borrow().released)
            .count()
    }

    /// Snapshot of the `index`-th surface created
    pub fn surface(&self, index: usize) -> SurfaceLog {
        self.inner.surfaces.borrow()[index].borrow().clone()
    }
}

impl SceneHost for TestHost {
    type Surface = TestSurface;

    fn viewport(&self) -> Viewport {
        self.inner.viewport.get().unwrap_or(Viewport::new(0, 0))
    }

    fn create_surface(&self, viewport: Viewport) -> Option<TestSurface> {
        if self.inner.mount_unavailable.get() {
            return None;
        }
        let log = Rc::new(RefCell::new(SurfaceLog {
            size: viewport,
            resizes: 0,
            draws: 0,
            released: false,
            last_frame: None,
        }));
        self.inner.surfaces.borrow_mut().push(Rc::clone(&log));
        Some(TestSurface { log })
    }

    fn schedule_frames(&self, frame: Box<dyn FnMut()>) -> CancelHandle {
        let id = self.inner.next_id();
        self.inner.frames.borrow_mut().insert(id, frame);

        let inner = Rc::downgrade(&self.inner);
        CancelHandle::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.frames.borrow_mut().remove(&id);
            }
        })
    }

    fn on_resize(&self, handler: Box<dyn FnMut(Viewport)>) -> CancelHandle {
        let id = self.inner.next_id();
        self.inner.resizes.borrow_mut().insert(id, handler);

        let inner = Rc::downgrade(&self.inner);
        CancelHandle::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.resizes.borrow_mut().remove(&id);
            }
        })
    }

    fn random_seed(&self) -> u64 {
        0
    }
}
