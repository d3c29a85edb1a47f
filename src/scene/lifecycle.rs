//! Scene Lifecycle
//!
//! Binds a [`Scene`] to a host (surface, frame clock, resize events) and
//! drives it through `uninitialized → active → disposed`.
//!
//! Everything acquired on activation lives in an [`ActiveScene`]; dropping
//! it unregisters the resize handler, cancels the frame loop and releases
//! the surface, so every deactivation path cleans up the same way.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::camera::{PerspectiveCamera, Viewport};
use super::helix::{artifacts_from_events, Artifact};
use super::model::{Scene, SceneFrame};
use super::params::SceneParams;
use crate::state::SiteState;

/// Stops a registered callback when cancelled or dropped.
///
/// After cancellation the host must never invoke the callback again.
#[must_use = "dropping the handle cancels the callback immediately"]
pub struct CancelHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

/// Handle to a repeating per-frame callback
pub type FrameLoopHandle = CancelHandle;

/// Handle to a registered event listener
pub type ListenerHandle = CancelHandle;

impl CancelHandle {
    /// Wrap the host's cancellation routine
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Cancel now
    pub fn cancel(mut self) {
        self.run();
    }

    /// Whether cancellation is still pending
    pub fn is_armed(&self) -> bool {
        self.cancel.is_some()
    }

    fn run(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelHandle")
            .field("armed", &self.is_armed())
            .finish()
    }
}

/// Something a scene can be drawn into (a canvas, a GPU context)
pub trait RenderSurface {
    /// Resize the output
    fn set_size(&mut self, viewport: Viewport);

    /// Paint one frame
    fn draw(&mut self, frame: &SceneFrame);

    /// Dispose drawing resources and detach from the mount point
    fn release(&mut self);
}

/// Environment a scene runs in
pub trait SceneHost {
    type Surface: RenderSurface + 'static;

    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Create and mount a surface; `None` when no mount point is available
    fn create_surface(&self, viewport: Viewport) -> Option<Self::Surface>;

    /// Invoke `frame` once per display frame until the handle is cancelled
    fn schedule_frames(&self, frame: Box<dyn FnMut()>) -> FrameLoopHandle;

    /// Invoke `handler` on every viewport resize until the handle is cancelled
    fn on_resize(&self, handler: Box<dyn FnMut(Viewport)>) -> ListenerHandle;

    /// Seed for the starfield when the params don't fix one
    fn random_seed(&self) -> u64;
}

/// State shared by the frame and resize callbacks
struct SceneRuntime<S> {
    scene: Scene,
    camera: PerspectiveCamera,
    viewport: Viewport,
    surface: S,
}

impl<S: RenderSurface> SceneRuntime<S> {
    fn render_frame(&mut self) {
        self.scene.advance();
        let frame = self.scene.frame(&self.camera, self.viewport);
        self.surface.draw(&frame);
    }

    fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.camera.set_viewport(viewport);
        self.surface.set_size(viewport);
    }
}

/// Resources held while a scene is running
pub struct ActiveScene<S: RenderSurface> {
    runtime: Rc<RefCell<SceneRuntime<S>>>,
    resize: Option<ListenerHandle>,
    frames: Option<FrameLoopHandle>,
}

impl<S: RenderSurface + 'static> ActiveScene<S> {
    /// Acquire a surface, the frame loop and the resize listener
    fn start<H: SceneHost<Surface = S>>(
        host: &H,
        params: &SceneParams,
        artifacts: &[Artifact],
    ) -> Option<Self> {
        let viewport = host.viewport();
        let mut surface = host.create_surface(viewport)?;
        surface.set_size(viewport);

        let seed = params.seed.unwrap_or_else(|| host.random_seed());
        let scene = Scene::build(params, artifacts, &mut StdRng::seed_from_u64(seed));
        let camera = PerspectiveCamera::new(params, viewport);

        let runtime = Rc::new(RefCell::new(SceneRuntime {
            scene,
            camera,
            viewport,
            surface,
        }));

        let frames = host.schedule_frames(Box::new(frame_callback(Rc::downgrade(&runtime))));
        let resize = host.on_resize(Box::new(resize_callback(Rc::downgrade(&runtime))));

        Some(Self {
            runtime,
            resize: Some(resize),
            frames: Some(frames),
        })
    }

    /// Read the running scene, camera and surface
    pub fn inspect<R>(&self, f: impl FnOnce(&Scene, &PerspectiveCamera, &S) -> R) -> R {
        let runtime = self.runtime.borrow();
        f(&runtime.scene, &runtime.camera, &runtime.surface)
    }

    /// Viewport the scene currently renders at
    pub fn viewport(&self) -> Viewport {
        self.runtime.borrow().viewport
    }
}

impl<S: RenderSurface> Drop for ActiveScene<S> {
    fn drop(&mut self) {
        // Order matters: no callback may observe a released surface
        drop(self.resize.take());
        drop(self.frames.take());
        if let Ok(mut runtime) = self.runtime.try_borrow_mut() {
            runtime.surface.release();
        }
    }
}

fn frame_callback<S: RenderSurface>(runtime: Weak<RefCell<SceneRuntime<S>>>) -> impl FnMut() {
    move || {
        let Some(runtime) = runtime.upgrade() else {
            return;
        };
        if let Ok(mut runtime) = runtime.try_borrow_mut() {
            runtime.render_frame();
        };
    }
}

fn resize_callback<S: RenderSurface>(
    runtime: Weak<RefCell<SceneRuntime<S>>>,
) -> impl FnMut(Viewport) {
    move |viewport| {
        let Some(runtime) = runtime.upgrade() else {
            return;
        };
        if let Ok(mut runtime) = runtime.try_borrow_mut() {
            runtime.resize(viewport);
        };
    }
}

/// Lifecycle phase of the scene renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    Uninitialized,
    Active,
    Disposed,
}

/// Keeps the background scene in step with the page state
pub struct SceneRenderer<H: SceneHost> {
    host: H,
    params: SceneParams,
    phase: ScenePhase,
    active: Option<ActiveScene<H::Surface>>,
    /// Artifacts the active scene was built from
    source: Vec<Artifact>,
    activations: usize,
}

impl<H: SceneHost> SceneRenderer<H> {
    pub fn new(host: H, params: SceneParams) -> Self {
        Self {
            host,
            params,
            phase: ScenePhase::Uninitialized,
            active: None,
            source: Vec::new(),
            activations: 0,
        }
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Running scene, if any
    pub fn active(&self) -> Option<&ActiveScene<H::Surface>> {
        self.active.as_ref()
    }

    /// How many times a scene has been started
    pub fn activations(&self) -> usize {
        self.activations
    }

    /// Reconcile with the page state.
    ///
    /// Does nothing while loading or after disposal. Otherwise starts the
    /// scene, or rebuilds it when the artifact list changed.
    pub fn sync(&mut self, state: &SiteState) {
        if self.phase == ScenePhase::Disposed || state.is_loading() {
            return;
        }

        let artifacts = artifacts_from_events(&state.content().events, self.params.max_artifacts);
        if self.active.is_some() && artifacts == self.source {
            return;
        }

        // Tear the previous scene down before building the next one
        if self.active.take().is_some() {
            tracing::debug!("Artifact list changed, rebuilding scene");
        }

        match ActiveScene::start(&self.host, &self.params, &artifacts) {
            Some(active) => {
                let markers = active.inspect(|scene, _, _| scene.markers.len());
                tracing::info!(
                    artifacts = artifacts.len(),
                    markers,
                    "Scene activated"
                );
                self.active = Some(active);
                self.source = artifacts;
                self.phase = ScenePhase::Active;
                self.activations += 1;
            }
            None => {
                tracing::debug!("No render surface available, scene stays idle");
                self.source.clear();
                if self.phase == ScenePhase::Active {
                    self.phase = ScenePhase::Uninitialized;
                }
            }
        }
    }

    /// Unmount: release everything; later syncs are ignored
    pub fn dispose(&mut self) {
        if self.phase == ScenePhase::Disposed {
            return;
        }
        self.active = None;
        self.source.clear();
        self.phase = ScenePhase::Disposed;
        tracing::debug!("Scene disposed");
    }
}

impl<H: SceneHost> Drop for SceneRenderer<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
