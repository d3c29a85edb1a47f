//! Background Scene
//!
//! Decorative 3D background: a starfield and a double helix whose markers
//! are colored by the categories of the loaded events.
//!
//! The geometry and projection here are platform neutral. A host (the
//! browser canvas in `site-ui`, an in-memory host in tests) supplies the
//! surface, the frame clock and resize events through [`SceneHost`].
//!
//! - [`params`]: tunable constants
//! - [`helix`] / [`starfield`]: world-space geometry
//! - [`camera`]: perspective projection
//! - [`model`]: scene state and per-frame draw list
//! - [`lifecycle`]: activation, frame loop and teardown

pub mod camera;
pub mod helix;
pub mod lifecycle;
pub mod model;
pub mod params;
pub mod starfield;

#[cfg(test)]
pub(crate) mod testing;

pub use camera::{PerspectiveCamera, ScreenPoint, Viewport};
pub use helix::{artifacts_from_events, place_markers, Artifact, Helix, Marker};
pub use lifecycle::{
    ActiveScene, CancelHandle, FrameLoopHandle, ListenerHandle, RenderSurface, SceneHost,
    ScenePhase, SceneRenderer,
};
pub use model::{MarkerSprite, Scene, SceneFrame, StarSprite};
pub use params::SceneParams;
pub use starfield::Starfield;
