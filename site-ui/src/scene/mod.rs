//! Browser Scene Host
//!
//! Binds the platform-neutral scene lifecycle to the window: a 2D canvas
//! surface, `requestAnimationFrame` and the window `resize` event.

pub mod canvas;
pub mod host;

pub use canvas::CanvasSurface;
pub use host::BrowserHost;
