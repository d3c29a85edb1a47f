//! # Dois de Muitos
//!
//! Living archive site for the Coletivo Dois de Muitos: loads the published
//! JSON documents (events, NFTs, projects, donations), renders the page and
//! drives the decorative 3D helix background.
//!
//! ## Modules
//!
//! - [`content`]: Typed records and the category table
//! - [`state`]: Page state with its one-way loading flag
//! - [`loader`]: Concurrent fetch of the four documents
//! - [`scene`]: Starfield and helix geometry, projection, frame loop lifecycle
//! - [`render`]: Page view model and static HTML
//! - [`config`], [`logging`], [`api`]: Native preview server (`server` feature)
//!
//! The core modules build for `wasm32-unknown-unknown` with default features
//! off; the Leptos client in `site-ui/` depends on them that way.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dois_de_muitos::loader::{DataLoader, DirSource, LoadPolicy};
//! use dois_de_muitos::render::{render_page, PageView};
//! use dois_de_muitos::SiteState;
//!
//! #[tokio::main]
//! async fn main() {
//!     let loader = DataLoader::new(DirSource::new("public"), LoadPolicy::default());
//!
//!     let mut state = SiteState::new();
//!     loader.load_into(&mut state).await;
//!
//!     println!("{}", render_page(&PageView::from_state(&state)));
//! }
//! ```

pub mod content;
pub mod loader;
pub mod render;
pub mod scene;
pub mod state;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;

// Re-export top-level types for convenience
pub use content::{
    DonationAction, DonationSummary, Event, Nft, Project, Resource, SiteContent, CATEGORIES,
};

pub use state::SiteState;

pub use loader::{DataLoader, LoadError, LoadPolicy, LoadReport, LoadResult, ResourceSource};

pub use scene::{
    ActiveScene, CancelHandle, PerspectiveCamera, RenderSurface, Scene, SceneFrame, SceneHost,
    SceneParams, ScenePhase, SceneRenderer, Viewport,
};

pub use render::{render_page, PageView};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{
    Config, ConfigError, ConfigOrigin, DataConfig, DataSource, LoggingConfig, ServerConfig,
};
