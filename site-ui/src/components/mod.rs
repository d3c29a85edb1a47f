//! UI Components
//!
//! Leptos components for the page sections. Each takes the matching piece
//! of the core `PageView`.

pub mod card;
pub mod donations;
pub mod footer;
pub mod legend;
pub mod loading;
pub mod nft_card;
pub mod project_card;
pub mod scene_canvas;

pub use donations::Donations;
pub use footer::Footer;
pub use legend::Legend;
pub use loading::Loading;
pub use nft_card::NftCardView;
pub use project_card::ProjectCardView;
pub use scene_canvas::SceneCanvas;
