//! Content Renderer
//!
//! Display-only mapping from page state to markup. [`view`] builds the
//! view model; [`html`] turns it into a static document.

pub mod html;
pub mod view;

pub use html::{escape, render_page, SCENE_MOUNT_ID};
pub use view::{
    legend, ActionItem, DonationPanel, Field, LegendEntry, LinkButton, LinkKind, LoadedPage,
    NftCard, PageView, ProjectCard, ACTIONS_HEADING, DONATION_HEADING, FOOTER_LINES,
    LEGEND_TITLE, LOADING_MESSAGE, NFT_HEADING, PROJECT_HEADING,
};
