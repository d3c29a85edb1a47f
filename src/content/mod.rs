//! Site Content
//!
//! Typed records for the four published documents and the fixed category
//! table used by the legend and the helix markers.

pub mod category;
pub mod types;

pub use category::{CategoryInfo, CATEGORIES, DEFAULT_COLOR};
pub use types::{DonationAction, DonationSummary, Event, Nft, Project, HASH_PREVIEW_CHARS};

/// The four resources the page is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Events,
    Nfts,
    Projects,
    Donations,
}

impl Resource {
    /// All resources, in fetch order
    pub const ALL: [Resource; 4] = [
        Resource::Events,
        Resource::Nfts,
        Resource::Projects,
        Resource::Donations,
    ];

    /// Published file name of the resource
    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Events => "events.json",
            Resource::Nfts => "nfts.json",
            Resource::Projects => "projetos.json",
            Resource::Donations => "ajudas.json",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Everything the page displays, populated at once by the loader
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    pub events: Vec<Event>,
    pub nfts: Vec<Nft>,
    pub projects: Vec<Project>,
    pub donations: Option<DonationSummary>,
}

impl SiteContent {
    /// True when nothing has been populated
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
            && self.nfts.is_empty()
            && self.projects.is_empty()
            && self.donations.is_none()
    }
}
