//! Data Loader
//!
//! Fetches the four site documents concurrently and settles them into a
//! [`SiteContent`]. Every fetch runs to completion (join, not
//! short-circuit); failures are logged and carried in the [`LoadReport`]
//! but never surface in the rendered page.
//!
//! # Partial failure
//!
//! [`LoadPolicy::AllOrNothing`] reproduces the behavior the site has always
//! had: a single failed resource leaves every collection empty.
//! [`LoadPolicy::PerResource`] keeps the collections that did load.
//!
//! # Example
//!
//! ```rust,no_run
//! use dois_de_muitos::loader::{DataLoader, DirSource, LoadPolicy};
//! use dois_de_muitos::SiteState;
//!
//! # async fn run() {
//! let loader = DataLoader::new(DirSource::new("public"), LoadPolicy::PerResource);
//! let mut state = SiteState::new();
//! let failures = loader.load_into(&mut state).await;
//! assert!(!state.is_loading());
//! println!("{} resources failed", failures.len());
//! # }
//! ```

pub mod error;
pub mod source;

pub use error::{LoadError, LoadResult};
pub use source::ResourceSource;

#[cfg(feature = "server")]
pub use source::{DirSource, HttpSource};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::content::{DonationSummary, Event, Nft, Project, Resource, SiteContent};
use crate::state::SiteState;

/// What to keep when some resources fail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Any failure leaves every collection empty
    #[default]
    AllOrNothing,
    /// Successful collections populate, failed ones stay empty
    PerResource,
}

impl std::str::FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all_or_nothing" | "all-or-nothing" => Ok(LoadPolicy::AllOrNothing),
            "per_resource" | "per-resource" => Ok(LoadPolicy::PerResource),
            other => Err(format!("Unknown load policy: {}", other)),
        }
    }
}

/// Outcome of one load
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Content to install, already filtered by the policy
    pub content: SiteContent,
    /// Every resource that failed, in fetch order
    pub failures: Vec<LoadError>,
}

impl LoadReport {
    /// True when all four resources loaded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether a given resource failed
    pub fn failed(&self, resource: Resource) -> bool {
        self.failures.iter().any(|f| f.resource() == resource)
    }
}

/// Loads the site documents from a [`ResourceSource`]
pub struct DataLoader<S> {
    source: S,
    policy: LoadPolicy,
}

impl<S: ResourceSource> DataLoader<S> {
    pub fn new(source: S, policy: LoadPolicy) -> Self {
        Self { source, policy }
    }

    /// Policy applied on partial failure
    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch all four resources concurrently and settle them
    pub async fn load(&self) -> LoadReport {
        tracing::debug!(source = %self.source.describe(), "Loading site data");

        let (events, nfts, projects, donations) = futures::join!(
            self.fetch_json::<Vec<Event>>(Resource::Events),
            self.fetch_json::<Vec<Nft>>(Resource::Nfts),
            self.fetch_json::<Vec<Project>>(Resource::Projects),
            self.fetch_json::<Option<DonationSummary>>(Resource::Donations),
        );

        let mut failures = Vec::new();
        let events = settle(events, &mut failures);
        let nfts = settle(nfts, &mut failures);
        let projects = settle(projects, &mut failures);
        let donations = settle(donations, &mut failures);

        for failure in &failures {
            tracing::error!(
                resource = %failure.resource(),
                error = %failure,
                "Failed to load site data"
            );
        }

        let content = if !failures.is_empty() && self.policy == LoadPolicy::AllOrNothing {
            SiteContent::default()
        } else {
            SiteContent {
                events: events.unwrap_or_default(),
                nfts: nfts.unwrap_or_default(),
                projects: projects.unwrap_or_default(),
                donations: donations.flatten(),
            }
        };

        tracing::info!(
            events = content.events.len(),
            nfts = content.nfts.len(),
            projects = content.projects.len(),
            donations = content.donations.is_some(),
            failed = failures.len(),
            "Site data loaded"
        );

        LoadReport { content, failures }
    }

    /// Load and complete `state`; the loading flag drops whatever happened.
    ///
    /// Returns the failures for hosts that log them themselves.
    pub async fn load_into(&self, state: &mut SiteState) -> Vec<LoadError> {
        let LoadReport { content, failures } = self.load().await;
        state.finish(content);
        failures
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: Resource) -> LoadResult<T> {
        let body = self.source.fetch(resource).await?;
        serde_json::from_slice(&body).map_err(|error| LoadError::Decode { resource, error })
    }
}

fn settle<T>(result: LoadResult<T>, failures: &mut Vec<LoadError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            failures.push(e);
            None
        }
    }
}
