//! Page State
//!
//! The single state record shared by the scene and the content renderer.
//! It starts in the loading phase and is written exactly once, by the
//! loader's completion; every other component only reads it.

use crate::content::SiteContent;

/// Loaded page state
#[derive(Debug, Clone, PartialEq)]
pub struct SiteState {
    loading: bool,
    content: SiteContent,
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteState {
    /// Fresh state: loading, with every collection empty
    pub fn new() -> Self {
        Self {
            loading: true,
            content: SiteContent::default(),
        }
    }

    /// Whether the loader is still running
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current content (default until the loader finishes)
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Complete the load: install the content and leave the loading phase.
    ///
    /// Returns `false` (and changes nothing) when the state already
    /// finished, so the loading flag flips at most once.
    pub fn finish(&mut self, content: SiteContent) -> bool {
        if !self.loading {
            tracing::warn!("Ignoring second load completion");
            return false;
        }
        self.content = content;
        self.loading = false;
        true
    }
}
