//! Loader error types
//!
//! Every failure names the resource it came from. Callers never branch on
//! the kind: the page treats all of them as "data load failure".

use crate::content::Resource;
use thiserror::Error;

/// Errors that can occur while fetching or decoding a resource
#[derive(Error, Debug)]
pub enum LoadError {
    /// Transport failed before a response arrived
    #[error("Network error fetching {resource}: {message}")]
    Network { resource: Resource, message: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} fetching {resource}")]
    Status { resource: Resource, status: u16 },

    /// Local file could not be read
    #[error("IO error reading {resource}: {error}")]
    Io {
        resource: Resource,
        #[source]
        error: std::io::Error,
    },

    /// Body is not the expected JSON shape
    #[error("Failed to decode {resource}: {error}")]
    Decode {
        resource: Resource,
        #[source]
        error: serde_json::Error,
    },
}

impl LoadError {
    /// Resource this failure belongs to
    pub fn resource(&self) -> Resource {
        match self {
            LoadError::Network { resource, .. }
            | LoadError::Status { resource, .. }
            | LoadError::Io { resource, .. }
            | LoadError::Decode { resource, .. } => *resource,
        }
    }
}

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;
