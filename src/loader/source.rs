//! Resource Sources
//!
//! Where the four documents come from. The loader only sees the
//! [`ResourceSource`] trait; the native build reads a data directory or an
//! HTTP base URL, the browser client brings its own fetch-based source.

use async_trait::async_trait;

use super::error::LoadResult;
use crate::content::Resource;

/// A place the loader can fetch raw resource bytes from
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ResourceSource {
    /// Human-readable location, used in logs
    fn describe(&self) -> String;

    /// Fetch the raw body of one resource
    async fn fetch(&self, resource: Resource) -> LoadResult<Vec<u8>>;
}

#[cfg(feature = "server")]
pub use native::{DirSource, HttpSource};

#[cfg(feature = "server")]
mod native {
    use super::*;
    use crate::loader::error::LoadError;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Reads resources from a directory holding the published JSON files
    #[derive(Debug, Clone)]
    pub struct DirSource {
        root: PathBuf,
    }

    impl DirSource {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        /// Full path of a resource inside the directory
        pub fn path_of(&self, resource: Resource) -> PathBuf {
            self.root.join(resource.file_name())
        }
    }

    #[async_trait]
    impl ResourceSource for DirSource {
        fn describe(&self) -> String {
            format!("dir:{}", self.root.display())
        }

        async fn fetch(&self, resource: Resource) -> LoadResult<Vec<u8>> {
            tokio::fs::read(self.path_of(resource))
                .await
                .map_err(|error| LoadError::Io { resource, error })
        }
    }

    /// Fetches resources over HTTP from `{base_url}/{file_name}`
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpSource {
        /// Create a source with the given request timeout
        pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            Ok(Self::with_client(client, base_url))
        }

        /// Create a source reusing an existing client
        pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
            Self {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }
        }

        /// URL a resource is fetched from
        pub fn url_of(&self, resource: Resource) -> String {
            format!("{}/{}", self.base_url, resource.file_name())
        }
    }

    #[async_trait]
    impl ResourceSource for HttpSource {
        fn describe(&self) -> String {
            self.base_url.clone()
        }

        async fn fetch(&self, resource: Resource) -> LoadResult<Vec<u8>> {
            let response = self
                .client
                .get(self.url_of(resource))
                .send()
                .await
                .map_err(|e| LoadError::Network {
                    resource,
                    message: e.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    resource,
                    status: status.as_u16(),
                });
            }

            let body = response.bytes().await.map_err(|e| LoadError::Network {
                resource,
                message: e.to_string(),
            })?;

            Ok(body.to_vec())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tempfile::tempdir;

        #[tokio::test]
        async fn test_dir_source_reads_file() {
            let dir = tempdir().unwrap();
            std::fs::write(dir.path().join("events.json"), b"[]").unwrap();

            let source = DirSource::new(dir.path());
            let bytes = source.fetch(Resource::Events).await.unwrap();
            assert_eq!(bytes, b"[]");
        }

        #[tokio::test]
        async fn test_dir_source_missing_file() {
            let dir = tempdir().unwrap();
            let source = DirSource::new(dir.path());

            let err = source.fetch(Resource::Nfts).await.unwrap_err();
            assert!(matches!(err, LoadError::Io { resource: Resource::Nfts, .. }));
        }

        #[test]
        fn test_http_source_url_normalized() {
            let source = HttpSource::with_client(reqwest::Client::new(), "http://localhost:3000/");
            assert_eq!(
                source.url_of(Resource::Projects),
                "http://localhost:3000/projetos.json"
            );
        }
    }
}
