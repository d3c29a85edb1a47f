//! HTTP Client
//!
//! Fetch-based [`ResourceSource`] for the published documents, which sit
//! next to the page (`/events.json`, ...).

use async_trait::async_trait;
use gloo_net::http::Request;

use dois_de_muitos::content::Resource;
use dois_de_muitos::loader::{DataLoader, LoadError, LoadPolicy, LoadResult, ResourceSource};
use dois_de_muitos::SiteState;

/// Fetches resources from `{base}/{file_name}` with the browser fetch API
#[derive(Debug, Clone, Default)]
pub struct GlooSource {
    base: String,
}

impl GlooSource {
    /// Source rooted at `base`; an empty base means the page origin
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// URL a resource is fetched from
    pub fn url_of(&self, resource: Resource) -> String {
        format!("{}/{}", self.base, resource.file_name())
    }
}

#[async_trait(?Send)]
impl ResourceSource for GlooSource {
    fn describe(&self) -> String {
        if self.base.is_empty() {
            "page origin".to_string()
        } else {
            self.base.clone()
        }
    }

    async fn fetch(&self, resource: Resource) -> LoadResult<Vec<u8>> {
        let response = Request::get(&self.url_of(resource))
            .send()
            .await
            .map_err(|e| LoadError::Network {
                resource,
                message: e.to_string(),
            })?;

        if !response.ok() {
            return Err(LoadError::Status {
                resource,
                status: response.status(),
            });
        }

        response.binary().await.map_err(|e| LoadError::Network {
            resource,
            message: e.to_string(),
        })
    }
}

/// Load all four documents and return the completed state.
///
/// Failures go to the browser console and never reach the page.
pub async fn load_site() -> SiteState {
    let loader = DataLoader::new(GlooSource::default(), LoadPolicy::default());

    let mut site = SiteState::new();
    for failure in loader.load_into(&mut site).await {
        web_sys::console::error_1(&format!("Erro ao carregar dados: {}", failure).into());
    }
    site
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_urls() {
        let source = GlooSource::default();
        assert_eq!(source.url_of(Resource::Events), "/events.json");
        assert_eq!(source.url_of(Resource::Donations), "/ajudas.json");
    }

    #[test]
    fn test_base_trailing_slash() {
        let source = GlooSource::new("https://coletivo.test/dados/");
        assert_eq!(
            source.url_of(Resource::Projects),
            "https://coletivo.test/dados/projetos.json"
        );
    }
}
