use std::time::Duration;

use arena_battle::Creature;
use arena_protocol::{CatalogEntry, CatalogRequest, ParseError, parse_pokemon};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::CatalogConfig;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("No creature found for {0}")]
    NotFound(String),

    #[error("Creature catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Unreadable catalog response: {0}")]
    Invalid(#[from] ParseError),
}

/// Source of creature data, looked up by catalog id or by name.
///
/// Implemented over HTTP by [`PokeApiCatalog`]; tests provide their own.
#[async_trait]
pub trait CreatureCatalog: Send + Sync {
    /// Look up a creature by numeric id.
    async fn fetch_by_id(&self, id: u32) -> Result<CatalogEntry, CatalogError>;

    /// Look up a creature from free text (e.g. "Mr. Mime").
    async fn search(&self, query: &str) -> Result<CatalogEntry, CatalogError>;
}

/// Turn a catalog entry into a battle creature
pub fn creature_from_entry(entry: CatalogEntry) -> Creature {
    Creature {
        name: entry.display_name(),
        category: entry.category,
        sprite: entry.sprite_url,
    }
}

/// HTTP client for a PokeAPI-compatible catalog
#[derive(Clone)]
pub struct PokeApiCatalog {
    client: Client,
    base_url: String,
}

impl PokeApiCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(&config.base_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, request: CatalogRequest) -> Result<CatalogEntry, CatalogError> {
        let url = request.to_url(&self.base_url);
        tracing::debug!(url = %url, "Fetching catalog entry");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(request.to_path()));
        }
        if !status.is_success() {
            return Err(CatalogError::Unavailable(format!(
                "{} returned {}",
                url, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        Ok(parse_pokemon(&body)?)
    }
}

#[async_trait]
impl CreatureCatalog for PokeApiCatalog {
    async fn fetch_by_id(&self, id: u32) -> Result<CatalogEntry, CatalogError> {
        self.get(CatalogRequest::ById(id)).await
    }

    async fn search(&self, query: &str) -> Result<CatalogEntry, CatalogError> {
        let request = CatalogRequest::search(query);
        if let CatalogRequest::ByName(name) = &request
            && name.is_empty()
        {
            return Err(CatalogError::NotFound("empty query".to_string()));
        }
        self.get(request).await
    }
}
