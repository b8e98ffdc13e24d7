use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Product, error::CatalogError};
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_CATALOG_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// Where the product collection comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Fetches the collection with a single GET against a fixed endpoint.
pub struct HttpCatalogSource {
    http: Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(endpoint = %self.endpoint, "requesting product catalog");
        let res = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = res
            .bytes()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;
        let products: Vec<Product> =
            serde_json::from_slice(&body).map_err(|err| CatalogError::Decode(err.to_string()))?;
        info!(
            endpoint = %self.endpoint,
            count = products.len(),
            "fetched product catalog"
        );
        Ok(products)
    }
}

#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod tests;
